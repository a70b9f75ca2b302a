// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Riddle contributors

//! `riddle` command implementation.
//!
//! Builds one matcher from the query, then streams candidates from
//! stdin or the named files through it.

use std::path::Path;

use anyhow::Context as _;
use termcolor::{ColorChoice, StandardStream};

use riddle::cli::{Cli, OutputFormat};
use riddle::color;
use riddle::config::{self, Config};
use riddle::discovery;
use riddle::error::ExitCode;
use riddle::filter::MatchingExt as _;
use riddle::input::{self, FileContent};
use riddle::matcher::Matcher;
use riddle::output;

/// Run the `riddle` command.
pub fn run(args: &Cli) -> anyhow::Result<ExitCode> {
    let config = load_config(args)?;
    let matcher = Matcher::new(&args.query, args.matcher_config(config.defaults.matcher()));

    if args.explain {
        explain(&args.query, &matcher);
    }

    let env_no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    let choice = color::resolve_color(args.color(config.defaults.color), env_no_color);

    let mut sink = Sink::new(args, choice);
    if args.files.is_empty() {
        let text = input::read_stdin().context("failed to read stdin")?;
        sink.drain(None, &text, &matcher)?;
    } else {
        // Prefix lines with their file only when several could mix.
        let show_origin = args.files.len() > 1;
        for path in &args.files {
            if sink.is_full() {
                break;
            }
            if path.as_os_str() == "-" {
                let text = input::read_stdin().context("failed to read stdin")?;
                sink.drain(show_origin.then_some("-"), &text, &matcher)?;
                continue;
            }
            let text = read_input(path)?;
            let origin = show_origin.then(|| path.display().to_string());
            let Some(text) = text.as_str() else {
                anyhow::bail!("{} is not valid UTF-8", path.display());
            };
            sink.drain(origin.as_deref(), text, &matcher)?;
        }
    }
    sink.finish()
}

/// Load configuration, preferring an explicit `--config` path over
/// discovery from the working directory.
fn load_config(args: &Cli) -> anyhow::Result<Config> {
    if let Some(path) = &args.config {
        return Ok(config::load(path)?);
    }
    let cwd = std::env::current_dir()?;
    match discovery::find_config(&cwd) {
        Some(path) => Ok(config::load(&path)?),
        None => Ok(Config::default()),
    }
}

fn read_input(path: &Path) -> anyhow::Result<FileContent> {
    FileContent::read(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Describe on stderr how the query will be interpreted.
fn explain(query: &str, matcher: &Matcher) {
    match matcher.as_pattern() {
        Some(pattern) => eprintln!("query {query:?} compiles to pattern {pattern:?}"),
        None => eprintln!("query {query:?} is matched as a literal substring"),
    }
}

/// Streams matches to the selected output, tracking the overall tally.
struct Sink {
    out: StandardStream,
    format: OutputFormat,
    count: bool,
    limit: Option<usize>,
    matched: usize,
    records: Vec<serde_json::Value>,
}

impl Sink {
    fn new(args: &Cli, choice: ColorChoice) -> Self {
        Self {
            out: StandardStream::stdout(choice),
            format: args.output,
            count: args.count,
            limit: args.limit,
            matched: 0,
            records: Vec::new(),
        }
    }

    /// The match limit has been reached and no more lines are wanted.
    fn is_full(&self) -> bool {
        !self.count && self.limit.is_some_and(|n| self.matched >= n)
    }

    /// Filter one source's lines into the output.
    fn drain(&mut self, origin: Option<&str>, text: &str, matcher: &Matcher) -> anyhow::Result<()> {
        if self.count {
            let n = text.lines().matching(matcher).count();
            self.matched += n;
            match self.format {
                OutputFormat::Json => self.records.push(count_value(origin, n)),
                _ => output::print_count(&mut self.out, origin, n)?,
            }
            return Ok(());
        }

        for line in text.lines() {
            if self.is_full() {
                break;
            }
            let Some(ranges) = matcher.match_ranges(line) else {
                continue;
            };
            self.matched += 1;
            match self.format {
                OutputFormat::Json => self.records.push(output::match_value(origin, line, &ranges)),
                _ => output::print_match(&mut self.out, origin, line, &ranges)?,
            }
        }
        Ok(())
    }

    /// Flush pending JSON and convert the tally into an exit code.
    fn finish(self) -> anyhow::Result<ExitCode> {
        if matches!(self.format, OutputFormat::Json) {
            let all = serde_json::Value::Array(self.records);
            println!("{}", serde_json::to_string_pretty(&all)?);
        }
        if self.matched > 0 {
            Ok(ExitCode::Matches)
        } else {
            Ok(ExitCode::NoMatches)
        }
    }
}

/// A per-source count as a JSON value.
fn count_value(origin: Option<&str>, count: usize) -> serde_json::Value {
    match origin {
        Some(file) => serde_json::json!({ "file": file, "count": count }),
        None => serde_json::json!({ "count": count }),
    }
}
