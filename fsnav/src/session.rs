//! Interactive session: reads commands, runs them against one index and
//! prints the results.

use std::io::{BufRead, Write};

use chrono::{DateTime, Local};
use fstree::render::{self, format_size};
use fstree::{Entry, OrderedIndex, Statistics};
use serde::Serialize;
use tracing::{debug, info};

use crate::command::{Command, HELP};
use crate::config::Config;
use crate::error::Result;
use crate::sample;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session {
    index: OrderedIndex,
    config: Config,
    operations: u64,
    started: DateTime<Local>,
}

/// `stats` output: index figures plus session counters.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionReport {
    #[serde(flatten)]
    pub statistics: Statistics,
    pub operations: u64,
    pub session_started: String,
    pub session_seconds: i64,
}

impl Session {
    pub fn new(config: Config) -> Session {
        Session {
            index: OrderedIndex::new(),
            config,
            operations: 0,
            started: Local::now(),
        }
    }

    pub fn index(&self) -> &OrderedIndex {
        &self.index
    }

    pub fn operations(&self) -> u64 {
        self.operations
    }

    pub fn report(&self) -> SessionReport {
        SessionReport {
            statistics: self.index.statistics(),
            operations: self.operations,
            session_started: self.started.to_rfc3339(),
            session_seconds: (Local::now() - self.started).num_seconds(),
        }
    }

    /// Reads and executes lines until end of input or `quit`.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        if !self.config.quiet {
            writeln!(out, "File system navigator. Type 'help' for commands.")?;
        }
        let mut lines = input.lines();
        loop {
            if !self.config.quiet {
                write!(out, "> ")?;
                out.flush()?;
            }
            let line = match lines.next() {
                Some(line) => line?,
                None => break,
            };
            if self.execute_line(&line, out)? == Flow::Quit {
                break;
            }
        }
        info!(operations = self.operations, "session finished");
        Ok(())
    }

    /// Parses and runs one line. Malformed commands are reported on `out`.
    pub fn execute_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow> {
        match Command::parse(line) {
            Ok(Some(command)) => self.execute(command, out),
            Ok(None) => Ok(Flow::Continue),
            Err(err) => {
                debug!(line, %err, "rejected command");
                writeln!(out, "error: {}", err)?;
                Ok(Flow::Continue)
            }
        }
    }

    pub fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<Flow> {
        if command.is_index_operation() {
            self.operations += 1;
        }

        match command {
            Command::MakeDirectory(name) => {
                if self.index.create_directory(&name) {
                    writeln!(out, "Created directory: {}/", name)?;
                } else {
                    self.report_rejected(&name, out)?;
                }
            }
            Command::Touch { name, size } => {
                let size = size.unwrap_or(self.config.default_size);
                if self.index.create_file(&name, size) {
                    writeln!(out, "Created file: {} ({})", name, format_size(size))?;
                } else {
                    self.report_rejected(&name, out)?;
                }
            }
            Command::Find(name) => match self.index.find(&name) {
                Some(entry) if self.config.json => {
                    writeln!(out, "{}", serde_json::to_string_pretty(entry)?)?
                }
                Some(entry) => writeln!(out, "Found: {} [{}]", render::label(entry), entry.kind())?,
                None => writeln!(out, "Not found: {}", name)?,
            },
            Command::Extension(extension) => {
                let found = self.index.find_by_extension(&extension);
                self.print_entries(&found, out)?;
            }
            Command::SizeRange { min, max } => {
                let found = self.index.find_by_size(min, max);
                self.print_entries(&found, out)?;
            }
            Command::Largest(count) => {
                let found = self.index.find_largest(count);
                self.print_entries(&found, out)?;
            }
            Command::Total => {
                let total = self.index.total_size();
                writeln!(out, "Total size: {} bytes ({})", total, format_size(total))?;
            }
            Command::Remove(name) => {
                if self.index.delete(&name) {
                    writeln!(out, "Deleted: {}", name)?;
                } else {
                    writeln!(out, "Not found: {}", name)?;
                }
            }
            Command::Tree => write!(out, "{}", render::render_tree(&self.index))?,
            Command::Levels => {
                if self.index.is_empty() {
                    writeln!(out, "(empty file system)")?;
                } else {
                    write!(out, "{}", render::render_levels(&self.index))?;
                }
            }
            Command::Stats => self.print_stats(out)?,
            Command::Sample => {
                let created = sample::load_sample_data(&mut self.index);
                writeln!(out, "Sample data loaded: {} entries", created)?;
            }
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn report_rejected<W: Write>(&self, name: &str, out: &mut W) -> Result<()> {
        if name.trim().is_empty() {
            writeln!(out, "Invalid name")?;
        } else {
            writeln!(out, "Already exists: {}", name)?;
        }
        Ok(())
    }

    fn print_entries<W: Write>(&self, entries: &[Entry], out: &mut W) -> Result<()> {
        if self.config.json {
            writeln!(out, "{}", serde_json::to_string_pretty(entries)?)?;
            return Ok(());
        }
        match entries.len() {
            0 => writeln!(out, "No matches")?,
            1 => writeln!(out, "1 match")?,
            n => writeln!(out, "{} matches", n)?,
        }
        for entry in entries {
            writeln!(out, "  {}", render::label(entry))?;
        }
        Ok(())
    }

    fn print_stats<W: Write>(&self, out: &mut W) -> Result<()> {
        let report = self.report();
        if self.config.json {
            writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
            return Ok(());
        }

        let stats = &report.statistics;
        writeln!(out, "File system statistics")?;
        writeln!(out, "  Files: {}", stats.total_files)?;
        writeln!(out, "  Directories: {}", stats.total_directories)?;
        writeln!(
            out,
            "  Total file size: {} bytes ({})",
            stats.total_file_size,
            format_size(stats.total_file_size)
        )?;
        match &stats.largest_file {
            Some(largest) => writeln!(
                out,
                "  Largest file: {} ({})",
                largest.name,
                format_size(largest.size)
            )?,
            None => writeln!(out, "  Largest file: none")?,
        }
        writeln!(out, "  Tree height: {}", stats.height)?;
        writeln!(out, "  Operations: {}", report.operations)?;
        writeln!(out, "  Session duration: {}s", report.session_seconds)?;
        Ok(())
    }
}
