//! The explore event loop.
//!
//! Each selection change is an event; every event that changes what is shown
//! triggers a complete render pass, including a fresh fetch of the report.

use std::error::Error;
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, warn};

use super::execute::ExploreSummary;
use crate::fetch::Source;
use crate::matrix::SelectionState;
use crate::output::{OutputFormat, Outputable};
use crate::pipeline::{render_pass, Pipeline, RenderContext};

const HELP: &str = "\
Commands: producers [TAG...] | consumers [TAG...] | categories [NAME...] | clear | show | options | help | quit";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum EventError {
    #[error("Unknown command '{command}', type 'help' for the list of commands")]
    Unknown { command: String },

    #[error("The {pipeline} matrix has no {control} control")]
    NoRoleControl { pipeline: String, control: String },
}

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    SetProducers(Vec<String>),
    SetConsumers(Vec<String>),
    SetCategories(Vec<String>),
    Clear,
    Show,
    Options,
    Help,
    Quit,
}

/// Parse a line of input. Blank lines yield `None`.
pub fn parse_event(line: &str) -> Result<Option<SessionEvent>, EventError> {
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return Ok(None);
    };
    let values: Vec<String> = words.map(str::to_string).collect();

    let event = match command {
        "producers" => SessionEvent::SetProducers(values),
        "consumers" => SessionEvent::SetConsumers(values),
        "categories" => SessionEvent::SetCategories(values),
        "clear" => SessionEvent::Clear,
        "show" => SessionEvent::Show,
        "options" => SessionEvent::Options,
        "help" => SessionEvent::Help,
        "quit" | "exit" => SessionEvent::Quit,
        other => {
            return Err(EventError::Unknown {
                command: other.to_string(),
            })
        }
    };
    Ok(Some(event))
}

/// Interactive exploration of one pipeline
#[derive(Debug)]
pub struct Session {
    pipeline: Pipeline,
    source: Source,
    timeout: Option<Duration>,
    format: OutputFormat,
    selection: SelectionState,
    renders: usize,
    failed_renders: usize,
}

impl Session {
    pub fn new(
        pipeline: Pipeline,
        source: Source,
        timeout: Option<Duration>,
        format: OutputFormat,
    ) -> Self {
        Self {
            pipeline,
            source,
            timeout,
            format,
            selection: SelectionState::default(),
            renders: 0,
            failed_renders: 0,
        }
    }

    /// Render once, then handle input lines until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(
        mut self,
        input: R,
        out: &mut W,
    ) -> Result<ExploreSummary, Box<dyn Error>> {
        self.help(out)?;
        self.render(out)?;

        for line in input.lines() {
            let line = line?;
            match parse_event(&line) {
                Ok(Some(SessionEvent::Quit)) => break,
                Ok(Some(event)) => self.handle(event, out)?,
                Ok(None) => {}
                Err(e) => self.notice(out, &e)?,
            }
        }

        Ok(ExploreSummary {
            pipeline: self.pipeline,
            renders: self.renders,
            failed_renders: self.failed_renders,
            selection: self.selection,
        })
    }

    fn handle<W: Write>(&mut self, event: SessionEvent, out: &mut W) -> Result<(), Box<dyn Error>> {
        debug!(?event, "session event");
        match event {
            SessionEvent::SetProducers(values) => {
                if let Err(e) = self.require_role_controls("Producers") {
                    self.notice(out, &e)?;
                    return Ok(());
                }
                self.selection.producers = values;
            }
            SessionEvent::SetConsumers(values) => {
                if let Err(e) = self.require_role_controls("Consumers") {
                    self.notice(out, &e)?;
                    return Ok(());
                }
                self.selection.consumers = values;
            }
            SessionEvent::SetCategories(values) => self.selection.function_categories = values,
            SessionEvent::Clear => self.selection = SelectionState::default(),
            SessionEvent::Show => {}
            SessionEvent::Options => {
                match RenderContext::load(self.pipeline, &self.source, self.timeout) {
                    Ok(ctx) => writeln!(out, "{}", ctx.options().format(self.format))?,
                    Err(e) => self.notice(out, &format_args!("Error: {}", e))?,
                }
                return Ok(());
            }
            SessionEvent::Help => {
                self.help(out)?;
                return Ok(());
            }
            SessionEvent::Quit => return Ok(()),
        }
        self.render(out)
    }

    fn require_role_controls(&self, control: &str) -> Result<(), EventError> {
        if self.pipeline.has_role_controls() {
            Ok(())
        } else {
            Err(EventError::NoRoleControl {
                pipeline: self.pipeline.name().to_string(),
                control: control.to_string(),
            })
        }
    }

    /// A failed pass is reported and the session keeps going
    fn render<W: Write>(&mut self, out: &mut W) -> Result<(), Box<dyn Error>> {
        self.renders += 1;
        match render_pass(self.pipeline, &self.source, self.timeout, &self.selection) {
            Ok(result) => writeln!(out, "{}", result.format(self.format))?,
            Err(e) => {
                warn!(error = %e, "render pass failed");
                self.failed_renders += 1;
                if self.format == OutputFormat::Table {
                    writeln!(out, "Error: {}", e)?;
                }
            }
        }
        Ok(())
    }

    /// Table sessions print the line; structured sessions keep `out` to
    /// rendered documents and log the line instead.
    fn notice<W: Write>(&self, out: &mut W, line: &dyn Display) -> io::Result<()> {
        if self.format == OutputFormat::Table {
            writeln!(out, "{}", line)
        } else {
            warn!("{}", line);
            Ok(())
        }
    }

    fn help<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.format == OutputFormat::Table {
            writeln!(out, "{}", HELP)?;
        }
        Ok(())
    }
}
