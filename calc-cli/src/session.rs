//! Feeds button tokens to the reducer and renders what the display shows.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use calc_core::{Button, CalculatorState, Operation, ParseButtonError, press};
use serde::Serialize;
use tracing::{debug, warn};

/// What `--show-state` prints: the display plus the public state fields.
#[derive(Debug, Serialize)]
struct Snapshot<'a> {
    display: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    total: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    operation: Option<Operation>,
}

impl<'a> From<&'a CalculatorState> for Snapshot<'a> {
    fn from(state: &'a CalculatorState) -> Self {
        Self {
            display: state.display(),
            total: state.total.as_deref(),
            next: state.next.as_deref(),
            operation: state.operation,
        }
    }
}

#[derive(Debug, Default)]
pub struct Session {
    state: CalculatorState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Parses every token first, then presses them in order.
    ///
    /// Nothing is pressed if any token is unrecognized.
    pub fn press_tokens<S: AsRef<str>>(
        &mut self,
        tokens: &[S],
    ) -> Result<(), ParseButtonError> {
        let buttons = tokens
            .iter()
            .map(|token| token.as_ref().parse())
            .collect::<Result<Vec<Button>, _>>()?;
        self.press_buttons(buttons);
        Ok(())
    }

    /// Presses the whitespace-separated tokens on one input line.
    pub fn feed_line(
        &mut self,
        line: &str,
    ) -> Result<(), ParseButtonError> {
        let buttons = Button::parse_sequence(line)?;
        self.press_buttons(buttons);
        Ok(())
    }

    fn press_buttons(
        &mut self,
        buttons: Vec<Button>,
    ) {
        for button in buttons {
            self.state = press(&self.state, button);
            debug!(%button, display = self.state.display(), "pressed");
        }
    }

    /// Renders the display value, or the display plus `total`, `next` and
    /// `operation` as TOML when `show_state` is set.
    pub fn render(
        &self,
        show_state: bool,
    ) -> Result<String> {
        if !show_state {
            return Ok(self.state.display().to_string());
        }
        let rendered = toml::to_string(&Snapshot::from(&self.state))
            .context("cannot serialize calculator state")?;
        Ok(rendered.trim_end().to_string())
    }

    /// Reads lines of tokens from `input` until a blank line or end of input,
    /// writing the rendered state after each line. Lines with unknown tokens
    /// are skipped.
    pub fn run_lines<R: BufRead, W: Write>(
        &mut self,
        input: R,
        mut output: W,
        show_state: bool,
    ) -> Result<()> {
        for line in input.lines() {
            let line = line.context("cannot read input")?;
            if line.trim().is_empty() {
                break;
            }
            if let Err(error) = self.feed_line(&line) {
                warn!(%error, line, "skipping line");
                continue;
            }
            writeln!(output, "{}", self.render(show_state)?).context("cannot write output")?;
        }
        Ok(())
    }
}
