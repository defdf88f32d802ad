// file: src/prompt/mod.rs
// version: 1.0.0
// guid: 5c1d8e4a-27b9-4f03-86e2-d9a0b3c7f615

//! Interactive prompting for operator input
//!
//! [`Prompter`] is a thin driver over the pure validators in
//! [`crate::utils::validation`]: it asks, validates, reports the failure in red
//! and asks again until a value is accepted.

use crate::utils::validation::ValidationError;
use crate::{AgentError, Result};
use colored::Colorize;
use std::io::{self, BufRead, IsTerminal, Stdin, StdinLock, Stdout, Write};
use tracing::debug;

/// Reads operator answers from `R` and writes prompts and diagnostics to `W`
pub struct Prompter<R, W> {
    input: R,
    output: W,
    mask_secrets: bool,
}

impl Prompter<StdinLock<'static>, Stdout> {
    /// Prompter bound to the process's standard input and output.
    ///
    /// Passwords are masked only when standard input is a terminal; piped input
    /// is read line by line like every other answer.
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        let mask_secrets = stdin.is_terminal();
        Self {
            input: stdin.lock(),
            output: io::stdout(),
            mask_secrets,
        }
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a prompter over arbitrary streams; secrets are read unmasked
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            mask_secrets: false,
        }
    }

    /// Give back the output stream, mostly useful for inspecting transcripts
    pub fn into_output(self) -> W {
        self.output
    }

    /// Ask until `validate` accepts the answer.
    ///
    /// An empty answer is replaced by `default` when one is given.
    pub fn ask<T, F>(&mut self, prompt: &str, default: Option<&str>, validate: F) -> Result<T>
    where
        F: Fn(&str) -> std::result::Result<T, ValidationError>,
    {
        loop {
            let answer = self.read_line(prompt)?;
            let answer = match default {
                Some(default) if answer.trim().is_empty() => default.to_string(),
                _ => answer,
            };

            match validate(&answer) {
                Ok(value) => return Ok(value),
                Err(error) => {
                    debug!("Rejected input for '{}': {}", prompt.trim(), error);
                    self.error(&error.to_string())?;
                }
            }
        }
    }

    /// Ask for free text, falling back to `default` on an empty answer
    pub fn ask_text(&mut self, prompt: &str, default: &str) -> Result<String> {
        let answer = self.read_line(prompt)?;
        let answer = answer.trim();
        Ok(if answer.is_empty() {
            default.to_string()
        } else {
            answer.to_string()
        })
    }

    /// Ask for a non-empty password without echoing it when attached to a terminal
    pub fn ask_password(&mut self, prompt: &str) -> Result<String> {
        loop {
            let password = if self.mask_secrets {
                write!(self.output, "{} ", prompt.bold())?;
                self.output.flush()?;
                rpassword::read_password()
                    .map_err(|e| AgentError::prompt(format!("Failed to read password: {}", e)))?
            } else {
                self.read_line(prompt)?
            };

            let password = password.trim_end_matches(['\r', '\n']).to_string();
            if !password.is_empty() {
                return Ok(password);
            }
            self.error(&ValidationError::Empty.to_string())?;
        }
    }

    /// Section header
    pub fn info(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message.cyan())?;
        Ok(())
    }

    /// Example values and other hints
    pub fn hint(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message.yellow())?;
        Ok(())
    }

    /// Diagnostic for a rejected answer
    pub fn error(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message.red())?;
        Ok(())
    }

    /// Plain bold line, used for menu entries
    pub fn bold(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message.bold())?;
        Ok(())
    }

    /// Two blank lines between sections
    pub fn separator(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output)?;
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{} ", prompt.bold())?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Err(AgentError::prompt(format!(
                "no answer for '{}' before end of input",
                prompt.trim()
            )));
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}
