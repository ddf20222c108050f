//! Interactive prompts
//!
//! Workflows talk to the user through the [`Prompter`] trait so they can be
//! driven from a terminal or from scripted answers.

use crate::config::Settings;
use crate::error::{Error, Result};
use crate::types::{Credentials, License};
use console::Term;
use std::collections::VecDeque;

/// Source of user input
pub trait Prompter {
    /// Read a line without echoing it
    fn secret(&mut self, prompt: &str) -> Result<String>;

    /// Read a visible line
    fn line(&mut self, prompt: &str) -> Result<String>;

    /// Show a line of text
    fn say(&mut self, message: &str) -> Result<()>;
}

/// Prompter backed by the process terminal
#[derive(Debug, Clone)]
pub struct TerminalPrompter {
    term: Term,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn secret(&mut self, prompt: &str) -> Result<String> {
        self.term.write_str(prompt)?;
        Ok(self.term.read_secure_line()?)
    }

    fn line(&mut self, prompt: &str) -> Result<String> {
        self.term.write_str(prompt)?;
        Ok(self.term.read_line()?)
    }

    fn say(&mut self, message: &str) -> Result<()> {
        Ok(self.term.write_line(message)?)
    }
}

/// Prompter that replays canned answers and records everything shown
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    /// Prompts and messages in the order they were shown
    pub transcript: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    fn next_answer(&mut self, prompt: &str) -> Result<String> {
        self.transcript.push(prompt.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| Error::validation(format!("No input for prompt: {prompt}")))
    }
}

impl Prompter for ScriptedPrompter {
    fn secret(&mut self, prompt: &str) -> Result<String> {
        self.next_answer(prompt)
    }

    fn line(&mut self, prompt: &str) -> Result<String> {
        self.next_answer(prompt)
    }

    fn say(&mut self, message: &str) -> Result<()> {
        self.transcript.push(message.to_string());
        Ok(())
    }
}

/// Ask for the password, and the OTP when the hostname requires one
pub fn prompt_credentials(
    prompter: &mut dyn Prompter,
    settings: &Settings,
) -> Result<Credentials> {
    let password = prompter.secret(&format!(
        "Password for {}/{}: ",
        settings.hostname, settings.username
    ))?;
    if password.is_empty() {
        return Err(Error::validation("Password must not be empty."));
    }

    let otp = if settings.requires_otp() {
        let otp = prompter.secret("OTP: ")?;
        if otp.trim().is_empty() {
            return Err(Error::validation(format!(
                "An OTP is required for {}.",
                settings.hostname
            )));
        }
        Some(otp.trim().to_string())
    } else {
        None
    };

    Ok(Credentials::new(&settings.hostname, &settings.username, password).with_otp(otp))
}

/// Parse a 1-based menu choice into an index
pub fn parse_selection(input: &str, count: usize) -> Result<usize> {
    if count == 0 {
        return Err(Error::validation("There is nothing to select."));
    }
    let input = input.trim();
    if input.is_empty() {
        return Err(Error::validation("No selection was made."));
    }
    let choice: usize = input
        .parse()
        .map_err(|_| Error::validation(format!("'{input}' is not a number.")))?;
    if choice == 0 || choice > count {
        return Err(Error::validation(format!(
            "Selection must be between 1 and {count}."
        )));
    }
    Ok(choice - 1)
}

/// List licenses and ask the user to pick one
pub fn select_license<'a>(
    prompter: &mut dyn Prompter,
    licenses: &'a [License],
) -> Result<&'a License> {
    if licenses.is_empty() {
        return Err(Error::validation("No licenses are available to select."));
    }

    prompter.say("Select a license:")?;
    for (idx, license) in licenses.iter().enumerate() {
        prompter.say(&format!(
            "{}. {} - {}",
            idx + 1,
            license.license_number,
            license.license_name
        ))?;
    }

    let input = prompter.line("Enter the number of the license to select: ")?;
    let index = parse_selection(&input, licenses.len())?;
    Ok(&licenses[index])
}

/// Check that a manifest number is a non-empty string of digits
pub fn validate_manifest_number(input: &str) -> Result<String> {
    let manifest = input.trim();
    if manifest.is_empty() || !manifest.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::validation(
            "Manifest number must be a string of digits.",
        ));
    }
    Ok(manifest.to_string())
}

/// Ask for a manifest number
pub fn prompt_manifest_number(prompter: &mut dyn Prompter) -> Result<String> {
    let input = prompter.line("Enter the manifest number: ")?;
    validate_manifest_number(&input)
}
