use chrono::{Local, NaiveDate};
use std::io::{self, BufRead, Write};

use crate::db::ContactRepo;
use crate::error::{RapportError, RapportResult};
use crate::model::{Contact, ContactId};
use crate::queries::InsightThresholds;

pub struct CLIContext {
    pub repo: ContactRepo,
    pub thresholds: InsightThresholds,
    input: Box<dyn BufRead>,
    today: Option<NaiveDate>,
}

impl CLIContext {
    pub fn new(repo: ContactRepo, thresholds: InsightThresholds) -> Self {
        Self {
            repo,
            thresholds,
            input: Box::new(io::BufReader::new(io::stdin())),
            today: None,
        }
    }

    /// Reads answers from `input` instead of stdin.
    pub fn with_input(mut self, input: impl BufRead + 'static) -> Self {
        self.input = Box::new(input);
        self
    }

    /// Pins "today" to a fixed date instead of the local clock.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Prompt and read a line. Returns None on EOF.
    pub fn read_line(&mut self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        io::stdout().flush().ok();
        let mut buf = String::new();
        match self.input.read_line(&mut buf) {
            Ok(0) => None,
            Ok(_) => Some(buf.trim_end_matches('\n').trim_end_matches('\r').to_string()),
            Err(_) => None,
        }
    }

    /// Read a line, trimmed.
    pub fn prompt(&mut self, prompt: &str) -> Option<String> {
        self.read_line(prompt).map(|s| s.trim().to_string())
    }

    /// Re-prompts until `parse` accepts the answer. Returns None on EOF.
    pub fn prompt_until<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> RapportResult<T>,
    ) -> Option<T> {
        loop {
            let answer = self.prompt(prompt)?;
            match parse(&answer) {
                Ok(value) => return Some(value),
                Err(e) => self.print_error(&e),
            }
        }
    }

    /// Looks up a contact by id, printing a message when it is missing.
    pub fn find_contact(&self, id: ContactId) -> Option<Contact> {
        let found = self.repo.get(id).cloned();
        if found.is_none() {
            println!("No contact found with ID {}", id);
        }
        found
    }

    pub fn format_days_ago(days: Option<i64>) -> String {
        match days {
            None => "never".into(),
            Some(0) => "today".into(),
            Some(1) => "yesterday".into(),
            Some(n) if n < 7 => format!("{} days ago", n),
            Some(n) if n < 30 => format!("{} week(s) ago", n / 7),
            Some(n) if n < 365 => format!("{} month(s) ago", n / 30),
            Some(n) => format!("{} year(s) ago", n / 365),
        }
    }

    /// Print an error.
    pub fn print_error(&self, e: &RapportError) {
        println!("Error: {}", e);
    }
}
