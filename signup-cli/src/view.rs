//! Terminal rendering of a form session.

use std::io::{self, Write};

use crossterm::style::{StyledContent, Stylize};
use signup_lib::engine::{PasswordRequirement, unmet_requirements};
use signup_lib::{
    CountryCode, FieldDisplay, FieldName, FieldVerdict, FormMessage, FormView, OutcomeKind,
    SessionSnapshot,
};

/// Prints verdicts and messages to stdout.
#[derive(Debug, Clone, Copy)]
pub struct TerminalView {
    color: bool,
}

impl TerminalView {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint<'a>(&self, text: &'a str, style: fn(&'a str) -> StyledContent<&'a str>) -> String {
        if self.color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }

    fn write_line(&self, line: &str) {
        let mut out = io::stdout().lock();
        let _ = writeln!(out, "{line}");
        let _ = out.flush();
    }

    pub fn prompt(&self) {
        let mut out = io::stdout().lock();
        let _ = write!(out, "> ");
        let _ = out.flush();
    }

    pub fn info(&self, text: &str) {
        self.write_line(text);
    }

    pub fn error(&self, err: &dyn std::fmt::Display) {
        let text = err.to_string();
        self.write_line(&self.paint(&text, |s| s.red()));
    }

    /// Points the user at the field to fix next.
    pub fn focus(&self, field: FieldName) {
        self.write_line(&format!("  -> {}", self.paint(field.label(), |s| s.bold())));
    }

    pub fn show_countries(&self) {
        for code in CountryCode::ALL {
            self.write_line(&format!("  {:<6} {}", code.value(), code.name()));
        }
    }

    /// Prints every field with its value and display state.
    pub fn show_snapshot(&self, snapshot: &SessionSnapshot) {
        for field in FieldName::ALL {
            let raw = snapshot.values.get(field);
            let value = match field {
                FieldName::Password | FieldName::ConfirmPassword => "*".repeat(raw.chars().count()),
                _ => raw.to_string(),
            };
            let status = match snapshot.display(field) {
                FieldDisplay::Neutral => String::new(),
                FieldDisplay::Valid => self.paint("✓", |s| s.green()),
                FieldDisplay::Error(message) => {
                    format!("{} {}", self.paint("✗", |s| s.red()), message)
                }
            };
            self.write_line(&format!("  {:<18} {:<24} {}", field.label(), value, status));
        }

        let password = snapshot.values.get(FieldName::Password);
        if !password.is_empty() {
            let unmet = unmet_requirements(password);
            let checklist: Vec<String> = PasswordRequirement::ALL
                .into_iter()
                .map(|requirement| {
                    let mark = if unmet.contains(&requirement) {
                        self.paint("✗", |s| s.red())
                    } else {
                        self.paint("✓", |s| s.green())
                    };
                    format!("{mark} {}", requirement.description())
                })
                .collect();
            self.write_line(&format!("  password: {}", checklist.join("  ")));
        }

        if let Some(message) = &snapshot.message {
            self.show_message(message);
        }
        self.write_line(&format!("  state: {:?}", snapshot.state));
    }
}

impl FormView for TerminalView {
    fn show_field(&self, field: FieldName, verdict: &FieldVerdict) {
        let line = if verdict.valid {
            format!("  {} {}", self.paint("✓", |s| s.green()), field.label())
        } else {
            format!(
                "  {} {}: {}",
                self.paint("✗", |s| s.red()),
                field.label(),
                verdict.message
            )
        };
        self.write_line(&line);
    }

    fn show_message(&self, message: &FormMessage) {
        let text = match message.kind {
            OutcomeKind::Success => self.paint(&message.text, |s| s.green().bold()),
            OutcomeKind::Failure => self.paint(&message.text, |s| s.red().bold()),
        };
        self.write_line(&format!("[{}] {}", message.kind.style_class(), text));
    }

    fn reset(&self) {
        self.write_line("");
        self.write_line(&self.paint("Form reset.", |s| s.dim()));
        self.prompt();
    }
}
