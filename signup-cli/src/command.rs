//! Interactive command parsing.

use std::str::FromStr;

use signup_lib::error::ParseFieldError;
use signup_lib::{EventKind, FieldName};
use thiserror::Error;

/// A line typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `set <field> [value...]`: store a value and fire an input event.
    Set { field: FieldName, value: String },
    /// `input|blur|change <field>`: fire an event without changing the value.
    Event { kind: EventKind, field: FieldName },
    /// `country <code>`: select a country and fire a change event.
    Country(String),
    Submit,
    Show,
    Countries,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}' (type 'help')")]
    Unknown(String),

    #[error("'{0}' needs a field name")]
    MissingField(&'static str),

    #[error(transparent)]
    Field(#[from] ParseFieldError),
}

pub const HELP: &str = "\
Commands:
  set <field> [value...]    set a value (fires input)
  input|blur|change <field> fire an event for a field
  country <code>            select a country (fires change)
  submit                    submit the form
  show                      print the current form state
  countries                 list selectable countries
  help                      show this help
  quit                      exit

Fields: email, country, postalCode, password, confirmPassword";

/// Splits off the first word; the rest keeps its inner whitespace.
fn split_word(s: &str) -> (&str, &str) {
    match s.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (s, ""),
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_start();
        let (name, rest) = split_word(line);

        match name.to_lowercase().as_str() {
            "" => Err(CommandError::Empty),
            "set" => {
                let (field, value) = split_word(rest.trim_start());
                if field.is_empty() {
                    return Err(CommandError::MissingField("set"));
                }
                Ok(Self::Set {
                    field: field.parse()?,
                    value: value.trim_end_matches(['\r', '\n']).to_string(),
                })
            }
            "input" | "blur" | "change" => {
                let kind: EventKind = name
                    .parse()
                    .map_err(|_| CommandError::Unknown(name.to_string()))?;
                let field = rest.trim();
                if field.is_empty() {
                    return Err(CommandError::MissingField(match kind {
                        EventKind::Input => "input",
                        EventKind::Blur => "blur",
                        EventKind::Change => "change",
                    }));
                }
                Ok(Self::Event {
                    kind,
                    field: field.parse()?,
                })
            }
            "country" => Ok(Self::Country(rest.trim().to_string())),
            "submit" => Ok(Self::Submit),
            "show" => Ok(Self::Show),
            "countries" => Ok(Self::Countries),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            _ => Err(CommandError::Unknown(name.to_string())),
        }
    }
}
