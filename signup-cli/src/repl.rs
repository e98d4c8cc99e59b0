//! Read-eval loop feeding stdin commands into a form session.

use std::io;
use std::sync::Arc;

use log::debug;
use signup_lib::{FieldName, FormEvent, FormSession, SubmitOutcome};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::command::{Command, CommandError, HELP};
use crate::view::TerminalView;

/// What the loop should do after a command.
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// The field to move to after a rejected submit.
fn first_to_fix(outcome: &SubmitOutcome) -> Option<FieldName> {
    outcome.verdict.first_invalid().map(|(field, _)| field)
}

/// Applies one command to the session.
pub fn execute(session: &FormSession, view: &TerminalView, command: Command) -> Flow {
    debug!("command: {:?}", command);

    match command {
        Command::Set { field, value } => {
            session.input(field, value);
        }
        Command::Event { kind, field } => {
            session.handle(FormEvent::field(kind, field));
        }
        Command::Country(code) => {
            session.set_value(FieldName::Country, code);
            session.handle(FormEvent::Change(FieldName::Country));
        }
        Command::Submit => {
            let outcome = session.submit();
            if let Some(field) = first_to_fix(&outcome) {
                view.focus(field);
            }
        }
        Command::Show => view.show_snapshot(&session.snapshot()),
        Command::Countries => view.show_countries(),
        Command::Help => view.info(HELP),
        Command::Quit => return Flow::Quit,
    }
    Flow::Continue
}

/// Runs until `quit` or end of input.
pub async fn run(session: FormSession, view: Arc<TerminalView>) -> io::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    view.info("Create your account. Type 'help' for commands.");
    view.prompt();

    while let Some(line) = lines.next_line().await? {
        match line.parse::<Command>() {
            Ok(command) => {
                if execute(&session, &view, command) == Flow::Quit {
                    break;
                }
            }
            Err(CommandError::Empty) => {}
            Err(err) => view.error(&err),
        }
        view.prompt();
    }

    Ok(())
}
