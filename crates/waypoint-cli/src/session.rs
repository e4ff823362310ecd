//! Line-based interactive session.
//!
//! Each input line is parsed into a [`SessionCommand`]. Wizard intents are
//! dispatched into the session and the record is re-rendered; input errors
//! are shown as error status lines and the session keeps going.

use std::{
    io::{self, BufRead, IsTerminal},
    str::FromStr,
};

use anyhow::{Context, Result};
use log::debug;
use rustyline::{error::ReadlineError, DefaultEditor};
use waypoint_core::{
    display::{OperationStatus, RecordView},
    Field, Intent, Step, Wizard, WizardError,
};

use crate::renderer::TerminalRenderer;

pub const HELP: &str = "\
### Commands

- `step <name|number>`: go to a step (`contact_info`, `details`, `items` or `1`-`3`)
- `set <field> <value...>`: set a field of the current step (`name`, `details.dogName`, ...)
- `save`: save the record and show its identifier
- `remove`: delete the saved record and start over
- `show`: show the record again
- `help`: show this help
- `quit`: leave the session
";

/// One parsed input line.
#[derive(Debug, PartialEq, Eq)]
pub enum SessionCommand {
    Intent(Intent),
    Show,
    Help,
    Quit,
}

impl FromStr for SessionCommand {
    type Err = WizardError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        match word.to_lowercase().as_str() {
            "step" | "go" => {
                if rest.is_empty() {
                    return Err(WizardError::invalid_input("step").with_reason("usage: step <name|number>"));
                }
                Ok(Self::Intent(Intent::ChangeStep(rest.parse::<Step>()?)))
            }
            "set" => {
                let (name, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                if name.is_empty() {
                    return Err(WizardError::invalid_input("field").with_reason("usage: set <field> <value...>"));
                }
                Ok(Self::Intent(Intent::EditField {
                    field: name.parse::<Field>()?,
                    value: value.trim().to_string(),
                }))
            }
            "save" => Ok(Self::Intent(Intent::Save)),
            "remove" => Ok(Self::Intent(Intent::Remove)),
            "show" => Ok(Self::Show),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            _ => Err(WizardError::invalid_input("command")
                .with_reason(format!("unknown command '{word}', type `help` for the list"))),
        }
    }
}

enum LoopControl {
    Continue,
    Exit,
}

/// Runs the session until `quit` or end of input.
///
/// A terminal gets a line editor with history and the record location as
/// prompt; piped input is read line by line.
pub fn run(wizard: &mut Wizard, renderer: &TerminalRenderer) -> Result<()> {
    renderer.show(&RecordView(wizard.state()));
    renderer.render("\nType `help` for commands.\n");

    if io::stdin().is_terminal() {
        run_interactive(wizard, renderer)
    } else {
        run_script(wizard, renderer)
    }
}

fn run_interactive(wizard: &mut Wizard, renderer: &TerminalRenderer) -> Result<()> {
    let mut editor = DefaultEditor::new().context("Failed to start line editor")?;

    loop {
        let prompt = format!("{}> ", wizard.location());
        match editor.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                editor.add_history_entry(trimmed).ok();

                if let LoopControl::Exit = handle_line(wizard, renderer, trimmed) {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                renderer.render("Type `quit` to leave the session.\n");
            }
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e).context("Failed to read session input"),
        }
    }
    Ok(())
}

fn run_script(wizard: &mut Wizard, renderer: &TerminalRenderer) -> Result<()> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read session input")?;
        if line.trim().is_empty() {
            continue;
        }

        if let LoopControl::Exit = handle_line(wizard, renderer, &line) {
            break;
        }
    }
    Ok(())
}

fn handle_line(wizard: &mut Wizard, renderer: &TerminalRenderer, line: &str) -> LoopControl {
    let command = match line.parse::<SessionCommand>() {
        Ok(command) => command,
        Err(e) => {
            renderer.show(&OperationStatus::from_error(&e));
            return LoopControl::Continue;
        }
    };
    debug!("Session command: {command:?}");

    match command {
        SessionCommand::Intent(intent) => match wizard.dispatch(intent) {
            Ok(outcome) => {
                if let Some(status) = OperationStatus::from_outcome(&outcome) {
                    renderer.show(&status);
                }
                renderer.show(&RecordView(wizard.state()));
            }
            Err(e) => renderer.show(&OperationStatus::from_error(&e)),
        },
        SessionCommand::Show => renderer.show(&RecordView(wizard.state())),
        SessionCommand::Help => renderer.render(HELP),
        SessionCommand::Quit => return LoopControl::Exit,
    }
    LoopControl::Continue
}
