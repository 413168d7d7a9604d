//! Line mapping from typed text to entry commands.

/// Something the user asked for at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryCommand {
    /// Pins knocked down, as typed
    Roll(String),
    /// `x`: every pin standing
    Strike,
    /// `/`: every pin left standing after the first ball
    Spare,
    /// Save the finished game
    Save,
    Stats,
    History,
    /// Saved totals, oldest first
    Trend,
    /// Throw away the current game
    New,
    Help,
    Quit,
}

pub const HELP_TEXT: &str = "\
Enter rolls one at a time:
  0-10     pins knocked down
  x        strike
  /        spare
  -        gutter ball
Commands:
  save     save the finished game
  stats    average, highest, lowest
  history  saved games, newest first
  trend    saved totals, oldest first
  new      start over
  help     show this text
  quit     exit";

/// Map one input line to a command.
///
/// Returns None for blank lines. Anything unrecognised is treated as a roll so
/// the engine can report why it is not a valid pin count.
pub fn parse_line(line: &str) -> Option<EntryCommand> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let command = match trimmed.to_lowercase().as_str() {
        "x" => EntryCommand::Strike,
        "/" => EntryCommand::Spare,
        "-" => EntryCommand::Roll("0".to_string()),
        "save" | "s" => EntryCommand::Save,
        "stats" => EntryCommand::Stats,
        "history" | "h" => EntryCommand::History,
        "trend" | "t" => EntryCommand::Trend,
        "new" | "reset" => EntryCommand::New,
        "help" | "?" => EntryCommand::Help,
        "quit" | "q" | "exit" => EntryCommand::Quit,
        _ => EntryCommand::Roll(trimmed.to_string()),
    };
    Some(command)
}
