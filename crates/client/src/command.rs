//! Line commands understood by the terminal front end.

use eznotes_core::types::NoteId;

use crate::state::NotesState;

/// A note reference typed by the user: a 1-based position in the displayed
/// (filtered) list, or a full note id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteRef {
    Index(usize),
    Id(NoteId),
}

impl NoteRef {
    fn parse(raw: &str) -> Result<Self, String> {
        if let Ok(index) = raw.parse::<usize>() {
            return if index == 0 {
                Err("Note numbers start at 1".to_string())
            } else {
                Ok(NoteRef::Index(index))
            };
        }
        raw.parse::<NoteId>()
            .map(NoteRef::Id)
            .map_err(|_| format!("'{raw}' is neither a note number nor a note id"))
    }

    /// Resolve against what the user currently sees.
    pub fn resolve(self, state: &NotesState) -> Option<NoteId> {
        match self {
            NoteRef::Index(i) => state.filtered_notes().get(i - 1).map(|n| n.id),
            NoteRef::Id(id) => state.find(id).map(|n| n.id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    New,
    Edit(NoteRef),
    Cancel,
    Title(String),
    Description(String),
    Save,
    Delete(NoteRef),
    Search(String),
    Refresh,
    Dismiss,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  list                 show notes (filtered by the current search)
  new                  start a new note (leaves edit mode)
  edit <n|id>          edit a note
  cancel               cancel editing
  title <text>         set the form title
  desc <text>          set the form description
  save                 create or update from the form
  delete <n|id>        delete a note (asks for confirmation)
  search [text]        filter notes; no text clears the filter
  refresh              reload notes from the server
  dismiss              hide status messages
  help                 show this help
  quit                 exit";

impl Command {
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "list" | "ls" => Command::List,
            "new" => Command::New,
            "edit" => Command::Edit(NoteRef::parse(required(rest, "edit")?)?),
            "cancel" => Command::Cancel,
            "title" => Command::Title(rest.to_string()),
            "desc" | "description" => Command::Description(rest.to_string()),
            "save" => Command::Save,
            "delete" | "rm" => Command::Delete(NoteRef::parse(required(rest, "delete")?)?),
            "search" => Command::Search(rest.to_string()),
            "refresh" => Command::Refresh,
            "dismiss" => Command::Dismiss,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            "" => return Err("Type 'help' for a list of commands".to_string()),
            other => return Err(format!("Unknown command '{other}'")),
        };
        Ok(command)
    }
}

fn required<'a>(arg: &'a str, command: &str) -> Result<&'a str, String> {
    if arg.is_empty() {
        Err(format!("'{command}' needs a note number or id"))
    } else {
        Ok(arg)
    }
}
