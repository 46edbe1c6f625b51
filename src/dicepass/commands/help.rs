use crate::commands::{CmdMessage, CmdResult};

pub const HELP_TEXT: &str = "\
Generates relatively secure passwords that meet most website requirements.
Commands:
  gen, generate, r   Generate a new password
  copy               Copy the password to the clipboard
  sep <text>         Set the separator (everything after the first space)
  min <n>            Set the minimum length
  max <n>            Set the maximum length
  wc <n>             Set the word count
  extra [yes]        Toggle the extra word list (enabling needs 'yes')
  dark               Toggle dark mode (applies after restart)
  resize <w> <h>     Resize the window
  layout             Show widget positions
  help               Show this help
  quit, q            Save settings and exit";

pub fn run() -> CmdResult {
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(HELP_TEXT));
    result
}
