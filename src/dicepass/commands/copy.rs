use crate::clipboard::Clipboard;
use crate::commands::{AppContext, CmdMessage, CmdResult};

/// Copies the password currently shown to the clipboard. Nothing happens
/// when the output is empty.
pub fn run<C: Clipboard>(ctx: &mut AppContext, clipboard: &mut C) -> CmdResult {
    let value = &ctx.view.output;
    if value.is_empty() {
        return CmdResult::default();
    }

    match clipboard.copy(value) {
        Ok(()) => {
            let status = format!(
                "Copied password with length {} to clipboard",
                value.chars().count()
            );
            ctx.view.status = status.clone();
            CmdResult::default().with_status(status)
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to copy value to clipboard");
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::warning(format!(
                "Failed to copy to clipboard: {}",
                e
            )));
            result
        }
    }
}
