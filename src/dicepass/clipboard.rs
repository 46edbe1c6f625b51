use crate::error::{DiceError, Result};
use std::io::Write;
use std::process::{Command, Stdio};

/// Destination for copied passwords.
///
/// The interactive shell uses [`SystemClipboard`]; tests use
/// [`MemoryClipboard`] so nothing touches the real clipboard.
pub trait Clipboard {
    fn copy(&mut self, text: &str) -> Result<()>;
}

/// Copies text to the system clipboard in an OS-specific way.
/// - macOS: uses pbcopy
/// - Linux: uses xclip or xsel
/// - Windows: uses clip.exe
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        copy_to_clipboard(text)
    }
}

/// Keeps the last copied value in memory.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
    /// When set, every copy fails with this message.
    pub fail_with: Option<String>,
}

impl Clipboard for MemoryClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        if let Some(msg) = &self.fail_with {
            return Err(DiceError::Clipboard(msg.clone()));
        }
        self.contents = Some(text.to_string());
        Ok(())
    }
}

pub fn copy_to_clipboard(text: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        pipe_to("pbcopy", &[], text)
    }

    #[cfg(target_os = "linux")]
    {
        // Try xclip first, then xsel
        match pipe_to("xclip", &["-selection", "clipboard"], text) {
            Ok(()) => Ok(()),
            Err(_) => pipe_to("xsel", &["--clipboard", "--input"], text).map_err(|e| {
                DiceError::Clipboard(format!("{}. Install xclip or xsel.", e))
            }),
        }
    }

    #[cfg(target_os = "windows")]
    {
        pipe_to("clip", &[], text)
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        let _ = text;
        Err(DiceError::Clipboard(
            "Clipboard not supported on this platform".to_string(),
        ))
    }
}

/// Runs `program`, writes `text` to its stdin and waits for it to exit.
#[allow(dead_code)]
fn pipe_to(program: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| DiceError::Clipboard(format!("Failed to spawn {}: {}", program, e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| DiceError::Clipboard(format!("Failed to write to {}: {}", program, e)))?;
    }

    let status = child
        .wait()
        .map_err(|e| DiceError::Clipboard(format!("Failed to wait for {}: {}", program, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(DiceError::Clipboard(format!("{} exited with error", program)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_clipboard_keeps_value() {
        let mut clipboard = MemoryClipboard::default();
        clipboard.copy("horizon cactus umbrella").unwrap();
        assert_eq!(
            clipboard.contents.as_deref(),
            Some("horizon cactus umbrella")
        );
    }

    #[test]
    fn test_memory_clipboard_failure() {
        let mut clipboard = MemoryClipboard {
            fail_with: Some("no display".to_string()),
            ..Default::default()
        };
        let err = clipboard.copy("x").unwrap_err();
        assert!(err.to_string().contains("no display"));
        assert!(clipboard.contents.is_none());
    }

    #[test]
    fn test_pipe_to_missing_program() {
        let err = pipe_to("dicepass-no-such-program", &[], "x").unwrap_err();
        assert!(matches!(err, DiceError::Clipboard(_)));
    }
}
