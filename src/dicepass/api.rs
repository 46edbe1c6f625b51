//! # API Facade
//!
//! [`DiceApi`] is the single entry point a UI talks to. It owns the
//! [`AppContext`] and a clipboard backend, and maps each [`UiEvent`] to its
//! handler in `commands/`.
//!
//! ## Error policy
//!
//! `dispatch` never fails. Synthesis, catalog, clipboard and persistence
//! problems come back as messages in the [`CmdResult`] so an interactive
//! session cannot be brought down by them.
//!
//! ## Shutdown
//!
//! Closing the window and receiving an interrupt both end in [`DiceApi::shutdown`].
//! It saves the config at most once per process; later calls are no-ops.
//!
//! ## Generic Over Clipboard
//!
//! - Production: `DiceApi<SystemClipboard>`
//! - Testing: `DiceApi<MemoryClipboard>`

use crate::clipboard::Clipboard;
use crate::commands::settings::NumericField;
use crate::commands::{self, AppContext, CmdMessage, CmdResult, UiEvent};

pub use crate::commands::MessageLevel;

pub struct DiceApi<C: Clipboard> {
    ctx: AppContext,
    clipboard: C,
    shut_down: bool,
}

impl<C: Clipboard> DiceApi<C> {
    pub fn new(ctx: AppContext, clipboard: C) -> Self {
        Self {
            ctx,
            clipboard,
            shut_down: false,
        }
    }

    pub fn dispatch(&mut self, event: UiEvent) -> CmdResult {
        let ctx = &mut self.ctx;
        match event {
            UiEvent::Generate => commands::generate::run(ctx),
            UiEvent::Copy => commands::copy::run(ctx, &mut self.clipboard),
            UiEvent::Help => commands::help::run(),
            UiEvent::SetSeparator(value) => commands::settings::set_separator(ctx, value),
            UiEvent::SetMinLen(raw) => {
                commands::settings::set_numeric(ctx, NumericField::MinLen, &raw)
            }
            UiEvent::SetMaxLen(raw) => {
                commands::settings::set_numeric(ctx, NumericField::MaxLen, &raw)
            }
            UiEvent::SetWordCount(raw) => {
                commands::settings::set_numeric(ctx, NumericField::WordCount, &raw)
            }
            UiEvent::ToggleDarkMode => commands::toggles::dark_mode(ctx),
            UiEvent::ToggleExtra { confirmed } => commands::toggles::extra_words(ctx, confirmed),
            UiEvent::Resize { width, height } => commands::resize::run(ctx, width, height),
            UiEvent::ShowLayout => commands::resize::show(ctx),
            UiEvent::Quit => self.shutdown(),
        }
    }

    /// Saves the config and flags the session for exit. Runs once; repeated
    /// calls only repeat the exit flag.
    pub fn shutdown(&mut self) -> CmdResult {
        let mut result = CmdResult::default().with_exit();
        if self.shut_down {
            return result;
        }
        self.shut_down = true;

        tracing::info!("closing app and saving config");
        match &self.ctx.config_path {
            Some(path) => {
                if let Err(e) = self.ctx.config.save(path) {
                    tracing::warn!(path = %path.display(), error = %e, "failed to save config");
                    result.add_message(CmdMessage::warning(format!(
                        "Failed to save config: {}",
                        e
                    )));
                }
            }
            None => tracing::info!("no config location, settings not saved"),
        }
        tracing::info!("done, exiting");
        result
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }

    pub fn context(&self) -> &AppContext {
        &self.ctx
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogSources;
    use crate::clipboard::MemoryClipboard;
    use crate::config::{AppConfig, CONFIG_FILENAME};
    use crate::layout::OrientationPolicy;
    use std::path::PathBuf;

    fn api(config_path: Option<PathBuf>) -> DiceApi<MemoryClipboard> {
        let ctx = AppContext::new(
            AppConfig::default(),
            config_path,
            CatalogSources::default(),
            OrientationPolicy::Auto,
            (450, 300),
        );
        DiceApi::new(ctx, MemoryClipboard::default())
    }

    #[test]
    fn test_dispatch_generate_then_copy() {
        let mut api = api(None);
        let generated = api.dispatch(UiEvent::Generate).output.unwrap();
        let copied = api.dispatch(UiEvent::Copy);

        assert!(copied.status.unwrap().starts_with("Copied password"));
        assert_eq!(api.clipboard().contents.as_deref(), Some(generated.as_str()));
    }

    #[test]
    fn test_dispatch_settings_feed_generation() {
        let mut api = api(None);
        api.dispatch(UiEvent::SetSeparator("-".to_string()));
        api.dispatch(UiEvent::SetWordCount("4".to_string()));
        api.dispatch(UiEvent::SetMinLen("0".to_string()));
        api.dispatch(UiEvent::SetMaxLen("200".to_string()));

        let output = api.dispatch(UiEvent::Generate).output.unwrap();
        assert_eq!(output.split('-').count(), 4);
        assert_eq!(api.context().config.word_count, 4);
    }

    #[test]
    fn test_dispatch_resize_and_layout() {
        let mut api = api(None);
        let resized = api.dispatch(UiEvent::Resize {
            width: 600,
            height: 900,
        });
        let shown = api.dispatch(UiEvent::ShowLayout);
        assert_eq!(resized.placed, shown.placed);
        assert_eq!(shown.placed.len(), 9);
    }

    #[test]
    fn test_help_has_text() {
        let mut api = api(None);
        let result = api.dispatch(UiEvent::Help);
        assert!(result.messages[0].content.contains("Generate a new password"));
    }

    #[test]
    fn test_quit_saves_config_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dicepass").join(CONFIG_FILENAME);
        let mut api = api(Some(path.clone()));
        api.dispatch(UiEvent::SetWordCount("7".to_string()));

        let result = api.dispatch(UiEvent::Quit);
        assert!(result.exit);
        assert!(api.is_shut_down());

        let mut saved = AppConfig::default();
        assert!(saved.load(&path).unwrap());
        assert_eq!(saved.word_count, 7);

        // a second shutdown does not write again
        std::fs::remove_file(&path).unwrap();
        let again = api.shutdown();
        assert!(again.exit);
        assert!(!path.exists());
    }

    #[test]
    fn test_quit_without_config_path() {
        let mut api = api(None);
        let result = api.dispatch(UiEvent::Quit);
        assert!(result.exit);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn test_save_failure_is_a_warning() {
        let dir = tempfile::tempdir().unwrap();
        // a directory where the file should be
        let path = dir.path().to_path_buf();
        let mut api = api(Some(path));
        let result = api.shutdown();
        assert!(result.exit);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
    }
}
