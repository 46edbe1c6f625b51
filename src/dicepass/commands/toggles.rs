use crate::catalog::CatalogKind;
use crate::commands::{AppContext, CmdMessage, CmdResult};

/// Flips dark mode. The palette is chosen at startup, so the first toggle
/// in a session tells the user a restart is needed.
pub fn dark_mode(ctx: &mut AppContext) -> CmdResult {
    ctx.config.dark_mode = !ctx.config.dark_mode;

    let mut result = CmdResult::default();
    if !ctx.view.dark_mode_changed {
        result.add_message(CmdMessage::info(
            "The theme change will take effect after the application is restarted.",
        ));
        ctx.view.dark_mode_changed = true;
    }
    result
}

/// Flips extra word usage, loading or unloading the extra catalog.
///
/// Enabling without `confirmed` changes nothing and asks for confirmation.
pub fn extra_words(ctx: &mut AppContext, confirmed: bool) -> CmdResult {
    let mut result = CmdResult::default();
    if !ctx.config.extra && !confirmed {
        result.add_message(CmdMessage::warning(
            "Loading the extra words into memory will increase memory usage. Run 'extra yes' to proceed.",
        ));
        return result;
    }

    ctx.config.extra = !ctx.config.extra;
    ctx.load_catalogs();

    if ctx.config.extra {
        result.add_message(CmdMessage::success(format!(
            "Extra words enabled ({} words available)",
            ctx.catalog.active_len(true)
        )));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Extra words disabled ({} words available)",
            ctx.catalog.count(CatalogKind::Simple)
        )));
    }
    result
}
