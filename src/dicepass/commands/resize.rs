use crate::commands::{AppContext, CmdResult};
use crate::layout;

/// Re-evaluates orientation for the new window size and places every
/// widget.
pub fn run(ctx: &mut AppContext, width: i32, height: i32) -> CmdResult {
    let previous = ctx.view.orientation;
    let orientation = ctx.view.policy.resolve(previous, width, height);
    if orientation != previous {
        tracing::debug!(from = %previous, to = %orientation, "orientation changed");
    }

    ctx.view.orientation = orientation;
    ctx.view.window = (width, height);
    show(ctx)
}

/// Places every widget for the current window without changing anything.
pub fn show(ctx: &AppContext) -> CmdResult {
    let (width, height) = ctx.view.window;
    CmdResult::default().with_placed(layout::layout_all(ctx.view.orientation, width, height))
}
