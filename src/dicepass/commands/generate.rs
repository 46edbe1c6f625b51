use crate::commands::{AppContext, CmdMessage, CmdResult};
use crate::synth::{self, PasswordSpec};

/// Generates a password from the current settings and puts it in the output
/// field. Failures clear the output and show the reason instead.
pub fn run(ctx: &mut AppContext) -> CmdResult {
    let generated =
        PasswordSpec::from_config(&ctx.config).and_then(|spec| synth::generate(&ctx.catalog, &spec));

    match generated {
        Ok(password) => {
            let status = format!(
                "Currently generated password length: {}",
                password.chars().count()
            );
            ctx.view.output = password.clone();
            ctx.view.status = status.clone();
            CmdResult::default()
                .with_output(password)
                .with_status(status)
        }
        Err(e) => {
            tracing::warn!(error = %e, "password generation failed");
            let status = e.to_string();
            ctx.view.output.clear();
            ctx.view.status = status.clone();
            let mut result = CmdResult::default()
                .with_output(String::new())
                .with_status(status.clone());
            result.add_message(CmdMessage::error(status));
            result
        }
    }
}
