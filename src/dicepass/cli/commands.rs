use super::events::{parse_line, Input};
use super::print::{print_messages, print_result};
use super::setup::{get_version, Cli};
use clap::Parser;
use dicepass::api::DiceApi;
use dicepass::catalog::{CatalogSources, WordSource};
use dicepass::clipboard::{Clipboard, SystemClipboard};
use dicepass::commands::{AppContext, CmdMessage, UiEvent};
use dicepass::config::{self, AppConfig};
use dicepass::error::Result;
use dicepass::layout::{self, Orientation, OrientationPolicy};
use dicepass::logging::{init_logging, LogConfig};
use dicepass::synth::{self, PasswordSpec};
use dicepass::theme::Theme;
use std::io::{self, BufRead};
use std::sync::mpsc::{self, Sender};
use std::thread;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    if cli.version {
        println!("{}", get_version());
        return Ok(());
    }

    if let Err(e) = init_logging(&LogConfig::from_verbosity(cli.verbose)) {
        eprintln!("Warning: failed to initialize logging: {}", e);
    }

    let ctx = init_context(&cli);
    if cli.once {
        return handle_once(&ctx);
    }

    let theme = Theme::for_mode(ctx.config.dark_mode);
    tracing::debug!(theme = theme.name(), "theme selected");

    let mut api = DiceApi::new(ctx, SystemClipboard);
    run_loop(&mut api, &theme);
    Ok(())
}

fn init_context(cli: &Cli) -> AppContext {
    // flags are defaults; the config file overrides what it contains
    let mut settings = AppConfig {
        extra: cli.extra,
        max_len: cli.max_len,
        min_len: cli.min_len,
        separator: cli.separator.clone(),
        word_count: cli.word_count,
        ..AppConfig::default()
    };
    let config_path = config::resolve_config_path(cli.config.clone());
    config::load_or_warn(&mut settings, config_path.as_deref());

    let sources = CatalogSources {
        simple: cli
            .simple_words
            .clone()
            .map_or(WordSource::Bundled, WordSource::File),
        extra: cli
            .extra_words
            .clone()
            .map_or(WordSource::Bundled, WordSource::File),
    };

    let policy = cli.orientation_policy();
    let window = cli.geometry.unwrap_or_else(|| {
        let orientation = match policy {
            OrientationPolicy::Forced(orientation) => orientation,
            OrientationPolicy::Auto => Orientation::Landscape,
        };
        layout::initial_window_size(orientation)
    });

    AppContext::new(settings, config_path, sources, policy, window)
}

/// Prints one password, or fails with the synthesis error. Settings are not
/// saved in this mode.
fn handle_once(ctx: &AppContext) -> Result<()> {
    let spec = PasswordSpec::from_config(&ctx.config)?;
    let password = synth::generate(&ctx.catalog, &spec)?;
    println!("{}", password);
    Ok(())
}

/// Runs until a quit event arrives from input, end of input, or an
/// interrupt signal, then shuts down once.
fn run_loop<C: Clipboard>(api: &mut DiceApi<C>, theme: &Theme) {
    let (tx, rx) = mpsc::channel::<Input>();

    let signal_tx = tx.clone();
    if let Err(e) = ctrlc::set_handler(move || {
        let _ = signal_tx.send(Input::Event(UiEvent::Quit));
    }) {
        tracing::warn!(error = %e, "failed to install interrupt handler");
    }
    spawn_input_reader(tx);

    print_messages(&[CmdMessage::info("Type 'help' for commands.")]);
    print_result(&api.dispatch(UiEvent::ShowLayout), theme);
    // start with a password in the output field
    print_result(&api.dispatch(UiEvent::Generate), theme);

    for input in rx {
        match input {
            Input::Blank => {}
            Input::Unknown(line) => print_messages(&[CmdMessage::warning(format!(
                "Unknown command: {} (type 'help')",
                line.trim()
            ))]),
            Input::Event(event) => {
                let result = api.dispatch(event);
                print_result(&result, theme);
                if result.exit {
                    break;
                }
            }
        }
    }

    if !api.is_shut_down() {
        print_result(&api.shutdown(), theme);
    }
}

fn spawn_input_reader(tx: Sender<Input>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    tracing::warn!(error = %e, "failed to read input");
                    break;
                }
            };
            if tx.send(parse_line(&line)).is_err() {
                return;
            }
        }
        let _ = tx.send(Input::Event(UiEvent::Quit));
    });
}
