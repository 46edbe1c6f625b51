use colored::{ColoredString, Colorize};
use dicepass::api::MessageLevel;
use dicepass::commands::{CmdMessage, CmdResult};
use dicepass::layout::PlacedWidget;
use dicepass::theme::{Rgb, Theme};

const LABEL_WIDTH: usize = 12;

fn paint(text: &str, color: Rgb) -> ColoredString {
    let Rgb(r, g, b) = color;
    text.truecolor(r, g, b)
}

pub(super) fn print_result(result: &CmdResult, theme: &Theme) {
    if let Some(output) = &result.output {
        println!("{}", format_field("Output", output, theme));
    }
    if let Some(status) = &result.status {
        println!("{}", format_field("Log", status, theme));
    }
    if !result.placed.is_empty() {
        print_placed(&result.placed, theme);
    }
    print_messages(&result.messages);
}

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_placed(placed: &[PlacedWidget], theme: &Theme) {
    for p in placed {
        let label = format!("{:<width$}", p.widget.label(), width = LABEL_WIDTH);
        println!("  {} {}", paint(&label, theme.text), p.rect);
    }
}

fn format_field(label: &str, value: &str, theme: &Theme) -> String {
    let label = format!("{:<width$}", format!("{}:", label), width = LABEL_WIDTH);
    format!("{} {}", paint(&label, theme.text), value)
}
