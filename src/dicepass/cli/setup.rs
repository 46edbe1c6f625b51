use clap::Parser;
use dicepass::config::{DEFAULT_MAX_LEN, DEFAULT_MIN_LEN, DEFAULT_SEPARATOR, DEFAULT_WORD_COUNT};
use dicepass::layout::{Orientation, OrientationPolicy};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.0" for releases, "0.3.0@abc1234 2024-01-15 14:30" for dev builds
pub fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "dicepass", bin_name = "dicepass", disable_version_flag = true)]
#[command(about = "Diceware-style password generator", long_about = None)]
pub struct Cli {
    /// Force portrait orientation for the interface
    #[arg(long, conflicts_with = "landscape")]
    pub portrait: bool,

    /// Force landscape orientation for the interface
    #[arg(long)]
    pub landscape: bool,

    /// Config file to use instead of the one in the user config directory
    #[arg(short = 'f', long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Characters to place between each word
    #[arg(short, long, default_value = DEFAULT_SEPARATOR, allow_hyphen_values = true)]
    pub separator: String,

    /// Longest permissible generated password
    #[arg(long = "max", default_value_t = DEFAULT_MAX_LEN, allow_negative_numbers = true)]
    pub max_len: i64,

    /// Shortest permissible generated password
    #[arg(long = "min", default_value_t = DEFAULT_MIN_LEN, allow_negative_numbers = true)]
    pub min_len: i64,

    /// Number of words to generate
    #[arg(long = "wc", default_value_t = DEFAULT_WORD_COUNT, allow_negative_numbers = true)]
    pub word_count: i64,

    /// Also draw from the extended word list
    #[arg(long)]
    pub extra: bool,

    /// Word list to use instead of the bundled simple list
    #[arg(long, value_name = "PATH")]
    pub simple_words: Option<PathBuf>,

    /// Word list to use instead of the bundled extra list
    #[arg(long, value_name = "PATH")]
    pub extra_words: Option<PathBuf>,

    /// Initial window size, e.g. 450x300
    #[arg(long, value_name = "WxH", value_parser = parse_geometry)]
    pub geometry: Option<(i32, i32)>,

    /// Print one password and exit
    #[arg(long)]
    pub once: bool,

    /// More log output on stderr (repeat for more)
    #[arg(long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print version and exit
    #[arg(short = 'v', long)]
    pub version: bool,
}

impl Cli {
    pub fn orientation_policy(&self) -> OrientationPolicy {
        if self.portrait {
            OrientationPolicy::Forced(Orientation::Portrait)
        } else if self.landscape {
            OrientationPolicy::Forced(Orientation::Landscape)
        } else {
            OrientationPolicy::Auto
        }
    }
}

fn parse_geometry(s: &str) -> Result<(i32, i32), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WxH, got '{}'", s))?;
    let w = w.trim().parse().map_err(|_| format!("invalid width '{}'", w))?;
    let h = h.trim().parse().map_err(|_| format!("invalid height '{}'", h))?;
    Ok((w, h))
}
