use crate::catalog::{CatalogKind, CatalogSources, WordCatalog};
use crate::config::AppConfig;
use crate::layout::{Orientation, OrientationPolicy, PlacedWidget};
use std::path::PathBuf;

pub mod copy;
pub mod generate;
pub mod help;
pub mod resize;
pub mod settings;
pub mod toggles;

/// Everything a UI event can act on. Owned by the run-loop and handed to
/// each handler by reference; no other thread touches it.
#[derive(Debug)]
pub struct AppContext {
    pub config: AppConfig,
    /// `None` when no config location could be found; nothing is persisted.
    pub config_path: Option<PathBuf>,
    pub catalog: WordCatalog,
    pub sources: CatalogSources,
    pub view: ViewState,
}

/// What the widgets currently show.
#[derive(Debug, Clone)]
pub struct ViewState {
    pub output: String,
    pub status: String,
    pub orientation: Orientation,
    pub policy: OrientationPolicy,
    pub window: (i32, i32),
    /// Set after the first dark mode toggle so the restart notice shows once.
    pub dark_mode_changed: bool,
}

impl AppContext {
    /// Builds the context and loads the catalogs the config asks for: the
    /// simple list always, the extra list only when enabled.
    pub fn new(
        config: AppConfig,
        config_path: Option<PathBuf>,
        sources: CatalogSources,
        policy: OrientationPolicy,
        window: (i32, i32),
    ) -> Self {
        let (w, h) = window;
        if policy == OrientationPolicy::Auto && Orientation::probe(w, h).is_none() {
            tracing::warn!(w, h, "could not determine orientation from work area, using landscape");
        }
        let orientation = policy.resolve(Orientation::Landscape, w, h);

        let mut ctx = Self {
            config,
            config_path,
            catalog: WordCatalog::new(),
            sources,
            view: ViewState {
                output: String::new(),
                status: "Output will go here".to_string(),
                orientation,
                policy,
                window,
                dark_mode_changed: false,
            },
        };
        ctx.load_catalogs();
        ctx
    }

    /// Brings the loaded catalogs in line with `config.extra`. Safe to call
    /// repeatedly.
    pub fn load_catalogs(&mut self) {
        self.catalog
            .load(self.sources.get(CatalogKind::Simple), CatalogKind::Simple);
        if self.config.extra {
            self.catalog
                .load(self.sources.get(CatalogKind::Extra), CatalogKind::Extra);
        } else {
            self.catalog.unload(CatalogKind::Extra);
        }
        tracing::info!(
            simple = self.catalog.count(CatalogKind::Simple),
            extra = self.catalog.count(CatalogKind::Extra),
            "word lists ready"
        );
    }
}

/// Events the interface can raise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Generate,
    Copy,
    Help,
    SetSeparator(String),
    SetMinLen(String),
    SetMaxLen(String),
    SetWordCount(String),
    ToggleDarkMode,
    /// Enabling extra words needs `confirmed`, it raises memory use.
    ToggleExtra { confirmed: bool },
    Resize { width: i32, height: i32 },
    ShowLayout,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// What changed as a result of one event. Fields left at their defaults
/// mean "no change" for the matching widget.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub output: Option<String>,
    pub status: Option<String>,
    pub placed: Vec<PlacedWidget>,
    pub messages: Vec<CmdMessage>,
    pub exit: bool,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_placed(mut self, placed: Vec<PlacedWidget>) -> Self {
        self.placed = placed;
        self
    }

    pub fn with_exit(mut self) -> Self {
        self.exit = true;
        self
    }
}
