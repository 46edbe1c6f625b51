//! # Dicepass Architecture
//!
//! Dicepass generates diceware-style passwords: random dictionary words joined
//! by a separator, kept within a minimum and maximum length. It is a library
//! first; the interactive shell in `main.rs` is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Shell (cli/, wired by main.rs)                             │
//! │  - Parses flags, runs the event loop, renders with a Theme  │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │  UiEvent
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Dispatch table: UiEvent → handler                        │
//! │  - Guarded, idempotent shutdown                             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One handler per event, operating on AppContext           │
//! │  - Returns CmdResult, never prints                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core                                                       │
//! │  - synth: constrained password synthesis                    │
//! │  - layout: design units → window pixels                     │
//! │  - catalog, config, theme                                   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Single Writer
//!
//! All mutable state lives in one [`commands::AppContext`], owned by the event
//! loop and passed by reference into each handler. Signal handlers never touch
//! it; they enqueue a quit event instead.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade every UI goes through
//! - [`commands`]: event handlers and the application context
//! - [`synth`]: password synthesis
//! - [`layout`]: responsive geometry
//! - [`catalog`]: word lists
//! - [`config`]: persisted settings
//! - [`theme`]: light and dark palettes
//! - [`clipboard`]: clipboard backends
//! - [`logging`]: tracing subscriber setup
//! - [`error`]: error types

pub mod api;
pub mod catalog;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod error;
pub mod layout;
pub mod logging;
pub mod synth;
pub mod theme;
