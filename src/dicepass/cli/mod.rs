//! # Shell
//!
//! This module is **one possible UI client** for dicepass. It stands in for a
//! windowing toolkit: each input line is a UI event, and each result is
//! rendered as text using the session's theme.
//!
//! It is the **only** place that:
//! - Reads stdin, writes stdout/stderr
//! - Installs the interrupt handler
//! - Decides the process exit code
//!
//! ## Event Loop
//!
//! One thread owns the [`dicepass::api::DiceApi`]. Input lines and interrupt
//! signals are both turned into events and sent over a channel to it, so a
//! signal can never race the loop on shutdown.

mod commands;
mod events;
mod print;
mod setup;

pub use commands::run;
