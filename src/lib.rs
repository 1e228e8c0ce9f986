//! # Introduction
//!
//! Sortty generates a random array of bars, precomputes every frame a bubble
//! sort passes through, and animates the result in a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Array → Steps → Playback → TUI
//! ```
//!
//! 1. [`array`] — generates the random element vector; each element carries
//!    a stable id and the per-frame highlight flags.
//! 2. [`steps`] — runs the sort once and records an immutable
//!    [`steps::Step`] trace: three frames per adjacent comparison plus a
//!    terminal frame.
//! 3. [`playback`] — the [`playback::Playback`] state machine: a cursor over
//!    the trace, advanced by the UI timer or by manual navigation.
//! 4. [`ui`] — ratatui-based TUI; not part of the stable library API.

pub mod array;
pub mod playback;
pub mod steps;
pub mod ui;
