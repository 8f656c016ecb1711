//! # DocBase Client Architecture
//!
//! `docbase` is a library for working with posts on DocBase, with a CLI
//! client on top. Editing happens in the user's own text editor: the body is
//! staged in a scratch file, the editor runs in the foreground, and whatever
//! was saved is read back and sent to the service.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders output, picks terminal mode    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, parses post ids               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - view, list, create, edit, tags                           │
//! │  - Returns CmdResult values, never prints                   │
//! └─────────────────────────────────────────────────────────────┘
//!                   │                          │
//!                   ▼                          ▼
//! ┌────────────────────────────┐  ┌─────────────────────────────┐
//! │  Editor Capture (editor)   │  │  Client (client/)           │
//! │  scratch file + child      │  │  DocbaseClient trait        │
//! │  process, always cleaned   │  │  HttpClient, InMemoryClient │
//! └────────────────────────────┘  └─────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes plain arguments and returns
//! `Result<CmdResult>`. It never writes to stdout and never exits the process.
//! The one exception is the editor child, which is handed the terminal for as
//! long as it runs.
//!
//! Diagnostics go through an explicit [`logging::Logger`] handle that the CLI
//! builds once and passes down.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Logic for each command
//! - [`client`]: DocBase service abstraction and implementations
//! - [`editor`]: Editor resolution and capture
//! - [`model`]: Posts, tags, ids and query types
//! - [`config`]: Profile configuration
//! - [`terminal`]: Interactive terminal detection
//! - [`browser`]: Opening posts in the system browser
//! - [`logging`]: The logger handle
//! - [`error`]: Error types

pub mod api;
pub mod browser;
pub mod client;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod logging;
pub mod model;
pub mod terminal;

#[cfg(all(test, unix))]
mod test_utils;
