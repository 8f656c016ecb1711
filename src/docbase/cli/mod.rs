//! # CLI Behavior
//!
//! The `docbase` binary's user interface. For the overall architecture, see the
//! crate-level documentation of the `docbase` library.
//!
//! ## Output Modes
//!
//! `view` prints a header block with metadata when stdout is a terminal, and
//! only the body when it is piped, so `docbase view 12 > post.md` round-trips.
//!
//! ## Writing Posts
//!
//! `new` and `edit` take the body from `--body`, then `--body-file`, and
//! otherwise open the editor. `edit` seeds the editor with the current body.
//! If the editor exits with an error, the saved text is still sent and a
//! warning is printed.
//!
//! ## Module Structure
//!
//! - `commands`: Dispatch and per-command handlers
//! - `render`: Template rendering of command results
//! - `setup`: Argument parsing via clap
//! - `styles`: The terminal theme
//! - `templates`: Output templates

mod commands;
mod render;
pub mod setup;
mod styles;
mod templates;

pub use commands::run;
