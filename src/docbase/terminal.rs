//! Terminal detection.
//!
//! Used to choose between decorated output for a person at a terminal and
//! plain output for pipes and files. `console` handles native ttys as well as
//! MSYS/Cygwin pseudo-terminals on Windows.

use console::Term;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdin,
    Stdout,
    Stderr,
}

/// Whether the given standard stream is attached to an interactive terminal.
pub fn is_interactive(stream: Stream) -> bool {
    match stream {
        Stream::Stdout => Term::stdout().is_term(),
        Stream::Stderr => Term::stderr().is_term(),
        Stream::Stdin => std::io::stdin().is_terminal(),
    }
}

/// Whether an arbitrary handle (file, pipe, tty) is a terminal.
pub fn is_terminal_handle<T: IsTerminal>(handle: &T) -> bool {
    handle.is_terminal()
}

/// Whether styled output should be emitted on stdout.
pub fn colors_enabled() -> bool {
    Term::stdout().features().colors_supported()
}
