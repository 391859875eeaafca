//! WindowSource: responsibility and boundaries
//!
//! This module and its submodules are responsible ONLY for talking to the display
//! server: listing managed top-level windows, reading the raw properties that
//! identify a window, and sending the activation request. Composing display
//! strings and matching selections belongs to the resolver and the focus dispatcher.

mod dry_run;
mod r#trait;
mod x11;

#[cfg(test)]
pub use self::dry_run::{DryRunWindowSource, FakeWindow, MissingClientList};
pub use self::r#trait::{create_window_source, WindowSource};
