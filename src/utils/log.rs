//! Console diagnostics
//!
//! Every line goes to stdout behind the same marker so build logs grep cleanly.
//! Detail lines only appear once verbose mode is switched on.

use std::fmt::Display;
use std::sync::atomic::{AtomicBool, Ordering};

pub(crate) const MARKER: &str = "◈";

static VERBOSE: AtomicBool = AtomicBool::new(false);

pub(crate) fn set_verbose(enabled: bool) {
    VERBOSE.store(enabled, Ordering::Relaxed);
}

pub(crate) fn verbose_enabled() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

pub(crate) fn info(msg: impl Display) {
    println!("{MARKER} {msg}");
}

pub(crate) fn warn(msg: impl Display) {
    println!("{MARKER} WARNING: {msg}");
}

pub(crate) fn error(msg: impl Display) {
    println!("{MARKER} ERROR: {msg}");
}

/// Network-side failures keep the louder marker the deploy logs are searched for
pub(crate) fn discovery_error(msg: impl Display) {
    println!("!! DISCOVERY_ERROR: {msg}");
}

pub(crate) fn detail(msg: impl Display) {
    if verbose_enabled() {
        println!("{MARKER} {msg}");
    }
}

pub(crate) fn banner(title: &str) {
    let rule = "=".repeat(60);
    println!("{rule}");
    println!("{MARKER} {title}");
    println!("{rule}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_toggle_round_trips() {
        set_verbose(true);
        assert!(verbose_enabled());
        set_verbose(false);
        assert!(!verbose_enabled());
    }
}
