//! README hydration: token table, substitution, Markdown fragments

pub(crate) mod context;
pub(crate) mod manifest;
pub(crate) mod template;

pub(crate) use context::{ContextSources, HydrationContext};
pub(crate) use template::{preview, substitute};
