//! Lookup sources: where keyed fields get their values.
//!
//! A source is anything answering `key -> Option<String>`. The process
//! environment is the canonical one; a `HashMap` or a closure substitutes
//! for it in tests.

use std::collections::HashMap;

/// A key→value capability consulted once per keyed field.
pub trait Lookup {
    fn lookup(&self, key: &str) -> Option<String>;
}

/// The process environment.
///
/// A variable holding non-Unicode content counts as absent; the lookup
/// capability speaks `String`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Env;

impl Lookup for Env {
    fn lookup(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl Lookup for HashMap<String, String> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Adapter turning a plain closure into a [`Lookup`] source.
pub struct LookupFn<F>(pub F);

impl<F> Lookup for LookupFn<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn lookup(&self, key: &str) -> Option<String> {
        (self.0)(key)
    }
}
