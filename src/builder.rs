use std::path::{Path, PathBuf};

use tracing::debug;

use crate::env::{Env, Lookup};
use crate::error::StrataError;
use crate::file;
use crate::populate::populate;
use crate::schema::Schema;

/// Orchestrates a load: zero or more overlay files applied in order, then
/// exactly one pass from a lookup source — the process environment unless
/// replaced with [`source()`](Loader::source).
///
/// Later overlay files override earlier ones, and the source pass overrides
/// them all. Every layer is sparse: a file (or the source) only touches the
/// fields it actually mentions, so values from lower layers — including the
/// struct's own defaults — survive untouched.
///
/// Failure is not transactional. If a later step fails, every mutation made
/// by earlier steps (and by earlier fields of the failing step) remains in
/// the target; treat a failed load as partially mutated.
pub struct Loader {
    files: Vec<PathBuf>,
    source: Box<dyn Lookup>,
}

impl Loader {
    pub fn new() -> Self {
        Self {
            files: Vec::new(),
            source: Box::new(Env),
        }
    }

    /// Append one overlay file. Missing files are skipped at load time.
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.push(path.into());
        self
    }

    /// Append several overlay files, in order.
    pub fn files<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.files.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Replace the lookup source used for the final pass (default: [`Env`]).
    pub fn source(mut self, source: impl Lookup + 'static) -> Self {
        self.source = Box::new(source);
        self
    }

    /// Run the load against `target`.
    ///
    /// The source pass runs unconditionally, even with no files configured.
    pub fn load(&self, target: &mut dyn Schema) -> Result<(), StrataError> {
        debug!(files = self.files.len(), "loading configuration");
        for path in &self.files {
            file::overlay(target, path)?;
        }
        populate(target, self.source.as_ref())
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Populate `target` from the given overlay files, in order, then from the
/// process environment.
pub fn load<P: AsRef<Path>>(target: &mut dyn Schema, files: &[P]) -> Result<(), StrataError> {
    Loader::new()
        .files(files.iter().map(|p| p.as_ref().to_path_buf()))
        .load(target)
}
