//! Layered population of nested config structs: overlay files first, the
//! environment last.
//!
//! Strata fills a struct you already own. You describe the struct's fields
//! once — name, lookup key, typed slot — and a load applies each overlay
//! file in order, then one pass from a lookup source (the process
//! environment by default) that overrides everything:
//!
//! ```
//! use std::collections::HashMap;
//!
//! use strata::{Field, Loader, Schema, Slot};
//!
//! #[derive(Default)]
//! struct AppConfig {
//!     url: String,
//!     workers: u16,
//! }
//!
//! impl Schema for AppConfig {
//!     fn fields(&mut self) -> Vec<Field<'_>> {
//!         vec![
//!             Field::keyed("url", "APP_URL", Slot::Str(&mut self.url)),
//!             Field::keyed("workers", "APP_WORKERS", Slot::U16(&mut self.workers)),
//!         ]
//!     }
//! }
//!
//! fn main() -> Result<(), strata::StrataError> {
//!     let source: HashMap<String, String> = HashMap::from([
//!         ("APP_URL".to_string(), "http://example.com".to_string()),
//!         ("APP_WORKERS".to_string(), "4".to_string()),
//!     ]);
//!
//!     let mut config = AppConfig::default();
//!     Loader::new().source(source).load(&mut config)?;
//!
//!     assert_eq!(config.url, "http://example.com");
//!     assert_eq!(config.workers, 4);
//!     Ok(())
//! }
//! ```
//!
//! With the default source and a list of files, [`load`] is the whole API:
//! `strata::load(&mut config, &["/etc/app.toml", "app.toml"])?`.
//!
//! # Layer precedence
//!
//! ```text
//! Struct defaults       whatever the target holds before the call
//!        ↑ overridden by
//! Overlay files         caller-given order, later files win
//!        ↑ overridden by
//! Lookup source         the process environment, unless replaced
//! ```
//!
//! Every layer is **sparse**. An overlay file only touches the fields it
//! mentions; a lookup miss leaves a field exactly as the previous layer set
//! it. Missing overlay files are silently skipped — the source pass always
//! runs, even with no files at all.
//!
//! # The manifest
//!
//! [`Schema::fields`] returns the struct's fields in declaration order.
//! Fields with a key are looked up; fields without one are left alone —
//! except nested sections ([`Slot::Nested`]), which are always traversed so
//! their own keyed fields resolve, keyed parent or not. The same key may
//! appear on any number of fields.
//!
//! # Coercion
//!
//! A lookup source always answers with a string; the slot decides how it is
//! parsed:
//!
//! - Integers accept decimal plus `0x`/`0o`/`0b` prefixes, and reject
//!   values that do not fit the declared width.
//! - Booleans accept `true`/`false`, `t`/`f`, `1`/`0` (and the capitalized
//!   spellings).
//! - Floats parse as 64-bit literals; `f32` slots narrow afterward.
//! - [`Slot::Bytes`] takes the value's bytes verbatim.
//! - [`Slot::Seq`] becomes a one-element sequence holding the whole value —
//!   commas are **not** separators — or an empty sequence for a blank value.
//! - [`Slot::Skip`] marks kinds that are never populated (maps, fixed
//!   arrays, anything else): such fields are silently left untouched, even
//!   when keyed. No error is raised for them.
//!
//! File overlays carry typed TOML values and convert them directly under
//! the same rules (range-checked integers, arrays element-wise).
//!
//! # Self-parsing sections
//!
//! A type can take over its own parsing by implementing [`SetValue`] and
//! overriding [`Schema::setter`]. Such a section is treated as a single
//! scalar: its key's raw value is handed to the capability whole, and
//! generic field-by-field population never touches it. This is the way to
//! load a richly structured value — a broker URL, say — from one key.
//!
//! # Errors
//!
//! The first failure aborts the load: I/O (other than a missing file),
//! malformed TOML, a value the field cannot hold, or a rejection from a
//! self-parsing section. Conversion errors name the field and the offending
//! value; file-stage errors name the path. There is **no rollback** — a
//! failed load leaves the target partially mutated, with every assignment
//! made before the failure still in place.
//!
//! Loads are synchronous and keep no shared state; concurrent loads into
//! independent targets are fine, while a single target must be handed to
//! one load at a time (the exclusive borrow enforces as much).

pub mod error;

mod builder;
mod coerce;
mod env;
mod file;
mod populate;
mod schema;

#[cfg(test)]
mod fixtures;

pub use builder::{Loader, load};
pub use coerce::{ConvertError, Scalar, SeqAssign};
pub use env::{Env, Lookup, LookupFn};
pub use error::StrataError;
pub use populate::populate;
pub use schema::{Field, Schema, SetValue, Slot};
