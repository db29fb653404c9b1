//! The schema manifest: how a struct describes its own fields.
//!
//! Rust has no runtime reflection, so a populatable struct implements
//! [`Schema`] and hands the engine a declaration-ordered list of [`Field`]s,
//! each pairing a name (used for file keys and error messages), an optional
//! lookup key, and a [`Slot`] — a typed mutable view of the field's storage.
//!
//! The manifest is cheap to build (a `Vec` of borrows) and is rebuilt on
//! every pass, so it always reflects the struct's current shape — including
//! which optional fields currently hold a value.

use crate::coerce::SeqAssign;

/// A single-method capability for types that parse themselves from one
/// raw string instead of being populated field by field.
///
/// This is the sanctioned way to treat a whole section as a single scalar
/// key — a connection URL, a duration, a comma-free token list with its own
/// grammar. Implement it alongside [`Schema`] and override
/// [`Schema::setter`] to return `Some(self)`:
///
/// ```ignore
/// impl SetValue for AmqpUrl {
///     fn set(&mut self, value: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
///         *self = value.parse()?;
///         Ok(())
///     }
/// }
///
/// impl Schema for AmqpUrl {
///     fn fields(&mut self) -> Vec<Field<'_>> {
///         Vec::new()
///     }
///     fn setter(&mut self) -> Option<&mut dyn SetValue> {
///         Some(self)
///     }
/// }
/// ```
///
/// A section exposing this capability is never populated by generic field
/// recursion; its result, success or failure, is the field's outcome.
pub trait SetValue {
    /// Consume one raw string value.
    fn set(&mut self, value: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

/// Implemented by every structure the engine can populate.
pub trait Schema {
    /// The structure's fields, in declaration order.
    fn fields(&mut self) -> Vec<Field<'_>>;

    /// Probe for the self-parse capability.
    ///
    /// The default reports no capability; types implementing [`SetValue`]
    /// override this with `Some(self)`.
    fn setter(&mut self) -> Option<&mut dyn SetValue> {
        None
    }
}

/// One named slot in a structure's manifest.
pub struct Field<'a> {
    /// The field's own name. Matches file keys and appears in errors.
    pub name: &'static str,
    /// The lookup key, if the field is keyed. Unkeyed fields are never
    /// looked up (nested sections are still traversed).
    pub key: Option<&'static str>,
    /// Typed view of the field's storage.
    pub slot: Slot<'a>,
}

impl<'a> Field<'a> {
    /// An unkeyed field.
    pub fn new(name: &'static str, slot: Slot<'a>) -> Self {
        Self {
            name,
            key: None,
            slot,
        }
    }

    /// A field populated from `key`.
    pub fn keyed(name: &'static str, key: &'static str, slot: Slot<'a>) -> Self {
        Self {
            name,
            key: Some(key),
            slot,
        }
    }
}

/// A typed mutable view of one field — the closed set of kinds the engine
/// can populate.
///
/// Kinds without a variant here (maps, fixed-size arrays, anything exotic)
/// are declared as [`Skip`](Slot::Skip): they are silently left untouched by
/// every pass, even when keyed. That mirrors the engine's contract — such
/// fields are never an error, they simply never participate.
///
/// `Vec<u8>` fields holding raw bytes should use [`Bytes`](Slot::Bytes),
/// which assigns a value's bytes verbatim; [`Seq`](Slot::Seq) is for
/// sequences whose elements are parsed individually.
pub enum Slot<'a> {
    Str(&'a mut String),
    Bool(&'a mut bool),
    F32(&'a mut f32),
    F64(&'a mut f64),
    I8(&'a mut i8),
    I16(&'a mut i16),
    I32(&'a mut i32),
    I64(&'a mut i64),
    Isize(&'a mut isize),
    U8(&'a mut u8),
    U16(&'a mut u16),
    U32(&'a mut u32),
    U64(&'a mut u64),
    Usize(&'a mut usize),
    /// Raw bytes, assigned verbatim.
    Bytes(&'a mut Vec<u8>),
    /// A homogeneous sequence of scalar elements.
    Seq(&'a mut dyn SeqAssign),
    /// A nested section, traversed field by field unless it exposes
    /// [`SetValue`].
    Nested(&'a mut dyn Schema),
    /// An indirection. `None` means there is currently no value behind it;
    /// assigning into an empty optional is a conversion error.
    ///
    /// ```ignore
    /// Field::keyed(
    ///     "retries",
    ///     "RETRIES",
    ///     Slot::Optional(self.retries.as_mut().map(|v| Box::new(Slot::U32(v)))),
    /// )
    /// ```
    Optional(Option<Box<Slot<'a>>>),
    /// A kind the engine does not populate. Always succeeds, never mutates.
    Skip,
}
