//! Conversions from raw values into field kinds.
//!
//! Two value shapes arrive here: raw strings from a lookup source, and typed
//! TOML values from a file overlay. Both funnel through [`Scalar`], so a
//! `u16` field rejects `70000` the same way whether it came from `PORT=70000`
//! or `port = 70000` in a file.
//!
//! Integer parsing is base-flexible: plain decimal, plus `0x`/`0o`/`0b`
//! prefixes with an optional leading sign. Narrowing to the field's declared
//! width is checked; overflow is an error, never a truncation.

use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;
use toml::Value;

/// Why a value could not become the field's kind.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("cannot parse {value:?} as {target}: {source}")]
    Int {
        value: String,
        target: &'static str,
        #[source]
        source: ParseIntError,
    },

    #[error("cannot parse {value:?} as {target}: {source}")]
    Float {
        value: String,
        target: &'static str,
        #[source]
        source: ParseFloatError,
    },

    #[error("cannot parse {value:?} as bool")]
    Bool { value: String },

    #[error("{value} does not fit in {target}")]
    OutOfRange { value: i64, target: &'static str },

    #[error("expected {expected}, found {found}")]
    Mismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("no underlying value to populate")]
    EmptyOptional,
}

fn mismatch(expected: &'static str, found: &Value) -> ConvertError {
    ConvertError::Mismatch {
        expected,
        found: found.type_str(),
    }
}

/// A scalar field kind: convertible from a raw string and from a typed
/// TOML value. Sequence elements are bounded by this trait.
pub trait Scalar: Sized {
    /// Kind name used in error messages.
    const TARGET: &'static str;

    fn from_raw(raw: &str) -> Result<Self, ConvertError>;

    fn from_toml(value: &Value) -> Result<Self, ConvertError>;
}

impl Scalar for String {
    const TARGET: &'static str = "string";

    fn from_raw(raw: &str) -> Result<Self, ConvertError> {
        Ok(raw.to_string())
    }

    fn from_toml(value: &Value) -> Result<Self, ConvertError> {
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| mismatch(Self::TARGET, value))
    }
}

impl Scalar for bool {
    const TARGET: &'static str = "bool";

    fn from_raw(raw: &str) -> Result<Self, ConvertError> {
        match raw {
            "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
            "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
            _ => Err(ConvertError::Bool {
                value: raw.to_string(),
            }),
        }
    }

    fn from_toml(value: &Value) -> Result<Self, ConvertError> {
        value.as_bool().ok_or_else(|| mismatch(Self::TARGET, value))
    }
}

impl Scalar for f64 {
    const TARGET: &'static str = "f64";

    fn from_raw(raw: &str) -> Result<Self, ConvertError> {
        parse_float(raw, Self::TARGET)
    }

    fn from_toml(value: &Value) -> Result<Self, ConvertError> {
        match value {
            Value::Float(f) => Ok(*f),
            Value::Integer(n) => Ok(*n as f64),
            other => Err(mismatch("float", other)),
        }
    }
}

impl Scalar for f32 {
    const TARGET: &'static str = "f32";

    fn from_raw(raw: &str) -> Result<Self, ConvertError> {
        // Parsed as a 64-bit literal, then narrowed.
        Ok(parse_float(raw, Self::TARGET)? as f32)
    }

    fn from_toml(value: &Value) -> Result<Self, ConvertError> {
        Ok(f64::from_toml(value)? as f32)
    }
}

fn parse_float(raw: &str, target: &'static str) -> Result<f64, ConvertError> {
    raw.parse::<f64>().map_err(|source| ConvertError::Float {
        value: raw.to_string(),
        target,
        source,
    })
}

macro_rules! int_scalar {
    ($($ty:ty => $name:literal),+ $(,)?) => {$(
        impl Scalar for $ty {
            const TARGET: &'static str = $name;

            fn from_raw(raw: &str) -> Result<Self, ConvertError> {
                let (digits, radix) = radix_split(raw);
                <$ty>::from_str_radix(&digits, radix).map_err(|source| ConvertError::Int {
                    value: raw.to_string(),
                    target: Self::TARGET,
                    source,
                })
            }

            fn from_toml(value: &Value) -> Result<Self, ConvertError> {
                let n = value.as_integer().ok_or_else(|| mismatch("integer", value))?;
                <$ty>::try_from(n).map_err(|_| ConvertError::OutOfRange {
                    value: n,
                    target: Self::TARGET,
                })
            }
        }
    )+};
}

int_scalar! {
    i8 => "i8",
    i16 => "i16",
    i32 => "i32",
    i64 => "i64",
    isize => "isize",
    u8 => "u8",
    u16 => "u16",
    u32 => "u32",
    u64 => "u64",
    usize => "usize",
}

/// Split an integer literal into digits and radix, honoring the
/// conventional `0x`/`0o`/`0b` prefixes and a leading sign.
fn radix_split(raw: &str) -> (String, u32) {
    let (sign, body) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw.strip_prefix('+').unwrap_or(raw)),
    };

    let (digits, radix) = if let Some(d) = body.strip_prefix("0x").or_else(|| body.strip_prefix("0X"))
    {
        (d, 16)
    } else if let Some(d) = body.strip_prefix("0o").or_else(|| body.strip_prefix("0O")) {
        (d, 8)
    } else if let Some(d) = body.strip_prefix("0b").or_else(|| body.strip_prefix("0B")) {
        (d, 2)
    } else {
        (body, 10)
    };

    (format!("{sign}{digits}"), radix)
}

/// Object-safe view of a growable sequence, letting
/// [`Slot::Seq`](crate::Slot::Seq) cover any `Vec<T>` with a scalar element.
pub trait SeqAssign {
    /// Replace the sequence with a single element parsed from `raw`, or
    /// with nothing if `raw` is blank. The raw string is never split on
    /// commas or any other delimiter.
    fn assign_raw(&mut self, raw: &str) -> Result<(), ConvertError>;

    /// Replace the sequence with `items`, converted element-wise.
    fn assign_items(&mut self, items: &[Value]) -> Result<(), ConvertError>;
}

impl<T: Scalar> SeqAssign for Vec<T> {
    fn assign_raw(&mut self, raw: &str) -> Result<(), ConvertError> {
        if raw.trim().is_empty() {
            self.clear();
            return Ok(());
        }
        *self = vec![T::from_raw(raw)?];
        Ok(())
    }

    fn assign_items(&mut self, items: &[Value]) -> Result<(), ConvertError> {
        *self = items.iter().map(T::from_toml).collect::<Result<_, _>>()?;
        Ok(())
    }
}
