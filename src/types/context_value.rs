//! Dynamic values stored in context and metadata maps.
//!
//! [`ContextValue`] keeps the payload typed without falling back to
//! `Box<dyn Any>`: scalars, lists and nested maps cover everything call sites
//! record (field names, inputs, counters, known identifiers).
//!
//! # Examples
//!
//! ```
//! use outcome_rail::ContextValue;
//!
//! assert_eq!(ContextValue::from("email").to_string(), "\"email\"");
//! assert_eq!(ContextValue::from(2_usize).as_i64(), Some(2));
//! assert_eq!(ContextValue::from(vec!["a", "b"]).to_string(), "[\"a\", \"b\"]");
//! ```
use crate::types::ContextMap;
use std::borrow::Cow;
use std::fmt::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single value held by a [`ContextMap`].
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(untagged))]
pub enum ContextValue {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<ContextValue>),
    Map(ContextMap),
}

impl ContextValue {
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    pub fn as_list(&self) -> Option<&[ContextValue]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    #[inline]
    pub fn as_map(&self) -> Option<&ContextMap> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl Display for ContextValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            // Whole floats keep a fraction so they never read as an Int.
            Self::Float(x) if x.is_finite() && x.fract() == 0.0 => write!(f, "{x:.1}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Str(s) => write!(f, "{s:?}"),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    Display::fmt(item, f)?;
                }
                f.write_str("]")
            }
            Self::Map(map) => Display::fmt(map, f),
        }
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ContextValue {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! impl_from_wide_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ContextValue {
                /// Values beyond `i64::MAX` are kept as their decimal string.
                #[inline]
                fn from(value: $ty) -> Self {
                    i64::try_from(value).map_or_else(|_| Self::Str(value.to_string()), Self::Int)
                }
            }
        )*
    };
}

impl_from_wide_int!(u64, usize, isize);

impl From<bool> for ContextValue {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f32> for ContextValue {
    #[inline]
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for ContextValue {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for ContextValue {
    #[inline]
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for ContextValue {
    #[inline]
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for ContextValue {
    #[inline]
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<Cow<'_, str>> for ContextValue {
    #[inline]
    fn from(value: Cow<'_, str>) -> Self {
        Self::Str(value.into_owned())
    }
}

impl From<ContextMap> for ContextValue {
    #[inline]
    fn from(value: ContextMap) -> Self {
        Self::Map(value)
    }
}

impl<T> From<Vec<T>> for ContextValue
where
    T: Into<ContextValue>,
{
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T> From<&[T]> for ContextValue
where
    T: Clone + Into<ContextValue>,
{
    fn from(values: &[T]) -> Self {
        Self::List(values.iter().cloned().map(Into::into).collect())
    }
}

impl<T> From<Option<T>> for ContextValue
where
    T: Into<ContextValue>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T> FromIterator<T> for ContextValue
where
    T: Into<ContextValue>,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::List(iter.into_iter().map(Into::into).collect())
    }
}
