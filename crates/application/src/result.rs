//! Result convention
//!
//! SDK operations return [`ContextResult`]. [`Outcome`] is the same union in
//! a serialisable shape, `{"success": true, "data": ...}` or
//! `{"success": false, "error": {...}}`, for callers that hand results
//! across a language or process boundary.

use serde::de::{self, DeserializeOwned, Deserializer};
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ContextError, ErrorObject};

/// Result type alias for SDK operations.
pub type ContextResult<T> = Result<T, ContextError>;

/// A success/failure union that serialises with a `success` discriminant.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// The operation produced `T`.
    Success(T),
    /// The operation failed.
    Failure(ErrorObject),
}

impl<T> Outcome<T> {
    /// Returns true for `Success`.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns the data of a success.
    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            Self::Failure(_) => None,
        }
    }

    /// Returns the error of a failure.
    #[must_use]
    pub const fn error(&self) -> Option<&ErrorObject> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Converts the data of a success.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Success(data) => Outcome::Success(f(data)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }
}

impl<T> From<ContextResult<T>> for Outcome<T> {
    fn from(result: ContextResult<T>) -> Self {
        match result {
            Ok(data) => Self::Success(data),
            Err(e) => Self::Failure(e.to_error_object()),
        }
    }
}

impl<T: Serialize> Serialize for Outcome<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Outcome", 2)?;
        match self {
            Self::Success(data) => {
                state.serialize_field("success", &true)?;
                state.serialize_field("data", data)?;
            }
            Self::Failure(error) => {
                state.serialize_field("success", &false)?;
                state.serialize_field("error", error)?;
            }
        }
        state.end()
    }
}

#[derive(Deserialize)]
struct RawOutcome {
    success: bool,
    #[serde(default, deserialize_with = "present")]
    data: Option<Value>,
    #[serde(default)]
    error: Option<ErrorObject>,
}

/// Keeps an explicit `null` apart from an absent field.
fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Outcome<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawOutcome::deserialize(deserializer)?;
        match (raw.success, raw.data, raw.error) {
            (true, Some(data), _) => serde_json::from_value(data)
                .map(Self::Success)
                .map_err(de::Error::custom),
            (false, _, Some(error)) => Ok(Self::Failure(error)),
            (true, None, _) => Err(de::Error::missing_field("data")),
            (false, _, None) => Err(de::Error::missing_field("error")),
        }
    }
}

/// Extension trait for rendering a [`ContextResult`] as an [`Outcome`].
pub trait ContextResultExt<T> {
    /// Converts the result to its serialisable form.
    fn into_outcome(self) -> Outcome<T>;
}

impl<T> ContextResultExt<T> for ContextResult<T> {
    fn into_outcome(self) -> Outcome<T> {
        Outcome::from(self)
    }
}
