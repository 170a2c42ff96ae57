//! Failure cause recorded when a transform panics.

use std::any::Any;
use std::boxed::Box;
use std::fmt;
use std::string::String;

/// A panic captured by [`Result::map_catch_unwind`](crate::Result::map_catch_unwind).
///
/// Holds the panic message when the payload was a `&str` or `String`, the two
/// payload types produced by `panic!`. Any other payload is recorded as
/// `"Box<dyn Any>"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Panicked {
    message: String,
}

impl Panicked {
    /// Creates a record with the given message.
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Extracts the message from a payload returned by `catch_unwind`.
    pub fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let message = match payload.downcast::<String>() {
            Ok(message) => *message,
            Err(payload) => match payload.downcast_ref::<&'static str>() {
                Some(message) => String::from(*message),
                None => String::from("Box<dyn Any>"),
            },
        };
        Self { message }
    }

    /// Returns the captured panic message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Panicked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "transform panicked: {}", self.message)
    }
}

impl std::error::Error for Panicked {}
