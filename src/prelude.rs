//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use result_rail::prelude::*;
//!
//! let r: Result<i32, BoxedError> = "21".parse::<i32>().into_rail_with().map(|x| x * 2);
//! assert_eq!(r.into_value(), Some(42));
//! ```
//!
//! Note that this brings this crate's [`Result`] into scope, shadowing the
//! standard library one. Refer to the latter as `std::result::Result` or
//! `core::result::Result` where both are needed.

// Macros
pub use crate::{attempt, rail_try};

// Core types
pub use crate::result::Result;
pub use crate::types::BoxedError;

// Traits
pub use crate::traits::{ErrorOps, IntoRail, OptionRailExt, WithError};

#[cfg(feature = "tracing")]
pub use crate::trace::ResultTraceExt;
