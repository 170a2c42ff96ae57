//! Core traits for composing two-case containers.
//!
//! This module defines the traits that let this crate's [`Result`](crate::Result)
//! and the standard library `Result` be used interchangeably:
//!
//! - [`ErrorCategory`]: Categorical abstraction for lifting values and errors
//! - [`ErrorOps`]: Operations for error recovery and bidirectional mapping
//! - [`WithError`]: Abstraction for types that carry remappable error variants
//! - [`IntoRail`] / [`OptionRailExt`]: Conversions onto the rail
//!
//! # Examples
//!
//! ```
//! use result_rail::traits::{ErrorCategory, ErrorOps};
//! use result_rail::Result;
//!
//! let success: Result<i32, String> = <Result<(), String>>::lift(42);
//! assert_eq!(success.into_value(), Some(42));
//!
//! let recovered = Result::<i32, &str>::failure("missing").recover(|_| Result::success(0));
//! assert_eq!(recovered.into_value(), Some(0));
//! ```

pub mod error_category;
pub mod error_ops;
pub mod into_rail;
pub mod with_error;

pub use error_category::ErrorCategory;
pub use error_ops::ErrorOps;
pub use into_rail::{IntoRail, OptionRailExt};
pub use with_error::WithError;
