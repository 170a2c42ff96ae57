//! Concrete error types shipped with the crate.
//!
//! [`Result`](crate::Result) is generic over its failure cause, but callers
//! that just want "any error" can rely on [`BoxedError`], the default `E`.
//!
//! # Examples
//!
//! ```
//! use result_rail::{BoxedError, Result};
//!
//! let r: Result<u8, BoxedError> = Result::success("300").try_map(|s| s.parse::<u8>());
//! assert!(r.error().unwrap().to_string().contains("too large"));
//! ```
pub mod alloc_type;

#[cfg(feature = "std")]
pub mod panicked;

#[cfg(feature = "std")]
pub use panicked::Panicked;

use alloc_type::Box;

/// Type-erased failure cause used as the default error of [`Result`](crate::Result).
///
/// Any `core::error::Error + Send + Sync + 'static`, as well as `&str` and
/// `String`, converts into it through the standard `From` impls.
pub type BoxedError = Box<dyn core::error::Error + Send + Sync + 'static>;
