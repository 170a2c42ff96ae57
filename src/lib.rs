//! A two-case [`Result`] container with monadic composition.
//!
//! [`Result<T, E>`](Result) holds either a success value or a failure cause.
//! Its combinators short-circuit on failure: once a chain fails, later
//! transforms are skipped and the same error is handed forward.
//!
//! # Examples
//!
//! ## Construct and Inspect
//!
//! ```
//! use result_rail::Result;
//!
//! let ok = Result::<i32, &str>::success(5);
//! assert!(ok.is_success());
//! assert_eq!(ok.value(), Some(&5));
//! assert_eq!(ok.error(), None);
//! ```
//!
//! ## Transform and Chain
//!
//! ```
//! use result_rail::{BoxedError, Result};
//!
//! let port: Result<u16, BoxedError> = Result::success("8080")
//!     .try_map(|raw| raw.parse::<u16>())
//!     .flat_map(|p| {
//!         if p >= 1024 {
//!             Result::success(p)
//!         } else {
//!             Result::failure("privileged port".into())
//!         }
//!     });
//!
//! assert_eq!(port.into_value(), Some(8080));
//! ```
//!
//! ## Describe
//!
//! ```
//! use result_rail::Result;
//!
//! assert_eq!(Result::<i32, &str>::success(3).describe(), "Result.success( 3 )");
//! assert_eq!(Result::<i32, &str>::failure("timeout").describe(), "Result.failure( timeout )");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Conversions between Result, the standard library Result, and Option
pub mod convert;
/// Early-return and block-capture macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// The Result container and its combinators
pub mod result;
/// Core traits for composition and conversion
pub mod traits;
/// Default error type and captured panics
pub mod types;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod trace;

pub use result::Result;
pub use traits::*;
pub use types::BoxedError;

#[cfg(feature = "std")]
pub use types::Panicked;
