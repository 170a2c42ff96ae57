//! The two-case [`Result`] container and its combinators.
//!
//! # Key Components
//!
//! - [`Result`] - Either a success value or a failure cause
//! - Iterator adapters over the success slot and short-circuit collection
//! - Trait implementations for rendering and conversion
//!
//! # Examples
//!
//! ```
//! use result_rail::Result;
//!
//! let r: Result<i32, &str> = Result::success(5)
//!     .map(|x| x + 1)
//!     .flat_map(|x| if x > 5 { Result::success(x) } else { Result::failure("too small") });
//!
//! assert_eq!(r.describe(), "Result.success( 6 )");
//! ```
pub mod core;
pub mod iter;
pub mod traits;

pub use self::core::*;
pub use self::iter::*;
