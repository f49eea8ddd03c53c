//! [`do_work`] sequences two dependent async operations in each of the ways
//! Rust lets you write it. Each style is a submodule with the same signature:
//!
//! ```ignore
//! pub mod do_work {
//!     pub mod auto {
//!         pub async fn do_work(location: &str) -> Result<String, Error> {
//!             // procedure implemented via Rust async-await syntax.
//!         }
//!     }
//!
//!     pub mod chained {
//!         pub fn do_work(location: &str) -> impl Future<Output = Result<String, Error>> {
//!             // procedure implemented as a chain of future combinators, in
//!             // the manner of promise `then`/`catch` callbacks.
//!         }
//!     }
//!
//!     pub mod manual {
//!         pub async fn do_work(location: &str) -> Result<String, Error> {
//!             // procedure implemented as a struct which implements
//!             // [`std::future::Future`].
//!         }
//!     }
//! }
//! ```
//!
//! All three are functionally identical: same result, same log lines in the
//! same order, and the second operation never starts if the first fails.

pub mod do_work;
