//! One request followed by one dependent processing step, sequenced three
//! ways. See [`two_ways::do_work`].

pub mod error;
pub mod requests;
pub mod two_ways;

#[cfg(test)]
mod capture;

pub use error::Error;
pub use requests::{make_request, process_request, RequestOutcome};
