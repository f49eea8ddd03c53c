//! The two simulated network operations. Neither performs any I/O; each logs
//! what it is doing, suspends once as a stand-in for a round trip, then
//! resolves.

use futures_lite::future::yield_now;
use tracing::info;

use crate::Error;

/// The only location [`make_request`] will talk to.
pub const ACCEPTED_LOCATION: &str = "Google";
/// What [`ACCEPTED_LOCATION`] answers with.
pub const GREETING: &str = "Google says hi";
/// The reason every other location is rejected with.
pub const REJECTION: &str = "We can only talk to Google";
/// Prepended by [`process_request`] to whatever it is given.
pub const PROCESSED_PREFIX: &str = "Extra Information + ";

pub type RequestOutcome = Result<String, Error>;

pub async fn make_request(location: impl AsRef<str>) -> RequestOutcome {
    let location = location.as_ref();
    info!("Making request to {location}");
    yield_now().await;

    if location == ACCEPTED_LOCATION {
        Ok(GREETING.to_owned())
    } else {
        Err(Error::RequestRejected(REJECTION.to_owned()))
    }
}

/// Never fails; the input is not checked against anything.
pub async fn process_request(response: impl AsRef<str>) -> String {
    info!("Processing response");
    yield_now().await;

    format!("{PROCESSED_PREFIX}{}", response.as_ref())
}
