use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The requester refused to talk to the given location. Displays as the
    /// bare reason so it can be reported verbatim.
    #[error("{0}")]
    RequestRejected(String),
}
