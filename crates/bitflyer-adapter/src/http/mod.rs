/*
[INPUT]:  HTTP client configuration, credentials and API endpoints
[OUTPUT]: Raw JSON responses from the REST API
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod account;
pub mod client;
pub mod error;
pub mod public;
pub mod signature;
pub mod trade;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{BitflyerError, Result};
pub use signature::{Clock, FixedClock, RequestSigner, SignedHeaders, SystemClock};

pub use client::{BASE_URL, BitflyerClient, ClientConfig, Credentials};
