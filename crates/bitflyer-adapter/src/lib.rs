/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public bitFlyer adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    BASE_URL,
    BitflyerClient,
    BitflyerError,
    ClientConfig,
    Clock,
    Credentials,
    FixedClock,
    RequestSigner,
    Result,
    SignedHeaders,
    SystemClock,
};

// Re-export all types
pub use types::*;
