//! Bulk postcode lookup against postcodes.io
//!
//! One [`Batch`](crate::core::batch::Batch) becomes one POST request; the
//! response is turned into one [`Outcome`] per queried postcode, in the order
//! the service returned them.

mod client;
mod error;
mod types;

pub use client::{LookupClient, PostcodesIoClient, parse_lookup_response};
pub use error::LookupError;
pub use types::{
    BulkLookupEntry, BulkLookupRequest, BulkLookupResponse, DEFAULT_ENDPOINT, NOT_FOUND_MARKER,
    Outcome, PostcodeRecord,
};
