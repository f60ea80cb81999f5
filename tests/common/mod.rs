//! Common test utilities for postcode-geocoder
//!
//! # Usage
//!
//! ```rust
//! use crate::common::{fixtures, server};
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let server = server::PostcodesServer::start().await;
//!     let grid = fixtures::numbered_codes(250);
//!     // ...
//! }
//! ```

pub mod assertions;
pub mod fixtures;
pub mod server;

pub use server::PostcodesServer;
