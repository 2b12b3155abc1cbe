//! HTTP protocol helpers
//!
//! Content-type detection, conditional-request support, and response
//! builders shared by the request handler.

pub mod cache;
pub mod mime;
pub mod response;

pub use response::{
    build_304_response, build_405_response, build_500_response, build_options_response,
};
