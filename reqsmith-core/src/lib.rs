#![forbid(unsafe_code)]

//! Data model and leaf logic for the reqsmith request execution engine.
//!
//! Everything here is pure: the request/result types with their wire shape,
//! and the `{{name}}` variable resolver. The engine that puts them on the
//! network lives in `reqsmith-exec`.

pub mod types;
pub mod vars;

pub use crate::types::{
    AuthScheme, BodyType, ExecuteRequest, ExecutionResult, HttpMethod, KeyValuePair,
    ResponseHeader,
};
