//! Typed request and response payloads.
//!
//! # Design
//! Field names mirror the vendor's JSON exactly via serde renames. Response
//! records default every missing field, matching the vendor's habit of
//! omitting empty values. Fields the vendor is known to encode inconsistently
//! use the `lenient` wrappers.

pub mod request;
pub mod response;
