// src/taptools/models/mod.rs
//
// One request and one response shape per TapTools endpoint, grouped by API
// family. Requests validate before any network call; responses mirror the
// upstream JSON exactly, with required fields non-optional so a missing
// field fails deserialization instead of producing a partial object.

pub mod common;
pub mod integration;
pub mod market;
pub mod nfts;
pub mod onchain;
pub mod tokens;
pub mod wallet;
