//! HTTP API handlers for the HTTP transport mode.
//!
//! The HTTP surface is deliberately small: a health probe and a JSON-RPC
//! endpoint forwarding into the same MCP handler the stdio transport uses.

pub mod health;
