// src/taptools/mod.rs

pub mod client;
pub mod models;
pub mod services;

pub use client::TapToolsClient;
