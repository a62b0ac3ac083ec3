//! Backend model proxy adapter.

pub mod client;

pub use client::GeminiProxyClient;
