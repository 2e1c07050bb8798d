//! defuse-core: Shared types, errors, and configuration
//!
//! This crate provides the foundational types used across the workspace,
//! including the `TokenFetcher` seam between the RPC client and the selector.

pub mod config;
pub mod errors;
pub mod fetcher;
pub mod types;

pub use config::*;
pub use errors::*;
pub use fetcher::TokenFetcher;
pub use types::*;
