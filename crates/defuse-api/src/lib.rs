//! defuse-api: HTTP API layer for the token selector
//!
//! Lets a frontend read the selector state and send asset/chain choices back.

pub mod dto;
pub mod routes;
pub mod server;
pub mod state;

pub use server::*;
pub use state::AppState;
