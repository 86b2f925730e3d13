//! Axum-based HTTP gateway: the three generation endpoints, the dashboard
//! aggregate, health and the two static pages.
//!
//! Every failure a caller can cause or observe is answered with status 200
//! and an `{"error": "..."}` body, which is what the dashboard page expects.
//! There is no request deadline of its own; a slow upstream is cut off by
//! the provider client's `completion.timeout_secs`.

mod handlers;
mod pages;
mod server;

pub use server::{run_gateway, run_gateway_with_listener};

use crate::generation::GenerationService;
use std::sync::Arc;

/// Maximum request body size (64KB) -- prevents memory exhaustion
pub const MAX_BODY_SIZE: usize = 65_536;

/// Shared state for all axum handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<GenerationService>,
    /// Length of the dashboard's recent activity list
    pub recent_limit: u32,
}
