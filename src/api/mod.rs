//! API layer - HTTP endpoints and routing

pub mod health;
pub mod router;
pub mod state;
pub mod topic_items;
pub mod types;

pub use router::{build_cors_layer, create_router_with_state};
pub use state::AppState;
