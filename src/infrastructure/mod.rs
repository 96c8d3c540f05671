//! Infrastructure layer - Framework implementations
//!
//! This layer contains:
//! - Store implementations (repositories)
//! - Application state (state)
//! - HTTP server setup (server)

pub mod repositories;
pub mod server;
pub mod state;

pub use repositories::*;
pub use state::AppState;
