//! POS Server — REST backend for the quán POS system
//!
//! # Module structure
//!
//! ```text
//! pos-server/src/
//! ├── core/          # configuration, state, server, background tasks
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # SQLite pool and repositories
//! ├── shifts.rs      # shift close + daily auto-close scheduler
//! └── utils/         # errors, logging, time conversions
//! ```
//!
//! The server owns the payment record and shift aggregation; carts live on
//! the client (`pos-client`) and only reach this process as the snapshot
//! inside `POST /api/payments`.

pub mod api;
pub mod core;
pub mod db;
pub mod shifts;
pub mod utils;

// Re-export public types
pub use crate::core::{Config, Server, ServerState};
pub use crate::utils::logger::{init_logger, init_logger_with_file};
pub use crate::utils::{AppError, AppResult};
