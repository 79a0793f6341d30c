//! Resource hub: REST endpoints for product inventory, sensor measurements and kanji
//! reference data over a SQLite store.

pub mod config;
pub mod error;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::AppConfig;
pub use error::{AppError, ConfigError};
pub use migration::apply_migrations;
pub use routes::{api_routes, app, common_routes};
pub use service::{InventoryService, KanjiService, Lookup, RequestValidator, SensorService};
pub use state::AppState;
