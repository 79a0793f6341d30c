//! Validation, natural-key lookup and persistence for each resource family.

mod inventory;
mod kanji;
mod lookup;
mod sensors;
mod validation;

pub use inventory::InventoryService;
pub use kanji::KanjiService;
pub use lookup::Lookup;
pub use sensors::SensorService;
pub use validation::{parse_timestamp, RequestValidator};
