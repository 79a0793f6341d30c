//! HTTP handlers: resolve path entities, validate, persist, shape the response.

pub mod kanji;
pub mod products;
pub mod sensors;
