//! Common types and traits for all entities

pub mod entity;
pub mod save_response;

// Re-exports
pub use entity::Entity;
pub use save_response::SaveResponse;
