//! Core data models for Studio.
//!
//! This crate provides the domain types shared by the production
//! calendar: videos, their review status, and user roles.

pub mod builders;
pub mod ids;
pub mod item;
pub mod role;

// Re-export main types
pub use builders::ItemBuilder;
pub use ids::ItemId;
pub use item::{parse_calendar_day, Item, VideoStatus};
pub use role::Role;
