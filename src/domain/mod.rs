//! Domain layer - Entities and the trait seams the application depends on

pub mod entities;
pub mod traits;
