//! Pure data structures (DTOs) managed by the resource actors.

pub mod product;

pub use product::*;
