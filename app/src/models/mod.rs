//! Catalog records

pub mod show;
pub mod theatre;

pub use show::{NewShow, Show};
pub use theatre::Theatre;
