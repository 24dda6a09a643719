//! Route-level page components.

pub mod entity;
pub mod my_data;
