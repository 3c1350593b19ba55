//! Reusable UI components.

pub mod alert;
pub mod nav_bar;
