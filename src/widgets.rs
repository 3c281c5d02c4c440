//! Reusable rendering helpers

pub mod popup;
