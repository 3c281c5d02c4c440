//! Layout module for tracking UI component regions
//!
//! This module provides region tracking for position-aware mouse interactions.
//! The `LayoutRegions` struct tracks where components are rendered, and
//! `region_at()` determines which component is at a given screen position.
//! Pointer-enter and pointer-leave are synthesized from changes in that region.

mod layout_regions;

pub use layout_hit_test::region_at;
pub use layout_regions::{LayoutRegions, Region};
