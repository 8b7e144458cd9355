//! Layout module for tracking UI component regions
//!
//! `LayoutRegions` records where the search input and the suggestion panel were
//! last drawn, and `region_at()` maps a click position back to a component.

mod layout_regions;

pub use layout_hit_test::region_at;
pub use layout_regions::{LayoutRegions, Region};

#[cfg(test)]
#[path = "layout/layout_hit_test_tests.rs"]
mod layout_hit_test_tests;
