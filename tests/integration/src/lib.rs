//! Integration tests for the fleet registry
//!
//! This suite validates end-to-end scenarios:
//! - Full rocket/mission lifecycle walk-throughs
//! - Summary ordering and deduplication over mixed fleets
//! - Assignment races between parallel callers

pub mod test_utils;


#[cfg(test)]
mod summary_tests;
