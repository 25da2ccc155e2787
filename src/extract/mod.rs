//! Field extraction for listing items and detail pages
//!
//! This module contains:
//! - The field model and default values
//! - Ordered selector chains and per-template selector tables
//! - Listing item splitting

mod fields;
pub mod selectors;

pub use fields::{
    extract, extract_fields, item_fragments, Field, SelectorChain, SelectorTable, ValueSource,
    MISSING_DATE, MISSING_TITLE,
};
