//! Utility modules shared across both scoring pipelines
//!
//! - Normalization: percentage conversion and priority-ordered ranking

pub mod normalization;

pub use normalization::{
    dominant_element, normalize_scores, rank_elements, round1, weakest_element,
};
