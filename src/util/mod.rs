//! Shared helpers: easing curves and CSS value formatting.

pub mod css;
pub mod easing;
