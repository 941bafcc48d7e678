//! Slide transition between sections
//!
//! # Architecture
//!
//! ## Atomic layer
//! - `easing` - easing curves (cubic, quintic, exponential)
//! - `timing` - progress and interpolation with an explicit clock
//!
//! ## Molecular layer
//! - `animation` - [`SlideAnimator`], the strip position over time

pub mod easing;
pub mod timing;

pub mod animation;

pub use animation::SlideAnimator;
pub use easing::{EasingType, EasingTypeExt};
