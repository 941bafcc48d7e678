//! Molecular layer: horizontal slide between sections
//!
//! Tracks the strip position in section units (0.0 = first section fully
//! visible, 2.5 = halfway between the third and fourth) and eases it towards
//! the active index over the transition duration.

use std::time::{Duration, Instant};

use folio_core::EasingType;

use super::easing::EasingTypeExt;
use super::timing::{is_complete, lerp, progress};

#[derive(Debug, Clone)]
struct ActiveSlide {
    start: Instant,
    from: f64,
    to: f64,
}

/// Slide animation controller
///
/// Call [`SlideAnimator::slide_to`] when the navigator changes section,
/// then [`SlideAnimator::update`] every frame.
#[derive(Debug, Clone)]
pub struct SlideAnimator {
    slide: Option<ActiveSlide>,
    position: f64,
    duration: Duration,
    easing: EasingType,
}

impl SlideAnimator {
    pub fn new(start_index: usize, duration: Duration, easing: EasingType) -> Self {
        Self {
            slide: None,
            position: start_index as f64,
            duration,
            easing,
        }
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.slide.is_some()
    }

    /// Current strip position in section units
    #[inline]
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Section the strip is heading to
    pub fn target(&self) -> f64 {
        self.slide.as_ref().map(|s| s.to).unwrap_or(self.position)
    }

    /// Start sliding towards `index` from wherever the strip is now
    ///
    /// A slide already in flight is retargeted from its current position.
    pub fn slide_to(&mut self, index: usize, now: Instant) {
        self.update(now);
        let to = index as f64;

        if self.duration.is_zero() {
            self.position = to;
            self.slide = None;
            return;
        }
        if (self.position - to).abs() < f64::EPSILON {
            self.slide = None;
            return;
        }

        self.slide = Some(ActiveSlide {
            start: now,
            from: self.position,
            to,
        });
    }

    /// Advance the animation and return the current position
    pub fn update(&mut self, now: Instant) -> f64 {
        if let Some(ref slide) = self.slide {
            if is_complete(slide.start, now, self.duration) {
                self.position = slide.to;
                self.slide = None;
            } else {
                let t = self.easing.apply(progress(slide.start, now, self.duration));
                self.position = lerp(slide.from, slide.to, t);
            }
        }
        self.position
    }
}
