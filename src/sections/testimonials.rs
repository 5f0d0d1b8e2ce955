use crate::i18n::{ContentTree, Testimonial};
use std::time::Duration;

/// Time a testimonial stays on screen before the carousel advances.
pub const ROTATION_INTERVAL: Duration = Duration::from_secs(6);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideDirection {
    Forward,
    Backward,
}

/// Rotating testimonial display.
///
/// Only the index is stored. Testimonial lists have the same length in every
/// language, so the index stays valid across a language change.
#[derive(Debug, Clone, Default)]
pub struct TestimonialCarousel {
    index: usize,
    direction: Option<SlideDirection>,
    elapsed: Duration,
}

impl TestimonialCarousel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Direction of the last move, `None` before the first one.
    pub fn direction(&self) -> Option<SlideDirection> {
        self.direction
    }

    pub fn next(&mut self, len: usize) {
        self.step(SlideDirection::Forward, len);
    }

    pub fn previous(&mut self, len: usize) {
        self.step(SlideDirection::Backward, len);
    }

    /// Advance the rotation clock. Returns how many slides were advanced.
    ///
    /// The clock keeps running across manual moves.
    pub fn tick(&mut self, elapsed: Duration, len: usize) -> usize {
        if len == 0 {
            return 0;
        }

        let total = self.elapsed.saturating_add(elapsed).as_nanos();
        let interval = ROTATION_INTERVAL.as_nanos();
        let steps = total / interval;
        self.elapsed = Duration::from_nanos((total % interval) as u64);

        if steps > 0 {
            let offset = (steps % len as u128) as usize;
            self.index = (self.index + offset) % len;
            self.direction = Some(SlideDirection::Forward);
        }
        usize::try_from(steps).unwrap_or(usize::MAX)
    }

    pub fn current(&self, content: &'static ContentTree) -> Option<&'static Testimonial> {
        content.testimonials.items.get(self.index)
    }

    fn step(&mut self, direction: SlideDirection, len: usize) {
        if len == 0 {
            return;
        }

        self.index = match direction {
            SlideDirection::Forward => (self.index + 1) % len,
            SlideDirection::Backward => (self.index + len - 1) % len,
        };
        self.direction = Some(direction);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{content_for, LanguageCode};

    #[test]
    fn test_next_wraps() {
        let mut carousel = TestimonialCarousel::new();
        carousel.next(3);
        carousel.next(3);
        assert_eq!(carousel.index(), 2);
        carousel.next(3);
        assert_eq!(carousel.index(), 0);
        assert_eq!(carousel.direction(), Some(SlideDirection::Forward));
    }

    #[test]
    fn test_previous_wraps() {
        let mut carousel = TestimonialCarousel::new();
        carousel.previous(3);
        assert_eq!(carousel.index(), 2);
        assert_eq!(carousel.direction(), Some(SlideDirection::Backward));
    }

    #[test]
    fn test_empty_list_is_ignored() {
        let mut carousel = TestimonialCarousel::new();
        carousel.next(0);
        carousel.previous(0);
        assert_eq!(carousel.tick(Duration::from_secs(60), 0), 0);
        assert_eq!(carousel.index(), 0);
        assert_eq!(carousel.direction(), None);
    }

    #[test]
    fn test_tick_rotates_on_interval() {
        let mut carousel = TestimonialCarousel::new();
        assert_eq!(carousel.tick(Duration::from_secs(5), 3), 0);
        assert_eq!(carousel.tick(Duration::from_secs(1), 3), 1);
        assert_eq!(carousel.index(), 1);
        assert_eq!(carousel.tick(Duration::from_secs(12), 3), 2);
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_manual_move_keeps_clock_running() {
        let mut carousel = TestimonialCarousel::new();
        carousel.tick(Duration::from_secs(5), 3);
        carousel.next(3);
        assert_eq!(carousel.tick(Duration::from_secs(1), 3), 1);
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn test_huge_gap_does_not_overflow() {
        let mut carousel = TestimonialCarousel::new();
        carousel.tick(Duration::from_secs(5), 3);

        let advanced = carousel.tick(Duration::MAX, 3);
        assert!(advanced > 0);
        assert!(carousel.index() < 3);
        assert_eq!(carousel.direction(), Some(SlideDirection::Forward));

        // The saturated clock still rotates normally afterwards
        carousel.tick(Duration::MAX, 3);
        assert!(carousel.index() < 3);
    }

    #[test]
    fn test_long_gap_lands_on_expected_slide() {
        let mut carousel = TestimonialCarousel::new();
        // 7 intervals plus 2 seconds
        assert_eq!(carousel.tick(Duration::from_secs(44), 3), 7);
        assert_eq!(carousel.index(), 1);
        assert_eq!(carousel.tick(Duration::from_secs(4), 3), 1);
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn test_current_follows_language() {
        let mut carousel = TestimonialCarousel::new();
        carousel.next(content_for(LanguageCode::Fr).testimonials.items.len());

        let french = carousel.current(content_for(LanguageCode::Fr)).unwrap();
        let arabic = carousel.current(content_for(LanguageCode::Ar)).unwrap();
        assert_eq!(french, &content_for(LanguageCode::Fr).testimonials.items[1]);
        assert_eq!(arabic, &content_for(LanguageCode::Ar).testimonials.items[1]);
    }
}
