//! Price ceiling slider domain.

/// Ceiling selected when the shop is first shown.
pub const DEFAULT_MAX_PRICE: u32 = 2000;

/// The shop's price slider: 800 to 2100 CHF in steps of 100.
pub const SHOP_PRICE_RANGE: PriceRange = PriceRange {
    min: 800,
    max: 2100,
    step: 100,
};

/// A closed, stepped range of prices in CHF.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    pub min: u32,
    pub max: u32,
    pub step: u32,
}

impl PriceRange {
    pub fn contains(&self, price: u32) -> bool {
        (self.min..=self.max).contains(&price)
    }

    /// Closest value the slider can take: clamped to the range, then rounded
    /// to the nearest step counted from `min` (halves round up).
    pub fn snap(&self, price: u32) -> u32 {
        let clamped = price.clamp(self.min, self.max);
        if self.step == 0 {
            return clamped;
        }

        let offset = clamped - self.min;
        let steps = (offset + self.step / 2) / self.step;
        (self.min + steps * self.step).min(self.max)
    }

    /// Every reachable slider value, ascending.
    pub fn values(&self) -> impl Iterator<Item = u32> {
        let step = self.step.max(1) as usize;
        (self.min..=self.max).step_by(step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_reachable() {
        assert!(SHOP_PRICE_RANGE.contains(DEFAULT_MAX_PRICE));
        assert_eq!(SHOP_PRICE_RANGE.snap(DEFAULT_MAX_PRICE), DEFAULT_MAX_PRICE);
    }

    #[test]
    fn test_contains_bounds() {
        assert!(SHOP_PRICE_RANGE.contains(800));
        assert!(SHOP_PRICE_RANGE.contains(2100));
        assert!(!SHOP_PRICE_RANGE.contains(799));
        assert!(!SHOP_PRICE_RANGE.contains(2101));
    }

    #[test]
    fn test_snap_clamps() {
        assert_eq!(SHOP_PRICE_RANGE.snap(0), 800);
        assert_eq!(SHOP_PRICE_RANGE.snap(10_000), 2100);
    }

    #[test]
    fn test_snap_rounds_to_step() {
        assert_eq!(SHOP_PRICE_RANGE.snap(1249), 1200);
        assert_eq!(SHOP_PRICE_RANGE.snap(1250), 1300);
        assert_eq!(SHOP_PRICE_RANGE.snap(1300), 1300);
    }

    #[test]
    fn test_values() {
        let values: Vec<_> = SHOP_PRICE_RANGE.values().collect();
        assert_eq!(values.len(), 14);
        assert_eq!(values.first(), Some(&800));
        assert_eq!(values.last(), Some(&2100));
    }

    #[test]
    fn test_zero_step_only_clamps() {
        let range = PriceRange {
            min: 10,
            max: 20,
            step: 0,
        };
        assert_eq!(range.snap(15), 15);
        assert_eq!(range.snap(25), 20);
    }
}
