//! Previous/next/page-number controls for paginated lists.

use std::ops::RangeInclusive;

use api::PageMeta;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageControls {
    current: u32,
    total: u32,
}

impl PageControls {
    /// Clamp `current` into `1..=total`; a total of zero counts as one page.
    pub fn new(current: u32, total: u32) -> Self {
        let total = total.max(1);
        Self {
            current: current.clamp(1, total),
            total,
        }
    }

    pub fn from_meta(meta: &PageMeta) -> Self {
        Self::new(meta.current(), meta.total())
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total
    }

    pub fn previous(&self) -> Option<u32> {
        self.has_previous().then(|| self.current - 1)
    }

    pub fn next(&self) -> Option<u32> {
        self.has_next().then(|| self.current + 1)
    }

    pub fn pages(&self) -> RangeInclusive<u32> {
        1..=self.total
    }

    /// Single-page lists show no controls.
    pub fn is_visible(&self) -> bool {
        self.total > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_middle_page_enables_both() {
        for total in 3..8 {
            for current in 2..total {
                let controls = PageControls::new(current, total);
                assert!(controls.has_previous(), "{current}/{total}");
                assert!(controls.has_next(), "{current}/{total}");
            }
        }
    }

    #[test]
    fn test_first_and_last_page() {
        let first = PageControls::new(1, 5);
        assert!(!first.has_previous());
        assert_eq!(first.previous(), None);
        assert_eq!(first.next(), Some(2));

        let last = PageControls::new(5, 5);
        assert!(!last.has_next());
        assert_eq!(last.next(), None);
        assert_eq!(last.previous(), Some(4));
    }

    #[test]
    fn test_out_of_range_input_is_clamped() {
        let empty = PageControls::new(0, 0);
        assert_eq!((empty.current(), empty.total()), (1, 1));
        assert!(!empty.is_visible());
        assert!(!empty.has_previous() && !empty.has_next());

        assert_eq!(PageControls::new(9, 3).current(), 3);
    }

    #[test]
    fn test_from_meta() {
        let meta = PageMeta {
            current_page: 2,
            total_pages: 4,
            total_items: 22,
            items_per_page: 6,
        };
        let controls = PageControls::from_meta(&meta);
        assert_eq!(controls.pages().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert!(controls.is_visible());

        let missing = PageControls::from_meta(&PageMeta::default());
        assert_eq!(missing.current(), 1);
    }
}
