//! Hit map describing where interactive parts of the menu were drawn.
//!
//! The view model records one [`HitRegion`] per clickable element together
//! with the overall controller bounds. After rendering, the plugin keeps the
//! map so a mouse click can be turned back into the element it landed on.
//!
//! Regions may nest: a badge's remove button sits inside the trigger.
//! [`HitMap::resolve`] returns the smallest region containing the point, so a
//! click on the remove button never also reaches the trigger.

use crate::domain::{Point, Rect};

/// What a click on a region means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HitTarget {
    /// The trigger button that opens and closes the menu.
    Trigger,
    /// The remove button of the badge for this choice id.
    RemoveBadge(String),
    /// The search input inside the open menu.
    SearchBar,
    /// A visible list item for this choice id.
    Item(String),
}

/// A clickable rectangle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitRegion {
    pub rect: Rect,
    pub target: HitTarget,
}

/// All clickable regions of one rendered frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitMap {
    /// Everything the controller drew: label, trigger and, when open, the menu.
    pub bounds: Rect,
    pub regions: Vec<HitRegion>,
}

impl HitMap {
    /// Adds a region and grows the bounds to include it.
    pub fn push(&mut self, rect: Rect, target: HitTarget) {
        if rect.is_empty() {
            return;
        }
        self.bounds = self.bounds.union(&rect);
        self.regions.push(HitRegion { rect, target });
    }

    /// Grows the bounds without adding a clickable region.
    pub fn include(&mut self, rect: Rect) {
        self.bounds = self.bounds.union(&rect);
    }

    /// Returns `true` if the point lies within the controller's drawn area.
    #[must_use]
    pub const fn contains(&self, point: Point) -> bool {
        self.bounds.contains(point)
    }

    /// Most specific target under the point, if any.
    #[must_use]
    pub fn resolve(&self, point: Point) -> Option<&HitTarget> {
        self.regions
            .iter()
            .filter(|region| region.rect.contains(point))
            .min_by_key(|region| region.rect.area())
            .map(|region| &region.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_region_wins() {
        let mut map = HitMap::default();
        map.push(Rect::new(2, 2, 3, 40), HitTarget::Trigger);
        map.push(Rect::new(3, 12, 1, 1), HitTarget::RemoveBadge("sketch".into()));

        assert_eq!(
            map.resolve(Point::new(3, 12)),
            Some(&HitTarget::RemoveBadge("sketch".into()))
        );
        assert_eq!(map.resolve(Point::new(3, 11)), Some(&HitTarget::Trigger));
    }

    #[test]
    fn bounds_cover_included_rects() {
        let mut map = HitMap::default();
        map.include(Rect::new(1, 2, 1, 40));
        map.push(Rect::new(2, 2, 3, 40), HitTarget::Trigger);

        assert!(map.contains(Point::new(1, 5)));
        assert_eq!(map.resolve(Point::new(1, 5)), None);
        assert!(!map.contains(Point::new(5, 5)));
    }

    #[test]
    fn empty_rects_are_ignored() {
        let mut map = HitMap::default();
        map.push(Rect::new(0, 0, 0, 10), HitTarget::SearchBar);
        assert!(map.regions.is_empty());
        assert!(map.bounds.is_empty());
    }
}
