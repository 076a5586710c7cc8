//! Cell geometry for hit testing.
//!
//! Coordinates are zero-based and relative to the plugin pane, matching what
//! Zellij reports in mouse events: `line` counts rows from the top, `col`
//! counts cells from the left.

/// A single cell position in the pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub line: usize,
    pub col: usize,
}

impl Point {
    #[must_use]
    pub const fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

/// An axis-aligned rectangle of cells. Right and bottom edges are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub line: usize,
    pub col: usize,
    pub height: usize,
    pub width: usize,
}

impl Rect {
    #[must_use]
    pub const fn new(line: usize, col: usize, height: usize, width: usize) -> Self {
        Self {
            line,
            col,
            height,
            width,
        }
    }

    /// First line below the rectangle.
    #[must_use]
    pub const fn bottom(&self) -> usize {
        self.line + self.height
    }

    /// First column right of the rectangle.
    #[must_use]
    pub const fn right(&self) -> usize {
        self.col + self.width
    }

    #[must_use]
    pub const fn area(&self) -> usize {
        self.height * self.width
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.height == 0 || self.width == 0
    }

    /// Returns `true` if the point falls inside the rectangle.
    ///
    /// An empty rectangle contains nothing.
    #[must_use]
    pub const fn contains(&self, point: Point) -> bool {
        point.line >= self.line
            && point.line < self.bottom()
            && point.col >= self.col
            && point.col < self.right()
    }

    /// Smallest rectangle covering both. Empty rectangles are ignored.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }

        let line = self.line.min(other.line);
        let col = self.col.min(other.col);
        Self {
            line,
            col,
            height: self.bottom().max(other.bottom()) - line,
            width: self.right().max(other.right()) - col,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_uses_exclusive_edges() {
        let rect = Rect::new(2, 4, 3, 10);
        assert!(rect.contains(Point::new(2, 4)));
        assert!(rect.contains(Point::new(4, 13)));
        assert!(!rect.contains(Point::new(5, 4)));
        assert!(!rect.contains(Point::new(2, 14)));
        assert!(!rect.contains(Point::new(1, 5)));
    }

    #[test]
    fn empty_rect_contains_nothing() {
        assert!(!Rect::new(0, 0, 0, 5).contains(Point::new(0, 0)));
    }

    #[test]
    fn union_spans_both() {
        let a = Rect::new(1, 2, 3, 10);
        let b = Rect::new(4, 2, 5, 10);
        assert_eq!(a.union(&b), Rect::new(1, 2, 8, 10));
        assert_eq!(a.union(&Rect::default()), a);
    }
}
