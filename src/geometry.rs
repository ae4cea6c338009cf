/// Terminal frame measured in character cells, sampled once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Panel rectangle expressed as edge coordinates.
///
/// `x0`/`y0` is the top-left edge and `x1`/`y1` the bottom-right edge, both
/// inclusive. Coordinates are signed because frameless strip zones may start
/// one column left of the screen or end one row below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Rect {
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Rectangle spanning `height` rows directly beneath `above`, sharing its
    /// horizontal extent.
    pub fn beneath(above: Rect, height: i32) -> Self {
        let y0 = above.y1 + 1;
        Self::new(above.x0, y0, above.x1, y0 + height - 1)
    }

    /// Rows covered, borders included.
    pub fn height(&self) -> i32 {
        self.y1 - self.y0 + 1
    }

    /// Content rows between the top and bottom border.
    pub fn inner_height(&self) -> usize {
        (self.y1 - self.y0 - 1).max(0) as usize
    }

    pub fn within(&self, frame: Size) -> bool {
        self.x0 >= 0
            && self.y0 >= 0
            && self.x1 < i32::from(frame.width)
            && self.y1 < i32::from(frame.height)
    }

    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x0 <= other.x1 && other.x0 <= self.x1 && self.y0 <= other.y1 && other.y0 <= self.y1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn beneath_stacks_without_gap() {
        let top = Rect::new(0, 0, 10, 2);
        let next = Rect::beneath(top, 5);
        assert_eq!(next, Rect::new(0, 3, 10, 7));
        assert_eq!(next.height(), 5);
        assert!(!top.overlaps(&next));
    }

    #[test]
    fn inner_height_never_negative() {
        assert_eq!(Rect::new(0, 4, 3, 4).inner_height(), 0);
        assert_eq!(Rect::new(0, 0, 3, 9).inner_height(), 8);
    }

    #[test]
    fn within_checks_frame_edges() {
        let frame = Size::new(20, 10);
        assert!(Rect::new(0, 0, 19, 9).within(frame));
        assert!(!Rect::new(-1, 8, 4, 10).within(frame));
    }
}
