use carousel::CarouselEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn right(&self) -> u16 {
        self.x + self.width
    }

    pub const fn bottom(&self) -> u16 {
        self.y + self.height
    }

    pub fn shrink(self, top: u16, right: u16, bottom: u16, left: u16) -> Self {
        Self {
            x: self.x.saturating_add(left),
            y: self.y.saturating_add(top),
            width: self.width.saturating_sub(left + right),
            height: self.height.saturating_sub(top + bottom),
        }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// Width of the prev/next buttons, in cells.
const BUTTON_WIDTH: u16 = 3;
/// Cells between indicator dots.
const DOT_SPACING: u16 = 2;

/// Screen regions for one frame.
#[derive(Debug, Clone, Default)]
pub struct Layout {
    pub title: Rect,
    pub frame: Rect,
    pub viewport: Rect,
    pub caption: Rect,
    pub prev: Option<Rect>,
    pub next: Option<Rect>,
    pub dots: Vec<Rect>,
    pub indicator: Option<Rect>,
}

impl Layout {
    pub fn compute(width: u16, height: u16, total: usize, controls: bool) -> Self {
        let screen = Rect::new(0, 0, width, height);
        let title = Rect::new(2, 0, width.saturating_sub(4), 1);
        let frame = screen.shrink(2, 2, 2, 2);
        let viewport = frame.shrink(1, 1, 1, 1);
        let caption = Rect::new(frame.x, frame.bottom(), frame.width, 1);

        let mut layout = Self {
            title,
            frame,
            viewport,
            caption,
            ..Default::default()
        };

        if !controls || viewport.width < BUTTON_WIDTH * 2 + 2 || viewport.height < 3 {
            return layout;
        }

        let mid = viewport.y + viewport.height / 2;
        layout.prev = Some(Rect::new(viewport.x + 1, mid, BUTTON_WIDTH, 1));
        layout.next = Some(Rect::new(
            viewport.right() - BUTTON_WIDTH - 1,
            mid,
            BUTTON_WIDTH,
            1,
        ));

        let row = viewport.bottom() - 1;
        layout.dots = (0..total as u16)
            .map(|i| Rect::new(viewport.x + 2 + i * DOT_SPACING, row, 1, 1))
            .take_while(|dot| dot.right() < viewport.right())
            .collect();

        let indicator_width =
            (format!("{} / {}", total, total).len() as u16 + 2).min(viewport.width);
        layout.indicator = Some(Rect::new(
            viewport.right() - indicator_width - 1,
            row,
            indicator_width,
            1,
        ));

        layout
    }

    /// The control event for a click at `(x, y)`, if it lands on one.
    pub fn hit(&self, x: u16, y: u16) -> Option<CarouselEvent> {
        if self.prev.is_some_and(|r| r.contains(x, y)) {
            return Some(CarouselEvent::Prev);
        }
        if self.next.is_some_and(|r| r.contains(x, y)) {
            return Some(CarouselEvent::Next);
        }
        self.dot_at(x, y).map(CarouselEvent::Dot)
    }

    /// Index of the indicator dot at `(x, y)`.
    pub fn dot_at(&self, x: u16, y: u16) -> Option<usize> {
        self.dots.iter().position(|dot| dot.contains(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_controls_hit_test() {
        let layout = Layout::compute(80, 24, 4, true);
        let prev = layout.prev.unwrap();
        let next = layout.next.unwrap();

        assert_eq!(layout.hit(prev.x, prev.y), Some(CarouselEvent::Prev));
        assert_eq!(layout.hit(next.x + 1, next.y), Some(CarouselEvent::Next));
        assert_eq!(layout.dots.len(), 4);

        let third = layout.dots[2];
        assert_eq!(layout.hit(third.x, third.y), Some(CarouselEvent::Dot(2)));
        assert_eq!(layout.dot_at(third.x, third.y), Some(2));
        assert_eq!(layout.dot_at(third.x + 1, third.y), None);
        assert_eq!(layout.hit(layout.viewport.x + 20, layout.viewport.y + 1), None);
    }

    #[test]
    fn test_single_item_has_no_controls() {
        let layout = Layout::compute(80, 24, 1, false);
        assert!(layout.prev.is_none());
        assert!(layout.dots.is_empty());
        assert!(layout.indicator.is_none());
        assert_eq!(layout.viewport, Rect::new(3, 3, 74, 18));
    }

    #[test]
    fn test_tiny_screen_drops_controls() {
        let layout = Layout::compute(8, 5, 3, true);
        assert!(layout.prev.is_none());
        assert!(layout.hit(0, 0).is_none());
    }
}
