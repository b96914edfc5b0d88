use crate::theme::Theme;

// ---------------------------------------------------------------------------
// Geometry primitives
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Returns true if the point (px, py) is inside this rectangle.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    /// Same rectangle translated by (dx, dy).
    pub fn offset(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }
}

/// Safe-area edges in CSS order: top, right, bottom, left.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Insets {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Insets {
    pub const ZERO: Self = Self {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };

    pub fn all(v: f32) -> Self {
        Self {
            top: v,
            right: v,
            bottom: v,
            left: v,
        }
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

// ---------------------------------------------------------------------------
// Host description
// ---------------------------------------------------------------------------

/// Where the menu settles on screen. Each anchor has its own entrance:
/// top slides down, bottom slides up, center fades in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Anchor {
    Top,
    Center,
    #[default]
    Bottom,
}

/// Width class of the hosting screen. Regular-class hosts (tablets) get a
/// centered half-width column; compact hosts use the full width minus the
/// side margin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeviceClass {
    #[default]
    Compact,
    Regular,
}

/// Everything the layout engine needs to know about the host surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub size: Size,
    pub safe_area: Insets,
    pub device: DeviceClass,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Size::new(width, height),
            safe_area: Insets::ZERO,
            device: DeviceClass::default(),
        }
    }

    pub fn with_safe_area(mut self, safe_area: Insets) -> Self {
        self.safe_area = safe_area;
        self
    }

    pub fn with_device(mut self, device: DeviceClass) -> Self {
        self.device = device;
        self
    }
}

// ---------------------------------------------------------------------------
// Layout engine
// ---------------------------------------------------------------------------

/// Settled and pre-animation rectangles for one menu presentation.
///
/// The initial rectangle is the settled one pushed off-screen by the content
/// height (top/bottom anchors) or left in place with zero opacity (center).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuLayout {
    pub settled: Rect,
    pub initial: Rect,
    pub settled_opacity: f32,
    pub initial_opacity: f32,
}

/// Fixed height of the list surface for a given row count.
pub fn content_height(row_count: usize, display_cancel: bool, theme: &Theme) -> f32 {
    let rows = row_count as f32 * theme.row_height;
    if display_cancel {
        rows + theme.row_height + theme.cancel_gap
    } else {
        rows
    }
}

/// Compute the menu surface geometry for one anchor and viewport.
///
/// Derives everything from the current viewport, never from a previous
/// frame, so recomputing on rotation is idempotent. All vertical positions
/// clamp to a non-negative floor: an over-tall menu pins to the top edge
/// instead of producing a rectangle outside the container.
pub fn compute(anchor: Anchor, viewport: &Viewport, content_height: f32, theme: &Theme) -> MenuLayout {
    let margin = theme.side_margin;
    let size = viewport.size;
    let safe = viewport.safe_area;

    let inset_x = match viewport.device {
        DeviceClass::Compact => margin,
        // Centered half-width column, never narrower than the side margin.
        DeviceClass::Regular => (size.width / 4.0).max(margin),
    };
    let width = (size.width - inset_x * 2.0).max(0.0);

    let usable = (size.height - margin * 2.0 - safe.vertical()).max(0.0);
    let height = content_height.min(usable);

    let y = match anchor {
        Anchor::Top => margin + safe.top,
        Anchor::Bottom => (size.height - margin - safe.bottom - height).max(0.0),
        Anchor::Center => {
            (safe.top + (size.height - safe.vertical() - height) / 2.0).max(0.0)
        }
    };

    let settled = Rect {
        x: inset_x,
        y,
        width,
        height,
    };

    let (initial, initial_opacity) = match anchor {
        Anchor::Top => (settled.offset(0.0, -height), 1.0),
        Anchor::Bottom => (settled.offset(0.0, height), 1.0),
        Anchor::Center => (settled, 0.0),
    };

    MenuLayout {
        settled,
        initial,
        settled_opacity: 1.0,
        initial_opacity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theme() -> Theme {
        Theme::default()
    }

    #[test]
    fn content_height_without_cancel() {
        let t = theme();
        assert!((content_height(3, false, &t) - 3.0 * 44.0).abs() < 1e-4);
        assert!((content_height(0, false, &t)).abs() < 1e-4);
    }

    #[test]
    fn content_height_adds_cancel_row_and_gap() {
        let t = theme();
        // 2 rows at 44 plus the cancel row plus the gap.
        let expected = 2.0 * 44.0 + 44.0 + t.cancel_gap;
        assert!((content_height(2, true, &t) - expected).abs() < 1e-4);
    }

    #[test]
    fn bottom_anchor_settles_above_bottom_margin() {
        let t = theme();
        let viewport = Viewport::new(400.0, 800.0);
        // Container 800, content 300, margin 20: settled y = 800 - 20 - 300.
        let layout = compute(Anchor::Bottom, &viewport, 300.0, &t);
        assert!((layout.settled.y - 480.0).abs() < 1e-4);
        // Initial frame sits one content-height lower, off-screen below.
        assert!((layout.initial.y - 780.0).abs() < 1e-4);
        assert!((layout.initial_opacity - 1.0).abs() < 1e-6);
    }

    #[test]
    fn top_anchor_honors_safe_area() {
        let t = theme();
        let viewport = Viewport::new(400.0, 800.0).with_safe_area(Insets {
            top: 47.0,
            ..Insets::ZERO
        });
        let layout = compute(Anchor::Top, &viewport, 200.0, &t);
        assert!((layout.settled.y - (20.0 + 47.0)).abs() < 1e-4);
        // Entrance slides down from above.
        assert!((layout.initial.y - (67.0 - 200.0)).abs() < 1e-4);
    }

    #[test]
    fn center_anchor_fades_in_place() {
        let t = theme();
        let viewport = Viewport::new(400.0, 800.0);
        let layout = compute(Anchor::Center, &viewport, 300.0, &t);
        assert!((layout.settled.y - 250.0).abs() < 1e-4);
        assert_eq!(layout.initial, layout.settled);
        assert!(layout.initial_opacity.abs() < 1e-6);
        assert!((layout.settled_opacity - 1.0).abs() < 1e-6);
    }

    #[test]
    fn compact_device_uses_side_margin() {
        let t = theme();
        let viewport = Viewport::new(400.0, 800.0);
        let layout = compute(Anchor::Bottom, &viewport, 100.0, &t);
        assert!((layout.settled.x - 20.0).abs() < 1e-4);
        assert!((layout.settled.width - 360.0).abs() < 1e-4);
    }

    #[test]
    fn regular_device_centers_half_width_column() {
        let t = theme();
        let viewport = Viewport::new(1024.0, 768.0).with_device(DeviceClass::Regular);
        let layout = compute(Anchor::Bottom, &viewport, 100.0, &t);
        assert!((layout.settled.x - 256.0).abs() < 1e-4);
        assert!((layout.settled.width - 512.0).abs() < 1e-4);
    }

    #[test]
    fn uniform_safe_area_offsets_every_anchor() {
        let t = theme();
        let viewport = Viewport::new(400.0, 800.0).with_safe_area(Insets::all(10.0));

        let top = compute(Anchor::Top, &viewport, 200.0, &t);
        assert!((top.settled.y - 30.0).abs() < 1e-4);

        let bottom = compute(Anchor::Bottom, &viewport, 200.0, &t);
        assert!((bottom.settled.y - (800.0 - 20.0 - 10.0 - 200.0)).abs() < 1e-4);

        let center = compute(Anchor::Center, &viewport, 200.0, &t);
        assert!((center.settled.y - (10.0 + (800.0 - 20.0 - 200.0) / 2.0)).abs() < 1e-4);
    }

    #[test]
    fn over_tall_content_never_goes_negative() {
        let t = theme();
        let viewport = Viewport::new(400.0, 200.0);
        for anchor in [Anchor::Top, Anchor::Center, Anchor::Bottom] {
            let layout = compute(anchor, &viewport, 900.0, &t);
            assert!(layout.settled.y >= 0.0, "{anchor:?} settled y went negative");
            assert!(layout.settled.height <= viewport.size.height);
        }
    }

    #[test]
    fn recompute_is_idempotent() {
        let t = theme();
        let viewport = Viewport::new(414.0, 896.0).with_safe_area(Insets {
            top: 44.0,
            bottom: 34.0,
            ..Insets::ZERO
        });
        let first = compute(Anchor::Bottom, &viewport, 320.0, &t);
        let second = compute(Anchor::Bottom, &viewport, 320.0, &t);
        assert_eq!(first, second);
    }

    #[test]
    fn zero_height_content_keeps_valid_rect() {
        let t = theme();
        let viewport = Viewport::new(400.0, 800.0);
        let layout = compute(Anchor::Bottom, &viewport, 0.0, &t);
        assert!((layout.settled.height).abs() < 1e-6);
        assert_eq!(layout.initial, layout.settled);
    }
}
