use crate::layout::Rect;
use crate::theme::Theme;

/// What a screen point lands on, resolved against the current surface
/// rectangle and row list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// Index into the visible row list.
    Row(usize),
    /// The trailing cancel row.
    Cancel,
    /// Inside the surface but on no row (the cancel gap, or space below a
    /// clipped list).
    Surface,
    /// Outside the surface entirely.
    Background,
}

/// Resolve a point against the menu surface.
///
/// Row bands stack from the surface top at the fixed row height; the cancel
/// band sits one gap below the last row. Points inside the surface that hit
/// no band resolve to `Surface` so taps on the gap do nothing.
pub fn hit_test(
    surface: Rect,
    row_count: usize,
    display_cancel: bool,
    theme: &Theme,
    x: f32,
    y: f32,
) -> HitTarget {
    if !surface.contains(x, y) {
        return HitTarget::Background;
    }

    let offset = y - surface.y;
    let index = (offset / theme.row_height).floor() as usize;
    if index < row_count {
        return HitTarget::Row(index);
    }

    if display_cancel {
        let cancel_top = row_count as f32 * theme.row_height + theme.cancel_gap;
        if offset >= cancel_top && offset < cancel_top + theme.row_height {
            return HitTarget::Cancel;
        }
    }

    HitTarget::Surface
}

/// Press/release pairing. A click fires only when the release resolves to
/// the same target the press did; dragging off a row cancels it.
#[derive(Debug, Default)]
pub struct PointerState {
    pressed: Option<HitTarget>,
}

impl PointerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_press(&mut self, target: HitTarget) {
        self.pressed = Some(target);
    }

    /// Returns the clicked target, if press and release agree.
    pub fn handle_release(&mut self, target: HitTarget) -> Option<HitTarget> {
        let pressed = self.pressed.take()?;
        (pressed == target).then_some(target)
    }

    /// Drop any in-flight press (e.g. when the menu starts dismissing).
    pub fn reset(&mut self) {
        self.pressed = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface() -> Rect {
        Rect {
            x: 20.0,
            y: 480.0,
            width: 360.0,
            height: 3.0 * 44.0 + 10.0 + 44.0, // 3 rows + gap + cancel
        }
    }

    #[test]
    fn rows_resolve_by_band() {
        let t = Theme::default();
        let s = surface();
        assert_eq!(hit_test(s, 3, true, &t, 100.0, 481.0), HitTarget::Row(0));
        assert_eq!(hit_test(s, 3, true, &t, 100.0, 480.0 + 45.0), HitTarget::Row(1));
        assert_eq!(hit_test(s, 3, true, &t, 100.0, 480.0 + 89.0), HitTarget::Row(2));
    }

    #[test]
    fn cancel_band_sits_below_gap() {
        let t = Theme::default();
        let s = surface();
        let gap_y = 480.0 + 3.0 * 44.0 + 5.0; // inside the gap
        assert_eq!(hit_test(s, 3, true, &t, 100.0, gap_y), HitTarget::Surface);

        let cancel_y = 480.0 + 3.0 * 44.0 + 10.0 + 20.0;
        assert_eq!(hit_test(s, 3, true, &t, 100.0, cancel_y), HitTarget::Cancel);
    }

    #[test]
    fn no_cancel_band_when_disabled() {
        let t = Theme::default();
        let s = surface();
        let cancel_y = 480.0 + 3.0 * 44.0 + 10.0 + 20.0;
        assert_eq!(hit_test(s, 3, false, &t, 100.0, cancel_y), HitTarget::Surface);
    }

    #[test]
    fn outside_surface_is_background() {
        let t = Theme::default();
        let s = surface();
        assert_eq!(hit_test(s, 3, true, &t, 10.0, 500.0), HitTarget::Background);
        assert_eq!(hit_test(s, 3, true, &t, 100.0, 10.0), HitTarget::Background);
    }

    #[test]
    fn click_requires_matching_press_and_release() {
        let mut pointer = PointerState::new();
        pointer.handle_press(HitTarget::Row(1));
        assert_eq!(
            pointer.handle_release(HitTarget::Row(1)),
            Some(HitTarget::Row(1))
        );

        // Release on a different row: no click.
        pointer.handle_press(HitTarget::Row(1));
        assert_eq!(pointer.handle_release(HitTarget::Row(2)), None);

        // Release without a press: no click.
        assert_eq!(pointer.handle_release(HitTarget::Row(1)), None);
    }

    #[test]
    fn reset_drops_in_flight_press() {
        let mut pointer = PointerState::new();
        pointer.handle_press(HitTarget::Cancel);
        pointer.reset();
        assert_eq!(pointer.handle_release(HitTarget::Cancel), None);
    }
}
