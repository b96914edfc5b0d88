use std::collections::HashSet;
use std::time::{Duration, Instant};

use crate::draw::{self, DrawList};
use crate::input::{HitTarget, PointerState, hit_test};
use crate::layout::{self, Anchor, MenuLayout, Viewport};
use crate::model::{Entry, EntryId, MenuModel};
use crate::projection::{self, Row, RowList};
use crate::theme::Theme;
use crate::transition::{Easing, MenuFrame, Transition};

/// Presentation lifecycle. One controller drives one session: after
/// `Dismissed` it stays dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Unpresented,
    Appearing,
    Presented,
    Dismissing,
    Dismissed,
}

/// Cosmetic hint the host may read while the menu is up. The controller
/// never acts on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusBarStyle {
    Default,
    #[default]
    LightContent,
    DarkContent,
}

/// Callback fired once when an entrance or exit animation settles.
pub type Completion = Box<dyn FnOnce()>;

/// Modal action-sheet menu: owns the entry sequence and expansion set, and
/// binds pointer input to state transitions.
///
/// The controller is clock-driven: every time-dependent operation takes
/// `now: Instant` from the caller, and the host calls [`tick`] each frame to
/// let animations settle. Nothing here blocks or spawns threads.
///
/// ```
/// use std::time::Instant;
/// use platter::{Anchor, MenuController, MenuGroup, MenuItem, Viewport};
///
/// let mut menu = MenuController::new("Contact Support", Anchor::Center);
/// menu.add_action(MenuItem::new("Open web page").on_select(|menu, _| {
///     let now = Instant::now();
///     menu.dismiss(true, now, None);
/// }));
/// menu.add_action(MenuGroup::new(
///     "Contact tech. support",
///     vec![
///         MenuItem::new("tech.support@example.com"),
///         MenuItem::new("1-866-752-7753"),
///     ],
/// ));
///
/// let now = Instant::now();
/// menu.display(Viewport::new(414.0, 896.0), true, now, None);
/// menu.tick(now);
/// ```
///
/// [`tick`]: MenuController::tick
pub struct MenuController {
    title: String,
    anchor: Anchor,
    /// Adds a trailing cancel row when true.
    pub display_cancel: bool,
    /// Taps outside the list dismiss the menu when true.
    pub hide_on_background_tap: bool,
    pub status_bar_style: StatusBarStyle,

    theme: Theme,
    model: MenuModel,
    expanded: HashSet<EntryId>,
    rows: RowList,

    phase: Phase,
    viewport: Option<Viewport>,
    layout: Option<MenuLayout>,
    transition: Option<Transition>,
    completion: Option<Completion>,
    pointer: PointerState,
}

impl MenuController {
    pub fn new(title: impl Into<String>, anchor: Anchor) -> Self {
        Self {
            title: title.into(),
            anchor,
            display_cancel: true,
            hide_on_background_tap: true,
            status_bar_style: StatusBarStyle::default(),
            theme: Theme::default(),
            model: MenuModel::new(),
            expanded: HashSet::new(),
            rows: RowList::new(),
            phase: Phase::Unpresented,
            viewport: None,
            layout: None,
            transition: None,
            completion: None,
            pointer: PointerState::new(),
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    // ------------------------------------------------------------------
    // Building the menu
    // ------------------------------------------------------------------

    /// Append a menu item or group. Call order defines display order.
    pub fn add_action(&mut self, entry: impl Into<Entry>) -> EntryId {
        self.model.push(entry)
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// The currently projected row list.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn is_expanded(&self, id: EntryId) -> bool {
        self.expanded.contains(&id)
    }

    /// Height of the list surface for the current row list.
    pub fn content_height(&self) -> f32 {
        layout::content_height(self.rows.len(), self.display_cancel, &self.theme)
    }

    // ------------------------------------------------------------------
    // Appearance and disappearance
    // ------------------------------------------------------------------

    /// Present the menu on a host surface. Projects the row list, computes
    /// the entrance geometry, and starts the entrance animation. Only valid
    /// from the initial phase; later calls are ignored.
    pub fn display(
        &mut self,
        viewport: Viewport,
        animated: bool,
        now: Instant,
        completion: Option<Completion>,
    ) {
        if self.phase != Phase::Unpresented {
            log::trace!("display ignored in phase {:?}", self.phase);
            return;
        }

        self.rows = projection::project(&self.model, &self.expanded);
        let menu_layout = self.compute_layout(&viewport);
        let from = MenuFrame::new(menu_layout.initial, menu_layout.initial_opacity);
        let to = MenuFrame::new(menu_layout.settled, menu_layout.settled_opacity);

        self.viewport = Some(viewport);
        self.layout = Some(menu_layout);
        self.transition = Some(Transition::new(
            from,
            to,
            now,
            self.duration(animated),
            Easing::EaseOut,
        ));
        self.completion = completion;
        self.phase = Phase::Appearing;
        log::debug!(
            "displaying '{}' at {:?}: {} rows, content height {}",
            self.title,
            self.anchor,
            self.rows.len(),
            self.content_height(),
        );
    }

    /// Start the exit animation. Idempotent: requests while already
    /// dismissing or dismissed are ignored, so a rapid double-dismiss cannot
    /// re-enter the exit path.
    pub fn dismiss(&mut self, animated: bool, now: Instant, completion: Option<Completion>) {
        if !matches!(self.phase, Phase::Appearing | Phase::Presented) {
            log::trace!("dismiss ignored in phase {:?}", self.phase);
            return;
        }
        let Some(menu_layout) = self.layout else {
            return;
        };

        let from = self.current_frame(now);
        let to = MenuFrame::new(menu_layout.initial, menu_layout.initial_opacity);

        self.pointer.reset();
        self.transition = Some(Transition::new(
            from,
            to,
            now,
            self.duration(animated),
            Easing::EaseOut,
        ));
        self.completion = completion;
        self.phase = Phase::Dismissing;
        log::debug!("dismissing '{}'", self.title);
    }

    /// Advance animations. Call once per host frame; safe in any phase.
    /// Fires the stored completion when an entrance or exit settles.
    pub fn tick(&mut self, now: Instant) {
        let Some(transition) = self.transition else {
            return;
        };
        if !transition.is_finished(now) {
            return;
        }
        self.transition = None;

        match self.phase {
            Phase::Appearing => {
                self.phase = Phase::Presented;
                log::debug!("'{}' presented", self.title);
                if let Some(completion) = self.completion.take() {
                    completion();
                }
            }
            Phase::Dismissing => {
                self.phase = Phase::Dismissed;
                log::debug!("'{}' dismissed", self.title);
                if let Some(completion) = self.completion.take() {
                    completion();
                }
            }
            // A settled toggle animation leaves the phase alone.
            _ => {}
        }
    }

    /// The surface frame at `now`, or `None` when nothing is on screen.
    pub fn frame(&self, now: Instant) -> Option<MenuFrame> {
        match self.phase {
            Phase::Unpresented | Phase::Dismissed => None,
            _ => {
                if let Some(transition) = &self.transition {
                    Some(transition.sample(now))
                } else {
                    let menu_layout = self.layout?;
                    Some(MenuFrame::new(
                        menu_layout.settled,
                        menu_layout.settled_opacity,
                    ))
                }
            }
        }
    }

    /// Recompute geometry for a new host size. The expansion set and row
    /// order are untouched; the surface snaps to its new settled frame
    /// rather than animating across a rotation.
    pub fn rotate(&mut self, viewport: Viewport, now: Instant) {
        if !matches!(self.phase, Phase::Appearing | Phase::Presented) {
            log::trace!("rotate ignored in phase {:?}", self.phase);
            return;
        }

        let menu_layout = self.compute_layout(&viewport);
        let settled = MenuFrame::new(menu_layout.settled, menu_layout.settled_opacity);
        self.viewport = Some(viewport);
        self.layout = Some(menu_layout);
        self.transition = match self.phase {
            // Let the next tick complete the entrance and fire completion.
            Phase::Appearing => Some(Transition::immediate(settled, now)),
            _ => None,
        };
    }

    // ------------------------------------------------------------------
    // Interaction
    // ------------------------------------------------------------------

    /// Toggle a group open or closed. The row list is re-derived in full
    /// from the sequence and expansion set, so repeated rapid toggles can
    /// never leave the list out of sync. Non-groups, empty groups, and
    /// unknown ids are no-ops.
    pub fn toggle_group(&mut self, id: EntryId, now: Instant) {
        if self.phase != Phase::Presented {
            log::trace!("toggle ignored in phase {:?}", self.phase);
            return;
        }
        match self.model.get(id) {
            Some(Entry::Group(group)) if !group.is_empty() => {}
            _ => {
                log::trace!("toggle ignored: {:?} is not a toggleable group", id);
                return;
            }
        }

        if !self.expanded.remove(&id) {
            self.expanded.insert(id);
        }
        self.rows = projection::project(&self.model, &self.expanded);
        log::debug!(
            "group {:?} now {}, {} rows visible",
            id,
            if self.expanded.contains(&id) {
                "open"
            } else {
                "closed"
            },
            self.rows.len(),
        );

        // Content height changed: animate the surface to its new frame.
        let Some(viewport) = self.viewport else {
            return;
        };
        let from = self.current_frame(now);
        let menu_layout = self.compute_layout(&viewport);
        let to = MenuFrame::new(menu_layout.settled, menu_layout.settled_opacity);
        self.layout = Some(menu_layout);
        self.transition = Some(Transition::new(
            from,
            to,
            now,
            self.duration(true),
            Easing::EaseOut,
        ));
    }

    /// Select a top-level entry by id: items fire their handler, groups
    /// route to [`toggle_group`](Self::toggle_group). Unknown ids do
    /// nothing.
    pub fn select_entry(&mut self, id: EntryId, now: Instant) {
        if self.phase != Phase::Presented {
            log::trace!("select ignored in phase {:?}", self.phase);
            return;
        }
        match self.model.get(id) {
            Some(Entry::Item(item)) => {
                let item = item.clone();
                self.fire_handler(&item);
            }
            Some(Entry::Group(_)) => self.toggle_group(id, now),
            None => log::trace!("select ignored: unknown entry {:?}", id),
        }
    }

    /// Select a visible row by index. Items and group children fire their
    /// handlers; group headers toggle.
    pub fn select_row(&mut self, index: usize, now: Instant) {
        if self.phase != Phase::Presented {
            log::trace!("select ignored in phase {:?}", self.phase);
            return;
        }
        let Some(row) = self.rows.get(index).copied() else {
            log::trace!("select ignored: row {} out of range", index);
            return;
        };
        match row {
            Row::Group { id, .. } => self.toggle_group(id, now),
            _ => {
                let Some(item) = projection::row_item(&self.model, row).cloned() else {
                    return;
                };
                self.fire_handler(&item);
            }
        }
    }

    /// Tap on the trailing cancel row: starts an animated dismissal.
    pub fn press_cancel(&mut self, now: Instant) {
        self.dismiss(true, now, None);
    }

    /// Tap outside the list surface. Dismisses only when
    /// `hide_on_background_tap` is set.
    pub fn tap_background(&mut self, now: Instant) {
        if self.hide_on_background_tap {
            self.dismiss(true, now, None);
        } else {
            log::trace!("background tap ignored: hide_on_background_tap is off");
        }
    }

    /// Pointer-down from the host, in container coordinates.
    pub fn pointer_pressed(&mut self, x: f32, y: f32, now: Instant) {
        if self.phase != Phase::Presented {
            return;
        }
        let target = self.hit(x, y, now);
        self.pointer.handle_press(target);
    }

    /// Pointer-up from the host. A press/release pair on the same target
    /// becomes a tap and dispatches.
    pub fn pointer_released(&mut self, x: f32, y: f32, now: Instant) {
        if self.phase != Phase::Presented {
            self.pointer.reset();
            return;
        }
        let target = self.hit(x, y, now);
        let Some(clicked) = self.pointer.handle_release(target) else {
            return;
        };
        match clicked {
            HitTarget::Row(index) => self.select_row(index, now),
            HitTarget::Cancel => self.press_cancel(now),
            HitTarget::Background => self.tap_background(now),
            HitTarget::Surface => {}
        }
    }

    // ------------------------------------------------------------------
    // Drawing
    // ------------------------------------------------------------------

    /// Emit draw commands for the current frame into `dl`. Emits nothing
    /// before display or after dismissal.
    pub fn draw(&self, dl: &mut DrawList, now: Instant) {
        let Some(frame) = self.frame(now) else {
            return;
        };
        draw::render_menu(
            dl,
            &self.model,
            &self.rows,
            self.display_cancel,
            frame,
            &self.theme,
        );
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn compute_layout(&self, viewport: &Viewport) -> MenuLayout {
        let height = layout::content_height(self.rows.len(), self.display_cancel, &self.theme);
        layout::compute(self.anchor, viewport, height, &self.theme)
    }

    fn duration(&self, animated: bool) -> Duration {
        if animated {
            Duration::from_millis(self.theme.animation_ms)
        } else {
            Duration::ZERO
        }
    }

    /// Frame the surface occupies right now, falling back to the settled
    /// frame when no transition is running.
    fn current_frame(&self, now: Instant) -> MenuFrame {
        if let Some(transition) = &self.transition {
            return transition.sample(now);
        }
        match self.layout {
            Some(l) => MenuFrame::new(l.settled, l.settled_opacity),
            None => MenuFrame::new(crate::layout::Rect::default(), 0.0),
        }
    }

    fn hit(&self, x: f32, y: f32, now: Instant) -> HitTarget {
        hit_test(
            self.current_frame(now).rect,
            self.rows.len(),
            self.display_cancel,
            &self.theme,
            x,
            y,
        )
    }

    fn fire_handler(&mut self, item: &crate::model::MenuItem) {
        match item.handler() {
            Some(handler) => handler(self, item),
            None => log::trace!("item '{}' has no handler", item.title()),
        }
    }
}
