use std::fmt;
use std::rc::Rc;

use slotmap::{SlotMap, new_key_type};

use crate::controller::MenuController;

new_key_type! {
    /// Handle into the entry arena. The key doubles as the stable identity
    /// the expansion set tracks, so two groups with equal titles stay
    /// distinguishable.
    pub struct EntryId;
}

/// Text alignment inside a menu row. The icon follows the text: right-aligned
/// rows carry their icon on the right, everything else on the left.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Alignment {
    Left,
    #[default]
    Center,
    Right,
}

/// Opaque icon handle. The crate never decodes image data; the host renderer
/// resolves the name against whatever asset store it owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon(pub String);

impl Icon {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

/// Callback invoked when a menu item row is tapped. Receives the owning
/// controller so the handler can request dismissal itself; dismissal is
/// never automatic.
pub type SelectionHandler = dyn Fn(&mut MenuController, &MenuItem);

/// A single selectable menu row. Immutable after construction.
#[derive(Clone)]
pub struct MenuItem {
    title: String,
    icon: Option<Icon>,
    alignment: Alignment,
    handler: Option<Rc<SelectionHandler>>,
}

impl MenuItem {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            icon: None,
            alignment: Alignment::default(),
            handler: None,
        }
    }

    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn on_select(mut self, handler: impl Fn(&mut MenuController, &MenuItem) + 'static) -> Self {
        self.handler = Some(Rc::new(handler));
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn icon(&self) -> Option<&Icon> {
        self.icon.as_ref()
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    pub(crate) fn handler(&self) -> Option<Rc<SelectionHandler>> {
        self.handler.clone()
    }
}

impl fmt::Debug for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuItem")
            .field("title", &self.title)
            .field("icon", &self.icon)
            .field("alignment", &self.alignment)
            .field("handler", &self.handler.is_some())
            .finish()
    }
}

/// A titled, collapsible collection of menu items. The child list is fixed
/// at creation; an empty group is representable but contributes no child
/// rows and toggling it is a no-op.
#[derive(Debug, Clone)]
pub struct MenuGroup {
    title: String,
    icon: Option<Icon>,
    alignment: Alignment,
    actions: Vec<MenuItem>,
}

impl MenuGroup {
    pub fn new(title: impl Into<String>, actions: Vec<MenuItem>) -> Self {
        Self {
            title: title.into(),
            icon: None,
            alignment: Alignment::default(),
            actions,
        }
    }

    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn icon(&self) -> Option<&Icon> {
        self.icon.as_ref()
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    pub fn actions(&self) -> &[MenuItem] {
        &self.actions
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

/// Tagged union over the two top-level entry kinds.
#[derive(Debug, Clone)]
pub enum Entry {
    Item(MenuItem),
    Group(MenuGroup),
}

impl Entry {
    pub fn title(&self) -> &str {
        match self {
            Entry::Item(item) => item.title(),
            Entry::Group(group) => group.title(),
        }
    }

    pub fn icon(&self) -> Option<&Icon> {
        match self {
            Entry::Item(item) => item.icon(),
            Entry::Group(group) => group.icon(),
        }
    }

    pub fn alignment(&self) -> Alignment {
        match self {
            Entry::Item(item) => item.alignment(),
            Entry::Group(group) => group.alignment(),
        }
    }
}

impl From<MenuItem> for Entry {
    fn from(item: MenuItem) -> Self {
        Entry::Item(item)
    }
}

impl From<MenuGroup> for Entry {
    fn from(group: MenuGroup) -> Self {
        Entry::Group(group)
    }
}

/// Append-only top-level entry sequence. Insertion order defines display
/// order; there is no removal or reordering API.
#[derive(Debug, Default)]
pub struct MenuModel {
    entries: SlotMap<EntryId, Entry>,
    order: Vec<EntryId>,
}

impl MenuModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, returning its stable id.
    pub fn push(&mut self, entry: impl Into<Entry>) -> EntryId {
        let id = self.entries.insert(entry.into());
        self.order.push(id);
        id
    }

    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.entries.get(id)
    }

    /// Top-level ids in display order.
    pub fn ids(&self) -> impl Iterator<Item = EntryId> + '_ {
        self.order.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
