use std::collections::HashSet;

use smallvec::SmallVec;

use crate::model::{Entry, EntryId, MenuItem, MenuModel};

/// One rendered row of the menu. Child rows reference their parent group by
/// id plus an index into its action list, so a row never outlives or clones
/// model data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row {
    /// Top-level menu item.
    Item(EntryId),
    /// Group header. `expanded` reflects membership in the expansion set at
    /// projection time and drives header styling.
    Group { id: EntryId, expanded: bool },
    /// Child of an expanded group.
    Child { group: EntryId, index: usize },
}

/// Rows fit inline for typical menus; longer lists spill to the heap.
pub type RowList = SmallVec<[Row; 8]>;

/// Derive the visible row list from the top-level sequence and the expansion
/// set. Pure: same inputs, same output; neither argument is mutated.
///
/// Each top-level entry appears exactly once in sequence order. Immediately
/// after a group whose id is in `expanded`, its children follow in internal
/// order. Collapsed groups contribute no child rows. Ids missing from the
/// arena are skipped.
pub fn project(model: &MenuModel, expanded: &HashSet<EntryId>) -> RowList {
    let mut rows = RowList::new();

    for id in model.ids() {
        match model.get(id) {
            Some(Entry::Item(_)) => rows.push(Row::Item(id)),
            Some(Entry::Group(group)) => {
                let is_open = expanded.contains(&id);
                rows.push(Row::Group {
                    id,
                    expanded: is_open,
                });
                if is_open {
                    for index in 0..group.len() {
                        rows.push(Row::Child { group: id, index });
                    }
                }
            }
            None => {}
        }
    }

    rows
}

/// Resolve the item a row refers to, if it refers to one. Group headers
/// resolve to `None`; so do stale ids.
pub fn row_item<'a>(model: &'a MenuModel, row: Row) -> Option<&'a MenuItem> {
    match row {
        Row::Item(id) => match model.get(id)? {
            Entry::Item(item) => Some(item),
            Entry::Group(_) => None,
        },
        Row::Child { group, index } => match model.get(group)? {
            Entry::Group(g) => g.actions().get(index),
            Entry::Item(_) => None,
        },
        Row::Group { .. } => None,
    }
}
