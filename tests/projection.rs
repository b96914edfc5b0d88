//! Projection invariant tests.
//!
//! Exercise the visible-list projector as a pure function of the top-level
//! sequence and expansion set, independent of any controller: determinism,
//! toggle round-trips, group containment, and the content-height coupling.

use std::collections::HashSet;

use platter::layout::content_height;
use platter::model::{EntryId, MenuGroup, MenuItem, MenuModel};
use platter::projection::{Row, project, row_item};
use platter::theme::Theme;

/// Build a mixed sequence: item, group, item, group, item.
fn mixed_model() -> (MenuModel, Vec<EntryId>) {
    let mut model = MenuModel::new();
    let ids = vec![
        model.push(MenuItem::new("ActionA")),
        model.push(MenuGroup::new(
            "GroupB",
            vec![MenuItem::new("B1"), MenuItem::new("B2")],
        )),
        model.push(MenuItem::new("ActionC")),
        model.push(MenuGroup::new(
            "GroupD",
            vec![
                MenuItem::new("D1"),
                MenuItem::new("D2"),
                MenuItem::new("D3"),
            ],
        )),
        model.push(MenuItem::new("ActionE")),
    ];
    (model, ids)
}

/// Child count of the group with the given id, zero for items.
fn child_count(model: &MenuModel, id: EntryId) -> usize {
    match model.get(id) {
        Some(platter::model::Entry::Group(g)) => g.len(),
        _ => 0,
    }
}

#[test]
fn projection_is_pure_over_every_expansion_subset() {
    let (model, ids) = mixed_model();
    let groups = [ids[1], ids[3]];

    // All four subsets of {GroupB, GroupD}.
    for mask in 0..4u8 {
        let mut expanded = HashSet::new();
        for (bit, id) in groups.iter().enumerate() {
            if mask & (1 << bit) != 0 {
                expanded.insert(*id);
            }
        }
        let first = project(&model, &expanded);
        let second = project(&model, &expanded);
        assert_eq!(first, second, "mask {mask} projected differently twice");
    }
}

#[test]
fn top_level_entries_appear_exactly_once_in_order() {
    let (model, ids) = mixed_model();
    let expanded = HashSet::from([ids[1], ids[3]]);
    let rows = project(&model, &expanded);

    let top_level: Vec<EntryId> = rows
        .iter()
        .filter_map(|row| match row {
            Row::Item(id) => Some(*id),
            Row::Group { id, .. } => Some(*id),
            Row::Child { .. } => None,
        })
        .collect();
    assert_eq!(top_level, ids);
}

#[test]
fn expanded_groups_are_followed_by_exactly_their_children() {
    let (model, ids) = mixed_model();
    let expanded = HashSet::from([ids[1], ids[3]]);
    let rows = project(&model, &expanded);

    for (i, row) in rows.iter().enumerate() {
        let Row::Group { id, expanded: open } = row else {
            continue;
        };
        assert!(*open, "group in the expansion set projected as closed");
        let n = child_count(&model, *id);
        for k in 0..n {
            assert_eq!(
                rows[i + 1 + k],
                Row::Child {
                    group: *id,
                    index: k
                },
                "child {k} of group {id:?} out of place"
            );
        }
        // The entry after the last child is not a child of this group.
        if let Some(Row::Child { group, .. }) = rows.get(i + 1 + n) {
            assert_ne!(group, id);
        }
    }
}

#[test]
fn collapsed_groups_contribute_no_children() {
    let (model, _) = mixed_model();
    let rows = project(&model, &HashSet::new());
    assert_eq!(rows.len(), 5);
    assert!(
        rows.iter()
            .all(|row| !matches!(row, Row::Child { .. })),
        "collapsed projection contained child rows"
    );
}

#[test]
fn toggle_round_trip_restores_prior_list() {
    let (model, ids) = mixed_model();
    let group = ids[3];

    let mut expanded = HashSet::new();
    let before = project(&model, &expanded);

    expanded.insert(group);
    let open = project(&model, &expanded);
    assert_eq!(open.len(), before.len() + child_count(&model, group));

    expanded.remove(&group);
    let after = project(&model, &expanded);
    assert_eq!(before, after);
}

#[test]
fn mixed_sequence_toggle_walkthrough() {
    // [ActionA, GroupB(B1, B2), ActionC], everything collapsed to start.
    let mut model = MenuModel::new();
    let a = model.push(MenuItem::new("ActionA"));
    let b = model.push(MenuGroup::new(
        "GroupB",
        vec![MenuItem::new("B1"), MenuItem::new("B2")],
    ));
    let c = model.push(MenuItem::new("ActionC"));

    let mut expanded = HashSet::new();
    let closed = project(&model, &expanded);
    assert_eq!(
        closed.as_slice(),
        &[
            Row::Item(a),
            Row::Group {
                id: b,
                expanded: false
            },
            Row::Item(c)
        ]
    );

    expanded.insert(b);
    let open = project(&model, &expanded);
    let titles: Vec<&str> = open
        .iter()
        .map(|row| match row {
            Row::Group { id, .. } => model.get(*id).map(|e| e.title()).unwrap_or(""),
            row => row_item(&model, *row).map(|i| i.title()).unwrap_or(""),
        })
        .collect();
    assert_eq!(titles, vec!["ActionA", "GroupB", "B1", "B2", "ActionC"]);

    expanded.remove(&b);
    assert_eq!(project(&model, &expanded), closed);
}

#[test]
fn content_height_tracks_toggles_exactly() {
    let (model, ids) = mixed_model();
    let theme = Theme::default();
    let group = ids[1];
    let n = child_count(&model, group) as f32;

    let mut expanded = HashSet::new();
    let closed = content_height(project(&model, &expanded).len(), true, &theme);

    expanded.insert(group);
    let open = content_height(project(&model, &expanded).len(), true, &theme);
    assert!((open - closed - n * theme.row_height).abs() < 1e-4);

    expanded.remove(&group);
    let back = content_height(project(&model, &expanded).len(), true, &theme);
    assert!((back - closed).abs() < 1e-4);
}
