//! Integration tests for the list model and its filtered views.
//!
//! Covers: seed scenarios, stale indices after deletes, end-to-end
//! add/toggle flows, and property tests over arbitrary operation sequences.

use basket_list::{compute_view, Filter, ListError, ListModel, NamePolicy};
use proptest::prelude::*;

fn names_and_indices(list: &ListModel, search: &str) -> Vec<(String, usize)> {
    compute_view(list, search)
        .iter()
        .map(|row| (row.name().to_owned(), row.index))
        .collect()
}

// ===========================================================================
// Scenarios
// ===========================================================================

#[test]
fn add_then_toggle_new_item_end_to_end() {
    let mut list = ListModel::seeded();
    let eggs = list.add_item("eggs").unwrap();
    assert_eq!(eggs, 4);
    list.toggle_checked(eggs).unwrap();

    let view = compute_view(&list, "");
    let rows: Vec<(&str, bool, usize)> = view
        .iter()
        .map(|row| (row.name(), row.checked(), row.index))
        .collect();
    assert_eq!(
        rows,
        [
            ("apples", false, 0),
            ("oranges", false, 1),
            ("milk", true, 2),
            ("bread", false, 3),
            ("eggs", true, 4),
        ]
    );
}

#[test]
fn index_from_filtered_view_targets_the_right_item() {
    let mut list = ListModel::seeded();
    let view = compute_view(&list, "bread");
    assert_eq!(view.len(), 1);
    // Position 0 in the view, original index 3 in the list.
    let index = view[0].index;
    assert_eq!(index, 3);

    list.toggle_checked(index).unwrap();
    assert!(list.get(3).unwrap().checked);
    assert!(!list.get(0).unwrap().checked, "apples must be untouched");
}

#[test]
fn delete_shifts_indices_and_stale_reference_is_reported() {
    let mut list = ListModel::seeded();
    let stale = compute_view(&list, "")
        .iter()
        .map(|row| row.index)
        .collect::<Vec<_>>();

    list.remove_item(1).unwrap();
    assert_eq!(
        names_and_indices(&list, ""),
        [
            ("apples".to_owned(), 0),
            ("milk".to_owned(), 1),
            ("bread".to_owned(), 2),
        ]
    );

    // The old view's last index no longer exists.
    let last = *stale.last().unwrap();
    assert_eq!(
        list.toggle_checked(last),
        Err(ListError::IndexOutOfRange { index: 3, len: 3 })
    );
    // And the old index of milk now names bread: re-query before acting.
    assert_eq!(list.get(2).unwrap().name, "bread");
}

#[test]
fn rename_preserves_checked_and_position() {
    let mut list = ListModel::seeded();
    list.rename_item(3, "eggs").unwrap();
    assert_eq!(
        names_and_indices(&list, ""),
        [
            ("apples".to_owned(), 0),
            ("oranges".to_owned(), 1),
            ("milk".to_owned(), 2),
            ("eggs".to_owned(), 3),
        ]
    );
    assert!(!list.get(3).unwrap().checked);
}

#[test]
fn renamed_item_matches_new_search_only() {
    let mut list = ListModel::seeded();
    list.rename_item(0, "Green Apples").unwrap();
    assert_eq!(names_and_indices(&list, "green"), [("Green Apples".to_owned(), 0)]);
    assert!(compute_view(&list, "bread").iter().all(|row| row.index != 0));
}

#[test]
fn historical_policy_accepts_empty_submissions() {
    let mut list = ListModel::seeded().with_name_policy(NamePolicy::AllowBlank);
    list.add_item("").unwrap();
    // An empty name contains every empty search and no non-empty one.
    assert_eq!(compute_view(&list, "").len(), 5);
    assert!(compute_view(&list, "a").iter().all(|row| row.index != 4));
}

// ===========================================================================
// Properties
// ===========================================================================

#[derive(Debug, Clone)]
enum Op {
    Add(String),
    Toggle(usize),
    Remove(usize),
    Rename(usize, String),
    Hide(bool),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        "[a-zA-Z ]{0,8}".prop_map(Op::Add),
        (0usize..12).prop_map(Op::Toggle),
        (0usize..12).prop_map(Op::Remove),
        ((0usize..12), "[a-zA-Z ]{0,8}").prop_map(|(i, s)| Op::Rename(i, s)),
        any::<bool>().prop_map(Op::Hide),
    ]
}

proptest! {
    #[test]
    fn length_changes_only_on_add_and_remove(ops in proptest::collection::vec(op_strategy(), 0..40)) {
        let mut list = ListModel::seeded();
        for op in ops {
            let before = list.len();
            match op {
                Op::Add(name) => {
                    let ok = list.add_item(name).is_ok();
                    prop_assert_eq!(list.len(), if ok { before + 1 } else { before });
                }
                Op::Remove(index) => {
                    let ok = list.remove_item(index).is_ok();
                    prop_assert_eq!(ok, index < before);
                    prop_assert_eq!(list.len(), if ok { before - 1 } else { before });
                }
                Op::Toggle(index) => {
                    let _ = list.toggle_checked(index);
                    prop_assert_eq!(list.len(), before);
                }
                Op::Rename(index, name) => {
                    let _ = list.rename_item(index, name);
                    prop_assert_eq!(list.len(), before);
                }
                Op::Hide(hide) => {
                    list.set_hide_checked(hide);
                    prop_assert_eq!(list.len(), before);
                }
            }
        }
    }

    #[test]
    fn rejected_operations_leave_model_unchanged(ops in proptest::collection::vec(op_strategy(), 0..40)) {
        let mut list = ListModel::seeded();
        for op in ops {
            let before = list.clone();
            let result = match op {
                Op::Add(name) => list.add_item(name).map(|_| ()),
                Op::Toggle(index) => list.toggle_checked(index).map(|_| ()),
                Op::Remove(index) => list.remove_item(index).map(|_| ()),
                Op::Rename(index, name) => list.rename_item(index, name).map(|_| ()),
                Op::Hide(hide) => {
                    list.set_hide_checked(hide);
                    Ok(())
                }
            };
            if result.is_err() {
                prop_assert_eq!(&list, &before);
            }
        }
    }

    #[test]
    fn view_rows_are_ordered_and_satisfy_the_filter(
        ops in proptest::collection::vec(op_strategy(), 0..30),
        search in "[a-zA-Z]{0,3}",
    ) {
        let mut list = ListModel::seeded().with_name_policy(NamePolicy::AllowBlank);
        for op in ops {
            let _ = match op {
                Op::Add(name) => list.add_item(name).map(|_| ()),
                Op::Toggle(index) => list.toggle_checked(index).map(|_| ()),
                Op::Remove(index) => list.remove_item(index).map(|_| ()),
                Op::Rename(index, name) => list.rename_item(index, name).map(|_| ()),
                Op::Hide(hide) => {
                    list.set_hide_checked(hide);
                    Ok(())
                }
            };
        }

        let filter = Filter::for_model(&list, &search);
        let view = compute_view(&list, &search);
        prop_assert_eq!(&view, &compute_view(&list, &search));
        for pair in view.windows(2) {
            prop_assert!(pair[0].index < pair[1].index);
        }
        for row in &view {
            prop_assert_eq!(list.get(row.index), Some(row.item));
            prop_assert!(filter.matches(row.item));
        }
        let expected = list.items().iter().filter(|item| filter.matches(item)).count();
        prop_assert_eq!(view.len(), expected);
    }
}
