//! Filter evaluation: from model state plus search text to visible rows.

use crate::item::Item;
use crate::list::ListModel;

/// One visible row: an item together with its position in the backing
/// sequence.
///
/// `index` is the only value a renderer may hand back to the model. The
/// row's position inside the view is meaningless to [`ListModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewRow<'a> {
    /// Original index in [`ListModel::items`].
    pub index: usize,
    pub item: &'a Item,
}

impl<'a> ViewRow<'a> {
    pub fn name(&self) -> &'a str {
        &self.item.name
    }

    pub fn checked(&self) -> bool {
        self.item.checked
    }
}

/// The predicate applied by [`compute_view`].
///
/// Holds the search text already lower-cased so that matching a whole list
/// lower-cases the needle once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    search_lower: String,
    hide_checked: bool,
}

impl Filter {
    pub fn new(search: &str, hide_checked: bool) -> Self {
        Self {
            search_lower: search.to_lowercase(),
            hide_checked,
        }
    }

    /// The filter a given model applies for `search`.
    pub fn for_model(model: &ListModel, search: &str) -> Self {
        Self::new(search, model.hide_checked())
    }

    /// Whether any predicate is active. An inactive filter keeps every item.
    pub fn is_active(&self) -> bool {
        !self.search_lower.is_empty() || self.hide_checked
    }

    /// Search match first, then the hide-checked predicate.
    pub fn matches(&self, item: &Item) -> bool {
        if !self.search_lower.is_empty() && !item.name_contains_lowercase(&self.search_lower) {
            return false;
        }
        !(self.hide_checked && item.checked)
    }

    /// Apply the filter to a slice of items, pairing survivors with their
    /// original indices.
    pub fn apply<'a>(&self, items: &'a [Item]) -> Vec<ViewRow<'a>> {
        items
            .iter()
            .enumerate()
            .filter(|(_, item)| self.matches(item))
            .map(|(index, item)| ViewRow { index, item })
            .collect()
    }
}

/// Compute the rows visible for `search`, in backing-sequence order.
///
/// An empty `search` does not filter by name. When the model hides checked
/// items, checked rows are dropped as well. The result borrows the model and
/// is recomputed on every render; it is never stored or mutated.
pub fn compute_view<'a>(model: &'a ListModel, search: &str) -> Vec<ViewRow<'a>> {
    Filter::for_model(model, search).apply(model.items())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(view: &[ViewRow<'_>]) -> Vec<(String, usize)> {
        view.iter()
            .map(|row| (row.name().to_owned(), row.index))
            .collect()
    }

    fn pairs(expected: &[(&str, usize)]) -> Vec<(String, usize)> {
        expected
            .iter()
            .map(|&(name, index)| (name.to_owned(), index))
            .collect()
    }

    #[test]
    fn empty_search_returns_full_sequence() {
        let list = ListModel::seeded();
        let view = compute_view(&list, "");
        assert_eq!(
            summary(&view),
            pairs(&[("apples", 0), ("oranges", 1), ("milk", 2), ("bread", 3)])
        );
    }

    #[test]
    fn search_mi_finds_milk_at_original_index() {
        let list = ListModel::seeded();
        assert_eq!(summary(&compute_view(&list, "mi")), pairs(&[("milk", 2)]));
    }

    #[test]
    fn search_is_case_insensitive() {
        let list = ListModel::seeded();
        assert_eq!(summary(&compute_view(&list, "MI")), pairs(&[("milk", 2)]));
        assert_eq!(summary(&compute_view(&list, "Milk")), pairs(&[("milk", 2)]));

        let list = ListModel::from_items([Item::new("Oranges")]);
        assert_eq!(summary(&compute_view(&list, "ora")), pairs(&[("Oranges", 0)]));
    }

    #[test]
    fn hide_checked_excludes_milk() {
        let list = ListModel::seeded().with_hide_checked(true);
        assert_eq!(
            summary(&compute_view(&list, "")),
            pairs(&[("apples", 0), ("oranges", 1), ("bread", 3)])
        );
    }

    #[test]
    fn toggle_then_hide_excludes_both_checked_items() {
        let mut list = ListModel::seeded();
        list.toggle_checked(0).unwrap();
        list.set_hide_checked(true);
        assert_eq!(
            summary(&compute_view(&list, "")),
            pairs(&[("oranges", 1), ("bread", 3)])
        );
    }

    #[test]
    fn search_and_hide_compose() {
        let list = ListModel::seeded().with_hide_checked(true);
        // "m" matches only milk, which is checked.
        assert!(compute_view(&list, "m").is_empty());
        assert_eq!(
            summary(&compute_view(&list, "an")),
            pairs(&[("oranges", 1)])
        );
    }

    #[test]
    fn no_match_yields_empty_view() {
        let list = ListModel::seeded();
        assert!(compute_view(&list, "zzz").is_empty());
    }

    #[test]
    fn view_is_idempotent() {
        let list = ListModel::seeded().with_hide_checked(true);
        assert_eq!(compute_view(&list, "a"), compute_view(&list, "a"));
    }

    #[test]
    fn view_tracks_deletes() {
        let mut list = ListModel::seeded();
        list.remove_item(1).unwrap();
        assert_eq!(
            summary(&compute_view(&list, "")),
            pairs(&[("apples", 0), ("milk", 1), ("bread", 2)])
        );
    }

    #[test]
    fn filter_activity() {
        assert!(!Filter::new("", false).is_active());
        assert!(Filter::new("x", false).is_active());
        assert!(Filter::new("", true).is_active());
    }

    #[test]
    fn row_accessors() {
        let list = ListModel::seeded();
        let view = list.view("milk");
        assert_eq!(view[0].name(), "milk");
        assert!(view[0].checked());
        assert_eq!(view[0].index, 2);
    }
}
