use tracing::{debug, info, warn};

use crate::error::ListError;
use crate::item::Item;
use crate::view::{compute_view, ViewRow};

/// The list every session starts from: `(name, checked)`.
pub const SEED_ITEMS: [(&str, bool); 4] = [
    ("apples", false),
    ("oranges", false),
    ("milk", true),
    ("bread", false),
];

/// Whether blank names (empty or whitespace only) are accepted by
/// [`ListModel::add_item`] and [`ListModel::rename_item`].
///
/// Duplicate names are accepted under every policy.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum NamePolicy {
    /// Reject blank names with [`ListError::BlankName`].
    #[default]
    RejectBlank,
    /// Accept any name, including `""`.
    AllowBlank,
}

impl NamePolicy {
    fn check(self, name: &str) -> Result<(), ListError> {
        match self {
            NamePolicy::RejectBlank if name.trim().is_empty() => Err(ListError::BlankName),
            _ => Ok(()),
        }
    }
}

/// The backing sequence of items plus the global hide-checked flag.
///
/// Insertion order is canonical. The only operation that changes an item's
/// position is [`remove_item`](ListModel::remove_item), which shifts every
/// later item down by one. All indices are positions in this unfiltered
/// sequence; see [`compute_view`] for how views carry them.
///
/// Search text is deliberately not stored here. It is UI state and is passed
/// to [`view`](ListModel::view) on every query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListModel {
    items: Vec<Item>,
    hide_checked: bool,
    name_policy: NamePolicy,
}

impl ListModel {
    /// An empty list with `hide_checked = false` and the default name policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// The four-item starting list (`apples`, `oranges`, `milk` checked,
    /// `bread`).
    pub fn seeded() -> Self {
        Self::from_items(SEED_ITEMS.iter().map(|&(name, checked)| Item {
            name: name.to_owned(),
            checked,
        }))
    }

    /// Build a list from existing items, preserving their order.
    pub fn from_items(items: impl IntoIterator<Item = Item>) -> Self {
        Self {
            items: items.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Set the name policy (builder variant).
    pub fn with_name_policy(mut self, policy: NamePolicy) -> Self {
        self.name_policy = policy;
        self
    }

    /// Set the initial hide-checked flag (builder variant).
    pub fn with_hide_checked(mut self, hide: bool) -> Self {
        self.hide_checked = hide;
        self
    }

    /// The full backing sequence.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// The item at `index` in the backing sequence.
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of checked items in the backing sequence.
    pub fn checked_count(&self) -> usize {
        self.items.iter().filter(|item| item.checked).count()
    }

    pub fn hide_checked(&self) -> bool {
        self.hide_checked
    }

    pub fn name_policy(&self) -> NamePolicy {
        self.name_policy
    }

    /// Filtered view for `search`; shorthand for [`compute_view`].
    pub fn view<'a>(&'a self, search: &str) -> Vec<ViewRow<'a>> {
        compute_view(self, search)
    }

    /// Append an unchecked item and return its index.
    pub fn add_item(&mut self, name: impl Into<String>) -> Result<usize, ListError> {
        let name = name.into();
        if let Err(err) = self.name_policy.check(&name) {
            warn!(%err, "rejected new item");
            return Err(err);
        }
        info!(name = %name, "adding item to shopping list");
        self.items.push(Item::new(name));
        Ok(self.items.len() - 1)
    }

    /// Flip `checked` on the item at `index` and return the new value.
    pub fn toggle_checked(&mut self, index: usize) -> Result<bool, ListError> {
        let item = self.item_mut(index)?;
        item.checked = !item.checked;
        debug!(index, name = %item.name, checked = item.checked, "toggled item");
        Ok(item.checked)
    }

    /// Remove exactly the item at `index` and return it.
    pub fn remove_item(&mut self, index: usize) -> Result<Item, ListError> {
        self.check_index(index)?;
        let removed = self.items.remove(index);
        info!(index, name = %removed.name, "deleting item from shopping list");
        Ok(removed)
    }

    /// Replace the name of the item at `index` and return the previous name.
    ///
    /// The index is validated before the name, so a stale index is reported
    /// as [`ListError::IndexOutOfRange`] even when the name is also blank.
    pub fn rename_item(
        &mut self,
        index: usize,
        new_name: impl Into<String>,
    ) -> Result<String, ListError> {
        self.check_index(index)?;
        let new_name = new_name.into();
        if let Err(err) = self.name_policy.check(&new_name) {
            warn!(index, %err, "rejected rename");
            return Err(err);
        }
        let item = &mut self.items[index];
        let old = std::mem::replace(&mut item.name, new_name);
        info!(index, from = %old, to = %item.name, "renamed item");
        Ok(old)
    }

    pub fn set_hide_checked(&mut self, hide: bool) {
        if self.hide_checked != hide {
            debug!(hide, "hide-checked changed");
        }
        self.hide_checked = hide;
    }

    fn check_index(&self, index: usize) -> Result<(), ListError> {
        if index < self.items.len() {
            Ok(())
        } else {
            let err = ListError::IndexOutOfRange {
                index,
                len: self.items.len(),
            };
            warn!(%err, "rejected stale index");
            Err(err)
        }
    }

    fn item_mut(&mut self, index: usize) -> Result<&mut Item, ListError> {
        self.check_index(index)?;
        Ok(&mut self.items[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &ListModel) -> Vec<&str> {
        list.items().iter().map(|item| item.name.as_str()).collect()
    }

    #[test]
    fn seeded_list_matches_seed_items() {
        let list = ListModel::seeded();
        assert_eq!(names(&list), ["apples", "oranges", "milk", "bread"]);
        assert_eq!(list.checked_count(), 1);
        assert!(list.get(2).unwrap().checked);
        assert!(!list.hide_checked());
    }

    #[test]
    fn add_appends_unchecked_and_returns_index() {
        let mut list = ListModel::seeded();
        let index = list.add_item("eggs").unwrap();
        assert_eq!(index, 4);
        assert_eq!(list.get(4), Some(&Item::new("eggs")));
    }

    #[test]
    fn add_accepts_duplicates() {
        let mut list = ListModel::seeded();
        list.add_item("milk").unwrap();
        assert_eq!(list.len(), 5);
        assert!(!list.get(4).unwrap().checked);
    }

    #[test]
    fn blank_names_rejected_by_default() {
        let mut list = ListModel::seeded();
        assert_eq!(list.add_item(""), Err(ListError::BlankName));
        assert_eq!(list.add_item("   \t"), Err(ListError::BlankName));
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn blank_names_allowed_by_policy() {
        let mut list = ListModel::seeded().with_name_policy(NamePolicy::AllowBlank);
        assert_eq!(list.add_item(""), Ok(4));
        assert_eq!(list.rename_item(0, " "), Ok("apples".to_owned()));
        assert_eq!(list.get(0).unwrap().name, " ");
    }

    #[test]
    fn names_are_stored_verbatim() {
        let mut list = ListModel::new();
        list.add_item("  rye bread ").unwrap();
        assert_eq!(list.get(0).unwrap().name, "  rye bread ");
    }

    #[test]
    fn toggle_flips_and_reports_new_state() {
        let mut list = ListModel::seeded();
        assert_eq!(list.toggle_checked(2), Ok(false));
        assert_eq!(list.toggle_checked(2), Ok(true));
    }

    #[test]
    fn toggle_out_of_range_leaves_model_unchanged() {
        let mut list = ListModel::seeded();
        let before = list.clone();
        assert_eq!(
            list.toggle_checked(4),
            Err(ListError::IndexOutOfRange { index: 4, len: 4 })
        );
        assert_eq!(list, before);
    }

    #[test]
    fn remove_shifts_later_items_down() {
        let mut list = ListModel::seeded();
        let removed = list.remove_item(1).unwrap();
        assert_eq!(removed.name, "oranges");
        assert_eq!(names(&list), ["apples", "milk", "bread"]);
        assert_eq!(list.get(1).unwrap().name, "milk");
    }

    #[test]
    fn stale_index_after_remove_is_rejected() {
        let mut list = ListModel::seeded();
        list.remove_item(1).unwrap();
        // "bread" used to live at 3; that index no longer exists.
        assert_eq!(
            list.remove_item(3),
            Err(ListError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn rename_changes_only_the_name() {
        let mut list = ListModel::seeded();
        assert_eq!(list.rename_item(3, "eggs"), Ok("bread".to_owned()));
        assert_eq!(list.get(3), Some(&Item::new("eggs")));
        assert_eq!(names(&list), ["apples", "oranges", "milk", "eggs"]);

        list.rename_item(2, "oat milk").unwrap();
        assert!(list.get(2).unwrap().checked);
    }

    #[test]
    fn rename_checks_index_before_name() {
        let mut list = ListModel::seeded();
        assert_eq!(
            list.rename_item(9, ""),
            Err(ListError::IndexOutOfRange { index: 9, len: 4 })
        );
        assert_eq!(list.rename_item(0, ""), Err(ListError::BlankName));
        assert_eq!(list.get(0).unwrap().name, "apples");
    }

    #[test]
    fn hide_checked_flag_round_trips() {
        let mut list = ListModel::seeded().with_hide_checked(true);
        assert!(list.hide_checked());
        list.set_hide_checked(false);
        assert!(!list.hide_checked());
    }

    #[test]
    fn operations_on_empty_list() {
        let mut list = ListModel::new();
        assert!(list.is_empty());
        assert!(list.toggle_checked(0).is_err());
        assert!(list.remove_item(0).is_err());
        assert!(list.rename_item(0, "x").is_err());
    }
}
