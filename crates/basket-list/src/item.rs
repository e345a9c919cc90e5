/// A named, checkable row in the shopping list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Display name. Stored verbatim, never trimmed.
    pub name: String,
    /// Whether the item has been checked off.
    pub checked: bool,
}

impl Item {
    /// Create an unchecked item.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            checked: false,
        }
    }

    /// Create an item that is already checked off.
    pub fn checked(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            checked: true,
        }
    }

    /// Whether the lower-cased name contains `needle_lower`.
    ///
    /// `needle_lower` must already be lower-cased; [`Filter`](crate::Filter)
    /// lower-cases the search text once per view instead of once per item.
    pub fn name_contains_lowercase(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
    }
}
