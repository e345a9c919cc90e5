/// Reasons a [`ListModel`](crate::ListModel) operation is rejected.
///
/// A rejected operation never changes the model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    /// The index does not name an item in the current backing sequence,
    /// typically because it was read from a view that is now stale.
    #[error("item index {index} is out of range for a list of {len} items")]
    IndexOutOfRange {
        /// The index that was requested.
        index: usize,
        /// Length of the backing sequence at the time of the call.
        len: usize,
    },
    /// The name is empty or whitespace only and the model rejects blank names.
    #[error("item name must not be blank")]
    BlankName,
}
