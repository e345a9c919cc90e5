//! Shopping-list state for the **basket** application.
//!
//! `basket-list` holds everything that is true about the list independently of
//! how it is drawn: the [`Item`] entity, the [`ListModel`] that owns the
//! backing sequence, and [`compute_view`], the pure projection from model
//! state plus search text to the rows a renderer shows.
//!
//! # Key types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Item`] | A named, checkable row |
//! | [`ListModel`] | The backing sequence plus the hide-checked flag |
//! | [`NamePolicy`] | Whether blank names are accepted by add and rename |
//! | [`ViewRow`] | An item paired with its original index in the backing sequence |
//! | [`Filter`] | The search and hide-checked predicate used by [`compute_view`] |
//! | [`ListError`] | Rejected operations (stale index, blank name) |
//!
//! # Indices
//!
//! Every index accepted by a mutating operation is a position in the
//! **unfiltered** backing sequence. Views never hand out their own positions:
//! each [`ViewRow`] carries the original index, and that is the value a
//! renderer echoes back into [`ListModel::toggle_checked`],
//! [`ListModel::remove_item`] and [`ListModel::rename_item`].
//!
//! ```
//! use basket_list::{compute_view, ListModel};
//!
//! let mut list = ListModel::seeded();
//! list.set_hide_checked(true);
//!
//! let view = compute_view(&list, "");
//! let names: Vec<_> = view.iter().map(|row| row.name()).collect();
//! assert_eq!(names, ["apples", "oranges", "bread"]);
//!
//! // "bread" is the third visible row but lives at index 3.
//! let bread = view[2].index;
//! list.toggle_checked(bread).unwrap();
//! assert!(list.get(3).unwrap().checked);
//! ```

pub mod error;
pub mod item;
pub mod list;
pub mod view;

pub use error::ListError;
pub use item::Item;
pub use list::{ListModel, NamePolicy, SEED_ITEMS};
pub use view::{compute_view, Filter, ViewRow};
