//! Chainable collection wrappers.
//!
//! - [`Slist`]: an indexed list with negative-index access
//! - [`Sset`]: a set backed by a hash, insertion-ordered or sorted store
//! - [`Smap`]: a map with the same store choices
//!
//! Capabilities shared between them live in small traits ([`Pushable`],
//! [`Deletable`], [`Filterable`], [`Groupable`], [`Orderable`]).

mod entry;
mod index;
mod list;
mod macros;
mod map;
mod set;
mod store;
mod traits;

pub use entry::Entry;
pub use list::Slist;
pub use map::Smap;
pub use set::Sset;
pub use store::{MapIntoIter, MapIter, MapIterMut, SetIntoIter, SetIter};
pub use traits::{Deletable, Filterable, Groupable, Orderable, Pushable};

pub(crate) use store::{MapStore, SetStore};
