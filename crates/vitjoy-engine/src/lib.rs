// Engine module - pure catalog logic (query, gallery navigation, purchase link)
// This layer sits between the data model (types) and CLI presentation.
// Nothing here performs IO or holds state beyond the gallery cursor.

pub mod gallery;
pub mod purchase;
pub mod query;

pub use gallery::Gallery;
pub use purchase::{evaluate, BuyAction};
pub use query::apply;
