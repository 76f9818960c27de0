pub mod display;
pub mod filters;
pub mod product;

pub use display::{AspectRatio, Density, DisplayOptions, DisplayPatch, ImageFit, ViewMode};
pub use filters::{Filters, PriceRange, SortBy};
pub use product::{Product, ProductImage};
