//! Client-side catalog engine: filtering, combining and paginating the
//! services and automation templates shown in the catalog.

mod combiner;
mod filter;
mod pagination;
mod view;

pub use combiner::{combine, DisplayItem};
pub use filter::{FilterState, ALL_CATEGORIES};
pub use pagination::{
    page_window, paginate, total_pages, Page, PageButton, DEFAULT_ITEMS_PER_PAGE,
};
pub use view::{CatalogSnapshot, CatalogView};
