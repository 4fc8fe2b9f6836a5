use std::cell::OnceCell;
use std::collections::HashSet;
use std::sync::Arc;

use super::combiner::{combine, DisplayItem};
use super::filter::{FilterState, SearchNeedle, ALL_CATEGORIES};
use super::pagination::{page_window, paginate, PageButton};
use crate::area_template::AreaTemplate;
use crate::service::Service;

/// Owns the catalog store and the filter state, and derives the rendered
/// view from them.
///
/// The filtered sets are memoised and only recomputed after the store or one
/// of the filtering fields changes. Moving between pages re-slices the cached
/// result.
pub struct CatalogView {
    services: Vec<Service>,
    templates: Vec<AreaTemplate>,
    categories: Vec<Arc<str>>,
    filter: FilterState,
    items_per_page: usize,
    filtered: OnceCell<Filtered>,
}

struct Filtered {
    services: Vec<usize>,
    templates: Vec<usize>,
}

/// Read-only derived view, borrowed from the [`CatalogView`] that produced it.
#[derive(Debug)]
pub struct CatalogSnapshot<'a> {
    pub categories: &'a [Arc<str>],
    pub filtered_services: Vec<&'a Service>,
    pub filtered_templates: Vec<&'a AreaTemplate>,
    pub all_items: Vec<DisplayItem<'a>>,
    pub current_items: Vec<DisplayItem<'a>>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub has_results: bool,
}

impl CatalogSnapshot<'_> {
    pub fn page_buttons(&self) -> Vec<PageButton> {
        page_window(self.current_page, self.total_pages)
    }
}

impl CatalogView {
    pub fn new(services: Vec<Service>, templates: Vec<AreaTemplate>, items_per_page: usize) -> Self {
        let categories = collect_categories(&services);
        Self {
            services,
            templates,
            categories,
            filter: FilterState::default(),
            items_per_page: items_per_page.max(1),
            filtered: OnceCell::new(),
        }
    }

    /// Replace the store after a refetch. The filter state is kept as is.
    pub fn set_catalog(&mut self, services: Vec<Service>, templates: Vec<AreaTemplate>) {
        self.categories = collect_categories(&services);
        self.services = services;
        self.templates = templates;
        self.filtered = OnceCell::new();
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn templates(&self) -> &[AreaTemplate] {
        &self.templates
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    /// `"All"` followed by every service category in first-seen order.
    pub fn categories(&self) -> &[Arc<str>] {
        &self.categories
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.filter.set_query(query);
        self.filtered = OnceCell::new();
    }

    pub fn set_selected_category(&mut self, category: impl Into<String>) {
        self.filter.set_category(category);
        self.filtered = OnceCell::new();
    }

    pub fn set_show_popular_only(&mut self, popular_only: bool) {
        self.filter.set_popular_only(popular_only);
        self.filtered = OnceCell::new();
    }

    pub fn set_current_page(&mut self, page: usize) {
        self.filter.set_current_page(page);
    }

    pub fn clear_filters(&mut self) {
        self.filter.clear();
        self.filtered = OnceCell::new();
    }

    pub fn snapshot(&self) -> CatalogSnapshot<'_> {
        let filtered = self.filtered.get_or_init(|| self.compute_filtered());

        let filtered_services: Vec<&Service> =
            filtered.services.iter().map(|&i| &self.services[i]).collect();
        let filtered_templates: Vec<&AreaTemplate> =
            filtered.templates.iter().map(|&i| &self.templates[i]).collect();

        let all_items = combine(&filtered_services, &filtered_templates);
        let page = paginate(&all_items, self.filter.current_page(), self.items_per_page);
        let current_items = page.items.to_vec();
        let (current_page, total_pages, total_items, has_results) = (
            page.current_page,
            page.total_pages,
            page.total_items,
            page.has_results,
        );

        CatalogSnapshot {
            categories: &self.categories,
            filtered_services,
            filtered_templates,
            all_items,
            current_items,
            current_page,
            total_pages,
            total_items,
            has_results,
        }
    }

    fn compute_filtered(&self) -> Filtered {
        let needle = SearchNeedle::new(self.filter.query());

        let services = self
            .services
            .iter()
            .enumerate()
            .filter(|(_, s)| self.filter.matches_service_with(&needle, s))
            .map(|(i, _)| i)
            .collect();

        let templates = self
            .templates
            .iter()
            .enumerate()
            .filter(|(_, t)| self.filter.matches_template_with(&needle, t))
            .map(|(i, _)| i)
            .collect();

        Filtered {
            services,
            templates,
        }
    }
}

fn collect_categories(services: &[Service]) -> Vec<Arc<str>> {
    let mut seen = HashSet::with_capacity(services.len());
    let mut categories = vec![Arc::from(ALL_CATEGORIES)];
    for service in services {
        if seen.insert(Arc::clone(&service.category)) {
            categories.push(Arc::clone(&service.category));
        }
    }
    categories
}
