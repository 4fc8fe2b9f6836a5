use crate::area_template::AreaTemplate;
use crate::service::Service;

/// Category sentinel meaning "no category filter".
pub const ALL_CATEGORIES: &str = "All";

/// Transient catalog view state.
///
/// Changing the query, the category or the popular-only flag sends the view
/// back to page 1; only [`FilterState::set_current_page`] leaves it alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    query: String,
    category: String,
    popular_only: bool,
    current_page: usize,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: ALL_CATEGORIES.to_string(),
            popular_only: false,
            current_page: 1,
        }
    }
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn popular_only(&self) -> bool {
        self.popular_only
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.current_page = 1;
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
        self.current_page = 1;
    }

    pub fn set_popular_only(&mut self, popular_only: bool) {
        self.popular_only = popular_only;
        self.current_page = 1;
    }

    /// Pages are 1-indexed; 0 is raised to 1. Values past the last page are
    /// kept and simply produce an empty page.
    pub fn set_current_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when the state filters nothing out.
    pub fn is_identity(&self) -> bool {
        self.query.is_empty() && self.category == ALL_CATEGORIES && !self.popular_only
    }

    pub fn matches_service(&self, service: &Service) -> bool {
        self.matches_service_with(&SearchNeedle::new(&self.query), service)
    }

    /// Templates carry no category or popularity, so only the search applies.
    pub fn matches_template(&self, template: &AreaTemplate) -> bool {
        self.matches_template_with(&SearchNeedle::new(&self.query), template)
    }

    pub(crate) fn matches_service_with(&self, needle: &SearchNeedle, service: &Service) -> bool {
        let category_match =
            self.category == ALL_CATEGORIES || service.category.as_ref() == self.category;
        let popular_match = !self.popular_only || service.is_popular;

        category_match
            && popular_match
            && (needle.found_in(&service.name)
                || needle.found_in(&service.description)
                || service.tags.iter().any(|tag| needle.found_in(tag)))
    }

    pub(crate) fn matches_template_with(
        &self,
        needle: &SearchNeedle,
        template: &AreaTemplate,
    ) -> bool {
        needle.found_in(&template.name)
            || needle.found_in(&template.description)
            || needle.found_in(&template.action_service)
            || needle.found_in(&template.reaction_service)
    }
}

/// Lower-cased search query, prepared once per filtering pass.
pub(crate) struct SearchNeedle(Option<String>);

impl SearchNeedle {
    pub(crate) fn new(query: &str) -> Self {
        if query.is_empty() {
            Self(None)
        } else {
            Self(Some(query.to_lowercase()))
        }
    }

    /// An empty query is found everywhere.
    pub(crate) fn found_in(&self, haystack: &str) -> bool {
        match &self.0 {
            None => true,
            Some(needle) => haystack.to_lowercase().contains(needle.as_str()),
        }
    }
}
