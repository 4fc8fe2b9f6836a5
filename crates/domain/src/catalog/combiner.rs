use crate::area_template::AreaTemplate;
use crate::service::Service;

/// A catalog entry ready for rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DisplayItem<'a> {
    Service(&'a Service),
    Template(&'a AreaTemplate),
}

impl<'a> DisplayItem<'a> {
    pub fn name(&self) -> &'a str {
        match *self {
            DisplayItem::Service(s) => &s.name,
            DisplayItem::Template(t) => &t.name,
        }
    }

    pub fn description(&self) -> &'a str {
        match *self {
            DisplayItem::Service(s) => &s.description,
            DisplayItem::Template(t) => &t.description,
        }
    }

    pub fn is_template(&self) -> bool {
        matches!(self, DisplayItem::Template(_))
    }
}

/// Services first, then templates, each in store order. No sorting and no
/// deduplication.
pub fn combine<'a>(
    services: &[&'a Service],
    templates: &[&'a AreaTemplate],
) -> Vec<DisplayItem<'a>> {
    let mut items = Vec::with_capacity(services.len() + templates.len());
    items.extend(services.iter().map(|&s| DisplayItem::Service(s)));
    items.extend(templates.iter().map(|&t| DisplayItem::Template(t)));
    items
}
