use area_domain::{CatalogSnapshot, DisplayItem, FilterState, PageButton, ServiceId};
use std::fmt::Write;

pub fn catalog(snapshot: &CatalogSnapshot<'_>, filter: &FilterState) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Categories: {}", categories(snapshot, filter.category()));

    if !snapshot.has_results {
        let _ = writeln!(out, "No services or templates match your filters.");
        return out;
    }

    let _ = writeln!(
        out,
        "{} result(s), page {} of {}",
        snapshot.total_items, snapshot.current_page, snapshot.total_pages
    );
    let _ = writeln!(out);

    if snapshot.current_items.is_empty() {
        let _ = writeln!(out, "  (page {} is empty)", snapshot.current_page);
    }
    for item in &snapshot.current_items {
        let _ = writeln!(out, "  {}", item_line(item));
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Pages: {}", page_strip(&snapshot.page_buttons(), snapshot.current_page));
    out
}

fn categories(snapshot: &CatalogSnapshot<'_>, selected: &str) -> String {
    snapshot
        .categories
        .iter()
        .map(|c| {
            if c.as_ref() == selected {
                format!("[{}]", c)
            } else {
                c.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn item_line(item: &DisplayItem<'_>) -> String {
    match *item {
        DisplayItem::Service(s) => {
            let star = if s.is_popular { " *" } else { "" };
            let mut line = format!("[service]  {}{} ({})", s.name, star, s.category);
            if s.automation_count > 0 {
                let _ = write!(line, ", {} automations", s.automation_count);
            }
            if !s.description.is_empty() {
                let _ = write!(line, ": {}", s.description);
            }
            line
        }
        DisplayItem::Template(t) => {
            let status = if t.can_activate() {
                "ready".to_string()
            } else {
                let missing: Vec<String> =
                    t.missing_connections().iter().map(|s| s.to_string()).collect();
                format!("connect {}", missing.join(", "))
            };
            format!(
                "[template] {} ({} -> {}) [{}]",
                t.name, t.action_service, t.reaction_service, status
            )
        }
    }
}

pub fn page_strip(buttons: &[PageButton], current_page: usize) -> String {
    buttons
        .iter()
        .map(|b| match b {
            PageButton::Page(n) if *n == current_page => format!("[{}]", n),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn entry_line(id: i64, service_id: &ServiceId, name: &str, description: &str) -> String {
    if description.is_empty() {
        format!("#{} {} (service {})", id, name, service_id)
    } else {
        format!("#{} {} (service {}): {}", id, name, service_id, description)
    }
}
