use area_domain::{CatalogView, DisplayItem, PageButton, ALL_CATEGORIES};
use std::sync::Arc;

mod helpers;
use helpers::{services_in, ServiceBuilder, TemplateBuilder};

fn entertainment_and_productivity() -> CatalogView {
    let mut services = services_in("Entertainment", 1, 6);
    services.extend(services_in("Productivity", 7, 4));
    CatalogView::new(services, Vec::new(), 9)
}

fn names<'a>(items: &[DisplayItem<'a>]) -> Vec<&'a str> {
    items.iter().map(|i| i.name()).collect()
}

#[test]
fn test_initial_snapshot_shows_everything() {
    let view = entertainment_and_productivity();
    let snapshot = view.snapshot();

    assert_eq!(snapshot.filtered_services.len(), 10);
    assert!(snapshot.filtered_templates.is_empty());
    assert_eq!(snapshot.total_items, 10);
    assert_eq!(snapshot.total_pages, 2);
    assert_eq!(snapshot.current_page, 1);
    assert_eq!(snapshot.current_items.len(), 9);
    assert!(snapshot.has_results);
}

#[test]
fn test_select_category_scenario() {
    let mut view = entertainment_and_productivity();
    view.set_current_page(2);

    view.set_selected_category("Entertainment");
    let snapshot = view.snapshot();

    assert_eq!(snapshot.filtered_services.len(), 6);
    assert_eq!(snapshot.total_pages, 1);
    assert_eq!(snapshot.current_page, 1);
    assert_eq!(view.filter().current_page(), 1);
    assert_eq!(snapshot.current_items.len(), 6);
}

#[test]
fn test_categories_are_unique_in_first_seen_order() {
    let services = vec![
        ServiceBuilder::new(1).category("Social").build(),
        ServiceBuilder::new(2).category("Productivity").build(),
        ServiceBuilder::new(3).category("Social").build(),
        ServiceBuilder::new(4).category("Entertainment").build(),
    ];
    let view = CatalogView::new(services, Vec::new(), 9);

    let categories: Vec<&str> = view.categories().iter().map(|c| c.as_ref()).collect();
    assert_eq!(
        categories,
        vec![ALL_CATEGORIES, "Social", "Productivity", "Entertainment"]
    );
}

#[test]
fn test_categories_of_empty_store() {
    let view = CatalogView::new(Vec::new(), Vec::new(), 9);
    assert_eq!(view.categories(), &[Arc::<str>::from(ALL_CATEGORIES)]);
}

#[test]
fn test_services_precede_templates() {
    let services = vec![
        ServiceBuilder::new(1).name("Zeta").build(),
        ServiceBuilder::new(2).name("Alpha").build(),
    ];
    let templates = vec![
        TemplateBuilder::new(1).name("Template B").build(),
        TemplateBuilder::new(2).name("Template A").build(),
    ];
    let view = CatalogView::new(services, templates, 9);
    let snapshot = view.snapshot();

    assert_eq!(
        names(&snapshot.all_items),
        vec!["Zeta", "Alpha", "Template B", "Template A"]
    );
    assert!(!snapshot.all_items[1].is_template());
    assert!(snapshot.all_items[2].is_template());
    assert!(matches!(snapshot.all_items[3], DisplayItem::Template(t) if t.name.as_ref() == "Template A"));
}

#[test]
fn test_templates_survive_category_filter() {
    let services = vec![
        ServiceBuilder::new(1).category("Social").build(),
        ServiceBuilder::new(2).category("Productivity").build(),
    ];
    let templates = vec![TemplateBuilder::new(1).build()];
    let mut view = CatalogView::new(services, templates, 9);

    view.set_selected_category("Social");
    view.set_show_popular_only(false);
    let snapshot = view.snapshot();

    assert_eq!(snapshot.filtered_services.len(), 1);
    assert_eq!(snapshot.filtered_templates.len(), 1);
    assert_eq!(snapshot.total_items, 2);
}

#[test]
fn test_search_filters_services_and_templates() {
    let services = vec![
        ServiceBuilder::new(1).name("GitHub").build(),
        ServiceBuilder::new(2).name("Spotify").build(),
    ];
    let templates = vec![
        TemplateBuilder::new(1).services("GitHub", "Discord").build(),
        TemplateBuilder::new(2).services("Spotify", "Slack").build(),
    ];
    let mut view = CatalogView::new(services, templates, 9);

    view.set_search_query("github");
    let snapshot = view.snapshot();

    assert_eq!(snapshot.filtered_services.len(), 1);
    assert_eq!(snapshot.filtered_services[0].name.as_ref(), "GitHub");
    assert_eq!(snapshot.filtered_templates.len(), 1);
    assert_eq!(snapshot.filtered_templates[0].action_service.as_ref(), "GitHub");
}

#[test]
fn test_no_results() {
    let mut view = entertainment_and_productivity();

    view.set_search_query("does not exist");
    let snapshot = view.snapshot();

    assert!(!snapshot.has_results);
    assert_eq!(snapshot.total_pages, 0);
    assert!(snapshot.current_items.is_empty());
    assert!(snapshot.page_buttons().is_empty());
}

#[test]
fn test_out_of_range_page_is_tolerated() {
    let mut view = entertainment_and_productivity();

    view.set_current_page(5);
    let snapshot = view.snapshot();

    assert_eq!(snapshot.current_page, 5);
    assert_eq!(snapshot.total_pages, 2);
    assert!(snapshot.current_items.is_empty());
    assert!(snapshot.has_results);
}

#[test]
fn test_second_page_contents() {
    let mut view = entertainment_and_productivity();

    view.set_current_page(2);
    let snapshot = view.snapshot();

    assert_eq!(names(&snapshot.current_items), vec!["Service 10"]);
    assert_eq!(
        snapshot.page_buttons(),
        vec![PageButton::Page(1), PageButton::Page(2)]
    );
}

#[test]
fn test_filtering_setters_reset_page_regardless_of_prior_page() {
    let mut view = entertainment_and_productivity();

    view.set_current_page(2);
    view.set_search_query("Service");
    assert_eq!(view.filter().current_page(), 1);

    view.set_current_page(2);
    view.set_selected_category(ALL_CATEGORIES);
    assert_eq!(view.filter().current_page(), 1);

    view.set_current_page(2);
    view.set_show_popular_only(false);
    assert_eq!(view.filter().current_page(), 1);
}

#[test]
fn test_clear_filters_restores_identity() {
    let mut view = entertainment_and_productivity();
    view.set_search_query("1");
    view.set_selected_category("Productivity");
    view.set_show_popular_only(true);
    view.set_current_page(3);

    view.clear_filters();
    let after_once = view.filter().clone();
    view.clear_filters();

    assert_eq!(view.filter(), &after_once);
    assert!(view.filter().is_identity());
    assert_eq!(view.filter().current_page(), 1);
    assert_eq!(view.snapshot().filtered_services.len(), 10);
}

#[test]
fn test_set_catalog_recomputes_view() {
    let mut view = entertainment_and_productivity();
    view.set_selected_category("Entertainment");
    assert_eq!(view.snapshot().filtered_services.len(), 6);

    view.set_catalog(services_in("Entertainment", 100, 2), Vec::new());

    let snapshot = view.snapshot();
    assert_eq!(snapshot.filtered_services.len(), 2);
    assert_eq!(view.categories().len(), 2);
}

#[test]
fn test_snapshot_is_pure() {
    let mut view = entertainment_and_productivity();
    view.set_search_query("service 1");

    let first = view.snapshot();
    let second = view.snapshot();

    assert_eq!(names(&first.all_items), names(&second.all_items));
    assert_eq!(first.total_pages, second.total_pages);
    assert_eq!(view.services().len(), 10);
}

#[test]
fn test_page_change_keeps_filtered_set() {
    let services: Vec<_> = (1..=20)
        .map(|i| {
            ServiceBuilder::new(i)
                .popular(i % 2 == 0)
                .category("Social")
                .build()
        })
        .collect();
    let mut view = CatalogView::new(services, Vec::new(), 4);
    view.set_show_popular_only(true);

    view.set_current_page(3);
    let snapshot = view.snapshot();

    assert_eq!(snapshot.filtered_services.len(), 10);
    assert_eq!(snapshot.total_pages, 3);
    assert_eq!(names(&snapshot.current_items), vec!["Service 18", "Service 20"]);
}
