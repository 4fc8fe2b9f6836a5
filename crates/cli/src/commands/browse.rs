use area_domain::Config;
use tracing::warn;

use crate::di::UseCases;
use crate::render;
use crate::BrowseArgs;

pub async fn browse(use_cases: &UseCases, config: &Config, args: &BrowseArgs) -> anyhow::Result<()> {
    let store = use_cases.load_catalog.execute().await;

    if let Some(err) = &store.services_error {
        warn!(error = %err, "Services could not be loaded");
        eprintln!("Failed to load services: {}", err);
    }
    if let Some(err) = &store.templates_error {
        warn!(error = %err, "Templates could not be loaded");
        eprintln!("Failed to load templates: {}", err);
    }
    if !use_cases.session.is_authenticated() {
        eprintln!("Not signed in: templates are hidden (pass --token or set AREA_TOKEN).");
    }

    let mut view = store.into_view(config.catalog.items_per_page);
    view.set_search_query(args.search.as_str());
    if let Some(category) = &args.category {
        view.set_selected_category(category.as_str());
    }
    view.set_show_popular_only(args.popular);
    // After the filtering setters, which reset the page.
    view.set_current_page(args.page);

    print!("{}", render::catalog(&view.snapshot(), view.filter()));
    Ok(())
}
