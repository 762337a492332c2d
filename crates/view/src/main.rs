//! Headless catalog browser: loads the catalog view once and prints it.
//!
//! Usage: `catalog-browser [CATEGORY]`

use catalog_client::{CatalogClient, ClientConfig};
use catalog_view::CatalogView;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    catalog_observability::init();

    let config = ClientConfig::from_env();
    tracing::info!(base_url = %config.base_url, "starting catalog browser");

    let mut view = CatalogView::new(CatalogClient::http(&config));
    view.init().await;

    if let Some(category) = std::env::args().nth(1) {
        view.change_category(category).await;
    }

    let out = serde_json::json!({
        "categories": view.categories(),
        "selected_category": view.selected_category(),
        "products": view.products(),
    });
    println!("{}", serde_json::to_string_pretty(&out)?);

    Ok(())
}
