//! 商品目录处理器

use axum::{extract::State, response::Json};

use super::{model::Product, service::CatalogService};

pub async fn list_products(State(catalog): State<CatalogService>) -> Json<&'static [Product]> {
    Json(catalog.products())
}

pub async fn list_categories(State(catalog): State<CatalogService>) -> Json<Vec<&'static str>> {
    Json(catalog.categories())
}
