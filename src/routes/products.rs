use axum::{
    Json, Router,
    extract::State,
    routing::get,
};
use uuid::Uuid;

use crate::{
    dto::products::ProductList,
    error::{AppResult, ErrorBody},
    extract::{AppPath, AppQuery},
    models::Product,
    routes::params::ShopQuery,
    services::product_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products))
        .route("/product/{id}", get(get_product))
}

#[utoipa::path(
    get,
    path = "/api/products",
    params(ShopQuery),
    responses(
        (status = 200, description = "Active products of a shop, newest first", body = ProductList),
        (status = 400, description = "shop missing", body = ErrorBody)
    ),
    tag = "Products"
)]
pub async fn list_products(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<ShopQuery>,
) -> AppResult<Json<ProductList>> {
    let shop_id = query.require_shop()?;
    let items = product_service::list_products(&state.orm, shop_id).await?;
    Ok(Json(ProductList { items }))
}

#[utoipa::path(
    get,
    path = "/api/product/{id}",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Get product", body = Product),
        (status = 404, description = "Product not found", body = ErrorBody),
    ),
    tag = "Products"
)]
pub async fn get_product(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> AppResult<Json<Product>> {
    let product = product_service::get_product(&state.orm, id).await?;
    Ok(Json(product))
}
