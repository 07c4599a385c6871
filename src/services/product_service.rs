use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use crate::{
    db::OrmConn,
    dto::products::{NewProduct, ProductChanges},
    entity::products::{ActiveModel, Column, Entity as Products, Model as ProductModel},
    error::{AppError, AppResult},
    middleware::auth::AuthAdmin,
    models::{Product, ProductSummary},
    state::AppState,
};

/// Active products of one shop, newest first.
///
/// Deactivated products stay readable by id but are hidden from the public
/// catalog; the admin `is_active` toggle has no other effect.
pub async fn list_products(orm: &OrmConn, shop_id: Uuid) -> AppResult<Vec<ProductSummary>> {
    let items = Products::find()
        .filter(Column::ShopId.eq(shop_id))
        .filter(Column::IsActive.eq(true))
        .order_by_desc(Column::CreatedAt)
        .all(orm)
        .await?
        .into_iter()
        .map(|m| ProductSummary::from(product_from_entity(m)))
        .collect();
    Ok(items)
}

/// Any product is readable by id, whichever shop owns it.
pub async fn get_product(orm: &OrmConn, id: Uuid) -> AppResult<Product> {
    Products::find_by_id(id)
        .one(orm)
        .await?
        .map(product_from_entity)
        .ok_or(AppError::NotFound)
}

pub async fn create_product(
    state: &AppState,
    admin: &AuthAdmin,
    product: NewProduct,
) -> AppResult<Product> {
    let stored = state.images.save_all(&product.images).await?;
    let image_urls: Vec<String> = stored.iter().map(|s| s.public_url.clone()).collect();

    let active = ActiveModel {
        id: Set(Uuid::new_v4()),
        shop_id: Set(admin.shop_id),
        category: Set(product.category),
        description: Set(product.description),
        image_urls: Set(image_urls),
        ar_model: Set(None),
        is_active: Set(true),
        created_at: NotSet,
    };

    let model = match active.insert(&state.orm).await {
        Ok(model) => model,
        Err(err) => {
            state.images.remove(&stored).await;
            return Err(err.into());
        }
    };

    tracing::info!(
        shop_id = %admin.shop_id,
        product_id = %model.id,
        images = model.image_urls.len(),
        "product created"
    );
    Ok(product_from_entity(model))
}

/// Returns the number of rows touched. A product owned by another shop is
/// left alone and yields 0, which callers treat as success.
pub async fn update_product(
    orm: &OrmConn,
    admin: &AuthAdmin,
    id: Uuid,
    changes: ProductChanges,
) -> AppResult<u64> {
    let mut update = Products::update_many()
        .col_expr(Column::Category, Expr::value(changes.category))
        .col_expr(Column::Description, Expr::value(changes.description));
    if let Some(is_active) = changes.is_active {
        update = update.col_expr(Column::IsActive, Expr::value(is_active));
    }

    let result = update
        .filter(Column::Id.eq(id))
        .filter(Column::ShopId.eq(admin.shop_id))
        .exec(orm)
        .await?;

    tracing::info!(
        shop_id = %admin.shop_id,
        product_id = %id,
        rows = result.rows_affected,
        "product update"
    );
    Ok(result.rows_affected)
}

/// Same tenant rule as [`update_product`].
pub async fn delete_product(orm: &OrmConn, admin: &AuthAdmin, id: Uuid) -> AppResult<u64> {
    let result = Products::delete_many()
        .filter(Column::Id.eq(id))
        .filter(Column::ShopId.eq(admin.shop_id))
        .exec(orm)
        .await?;

    tracing::info!(
        shop_id = %admin.shop_id,
        product_id = %id,
        rows = result.rows_affected,
        "product delete"
    );
    Ok(result.rows_affected)
}

fn product_from_entity(model: ProductModel) -> Product {
    Product {
        id: model.id,
        shop_id: model.shop_id,
        category: model.category,
        description: model.description,
        image_urls: model.image_urls,
        ar_model: model.ar_model,
        is_active: model.is_active,
        created_at: model.created_at.with_timezone(&Utc),
    }
}
