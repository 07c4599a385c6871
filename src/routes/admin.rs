use axum::{
    Json, Router,
    extract::{Multipart, State},
    routing::{post, put},
};
use uuid::Uuid;

use crate::{
    dto::products::{CreateProductForm, CreateProductMultipart, UpdateProductRequest},
    error::{AppError, AppResult, ErrorBody},
    extract::{AppJson, AppPath},
    middleware::auth::AuthAdmin,
    response::StatusResponse,
    services::{product_service, storage::{UploadedImage, is_image}},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/product", post(create_product))
        .route("/product/{id}", put(update_product).delete(delete_product))
}

/// Collect `category`, `description` and every `images` part. Counting is
/// left to validation so an oversized upload is rejected, not truncated.
pub async fn read_product_form(mut multipart: Multipart) -> AppResult<CreateProductForm> {
    let mut form = CreateProductForm::default();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::bad_request(format!("Invalid multipart request: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "category" | "description" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::bad_request(format!("Invalid {name}: {e}")))?;
                if name == "category" {
                    form.category = Some(value);
                } else {
                    form.description = Some(value);
                }
            }
            "images" | "images[]" => {
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                if !is_image(&content_type) {
                    return Err(AppError::bad_request("only image uploads are allowed"));
                }
                let file_name = field.file_name().unwrap_or("image").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::bad_request(format!("Invalid image upload: {e}")))?;
                form.images.push(UploadedImage {
                    file_name,
                    content_type,
                    bytes,
                });
            }
            _ => {}
        }
    }
    Ok(form)
}

#[utoipa::path(
    post,
    path = "/api/admin/product",
    request_body(content = CreateProductMultipart, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Product created", body = StatusResponse),
        (status = 400, description = "category/images missing or more than 6 images", body = ErrorBody),
        (status = 401, description = "Unauthorized", body = ErrorBody)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn create_product(
    State(state): State<AppState>,
    admin: AuthAdmin,
    multipart: Multipart,
) -> AppResult<Json<StatusResponse>> {
    let product = read_product_form(multipart).await?.validate()?;
    product_service::create_product(&state, &admin, product).await?;
    Ok(Json(StatusResponse::created()))
}

#[utoipa::path(
    put,
    path = "/api/admin/product/{id}",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Updated; a product of another shop is left untouched", body = StatusResponse),
        (status = 400, description = "category missing", body = ErrorBody),
        (status = 401, description = "Unauthorized", body = ErrorBody)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn update_product(
    State(state): State<AppState>,
    admin: AuthAdmin,
    AppPath(id): AppPath<Uuid>,
    AppJson(payload): AppJson<UpdateProductRequest>,
) -> AppResult<Json<StatusResponse>> {
    let changes = payload.validate()?;
    product_service::update_product(&state.orm, &admin, id, changes).await?;
    Ok(Json(StatusResponse::updated()))
}

#[utoipa::path(
    delete,
    path = "/api/admin/product/{id}",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Deleted; a product of another shop is left untouched", body = StatusResponse),
        (status = 401, description = "Unauthorized", body = ErrorBody)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    admin: AuthAdmin,
    AppPath(id): AppPath<Uuid>,
) -> AppResult<Json<StatusResponse>> {
    product_service::delete_product(&state.orm, &admin, id).await?;
    Ok(Json(StatusResponse::deleted()))
}
