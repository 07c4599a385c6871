use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use uuid::Uuid;

use crate::{error::AppError, services::product_service, state::AppState};

/// `<model-viewer>` web component; rendering happens entirely in the browser.
pub const MODEL_VIEWER_SCRIPT: &str =
    "https://ajax.googleapis.com/ajax/libs/model-viewer/3.5.0/model-viewer.min.js";

#[derive(Template, WebTemplate)]
#[template(path = "ar_viewer.html")]
pub struct ArViewerTemplate {
    pub title: String,
    pub model_url: String,
    pub poster: Option<String>,
    pub viewer_script: &'static str,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/ar/{product_id}", get(ar_viewer))
}

pub async fn ar_viewer(State(state): State<AppState>, Path(product_id): Path<String>) -> Response {
    let Ok(product_id) = Uuid::parse_str(product_id.trim()) else {
        return (StatusCode::NOT_FOUND, "Product not found").into_response();
    };

    let product = match product_service::get_product(&state.orm, product_id).await {
        Ok(product) => product,
        Err(AppError::NotFound) => {
            return (StatusCode::NOT_FOUND, "Product not found").into_response();
        }
        Err(err) => return err.into_response(),
    };

    let Some(model_url) = product.ar_model.filter(|m| !m.trim().is_empty()) else {
        return (StatusCode::NOT_FOUND, "AR view is not available for this product").into_response();
    };

    ArViewerTemplate {
        title: product.category,
        model_url,
        poster: product.image_urls.into_iter().next(),
        viewer_script: MODEL_VIEWER_SCRIPT,
    }
    .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_escapes_and_embeds_model() {
        let html = ArViewerTemplate {
            title: "<script>ring</script>".into(),
            model_url: "/models/ring.glb".into(),
            poster: Some("/uploads/1-ring.png".into()),
            viewer_script: MODEL_VIEWER_SCRIPT,
        }
        .render()
        .unwrap();

        assert!(html.contains("<model-viewer"));
        assert!(html.contains("ring.glb"));
        assert!(html.contains("poster="));
        assert!(html.contains(MODEL_VIEWER_SCRIPT));
        assert!(!html.contains("<script>ring</script>"));
    }

    #[test]
    fn template_without_poster() {
        let html = ArViewerTemplate {
            title: "Vase".into(),
            model_url: "/models/vase.glb".into(),
            poster: None,
            viewer_script: MODEL_VIEWER_SCRIPT,
        }
        .render()
        .unwrap();
        assert!(!html.contains("poster="));
    }
}
