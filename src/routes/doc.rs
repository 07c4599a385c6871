use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        analytics::AnalyticsSummary,
        auth::{LoginRequest, LoginResponse},
        events::CreateEventRequest,
        products::{CreateProductMultipart, ProductList, UpdateProductRequest},
    },
    error::ErrorBody,
    models::{Product, ProductSummary, Shop},
    response::{OkResponse, StatusResponse},
    routes::{admin, analytics, auth, buy, health, params, products, shops},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        auth::login,
        admin::create_product,
        admin::update_product,
        admin::delete_product,
        shops::get_shop,
        shops::shop_qr,
        products::list_products,
        products::get_product,
        analytics::record_event,
        analytics::analytics,
        buy::buy
    ),
    components(
        schemas(
            Shop,
            Product,
            ProductSummary,
            ProductList,
            CreateProductMultipart,
            UpdateProductRequest,
            LoginRequest,
            LoginResponse,
            CreateEventRequest,
            AnalyticsSummary,
            params::ShopQuery,
            params::AnalyticsQuery,
            StatusResponse,
            OkResponse,
            ErrorBody,
            health::HealthData
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Auth", description = "Admin login"),
        (name = "Admin", description = "Tenant-scoped product management"),
        (name = "Shops", description = "Shop details and QR codes"),
        (name = "Products", description = "Customer-facing catalog"),
        (name = "Analytics", description = "Visit events and counts"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
