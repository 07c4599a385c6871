use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{error::AppError, models::ProductSummary, services::storage::UploadedImage};

/// Upper bound on images attached to a single product.
pub const MAX_PRODUCT_IMAGES: usize = 6;

/// Parsed multipart body of a product-create request.
#[derive(Debug, Default)]
pub struct CreateProductForm {
    pub category: Option<String>,
    pub description: Option<String>,
    pub images: Vec<UploadedImage>,
}

/// Validated product-create input.
#[derive(Debug)]
pub struct NewProduct {
    pub category: String,
    pub description: String,
    pub images: Vec<UploadedImage>,
}

impl CreateProductForm {
    /// More than [`MAX_PRODUCT_IMAGES`] is rejected outright, never truncated.
    pub fn validate(self) -> Result<NewProduct, AppError> {
        if self.images.len() > MAX_PRODUCT_IMAGES {
            return Err(AppError::bad_request(format!(
                "too many images (max {MAX_PRODUCT_IMAGES})"
            )));
        }
        let category = self
            .category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .ok_or_else(|| AppError::bad_request("category required"))?;
        if self.images.is_empty() {
            return Err(AppError::bad_request("images required"));
        }
        Ok(NewProduct {
            category,
            description: self.description.unwrap_or_default(),
            images: self.images,
        })
    }
}

/// Multipart schema, for the docs only.
#[derive(Debug, ToSchema)]
pub struct CreateProductMultipart {
    pub category: String,
    pub description: Option<String>,
    #[schema(value_type = Vec<String>)]
    pub images: Vec<Vec<u8>>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProductRequest {
    pub category: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductChanges {
    pub category: String,
    pub description: String,
    pub is_active: Option<bool>,
}

impl UpdateProductRequest {
    pub fn validate(self) -> Result<ProductChanges, AppError> {
        let category = self
            .category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .ok_or_else(|| AppError::bad_request("category required"))?;
        Ok(ProductChanges {
            category,
            description: self.description.unwrap_or_default(),
            is_active: self.is_active,
        })
    }
}

#[derive(Serialize, ToSchema)]
#[serde(transparent)]
pub struct ProductList {
    #[schema(value_type = Vec<ProductSummary>)]
    pub items: Vec<ProductSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    fn image(name: &str) -> UploadedImage {
        UploadedImage {
            file_name: name.to_string(),
            content_type: "image/png".to_string(),
            bytes: Bytes::from_static(b"\x89PNG"),
        }
    }

    fn form(category: Option<&str>, images: usize) -> CreateProductForm {
        CreateProductForm {
            category: category.map(str::to_string),
            description: None,
            images: (0..images).map(|i| image(&format!("{i}.png"))).collect(),
        }
    }

    #[test]
    fn create_requires_category() {
        let err = form(None, 1).validate().unwrap_err();
        assert_eq!(err.to_string(), "category required");

        let err = form(Some("   "), 1).validate().unwrap_err();
        assert_eq!(err.to_string(), "category required");
    }

    #[test]
    fn create_requires_images() {
        let err = form(Some("rings"), 0).validate().unwrap_err();
        assert_eq!(err.to_string(), "images required");
    }

    #[test]
    fn six_images_are_accepted() {
        let product = form(Some("rings"), MAX_PRODUCT_IMAGES).validate().unwrap();
        assert_eq!(product.images.len(), 6);
        assert_eq!(product.category, "rings");
        assert_eq!(product.description, "");
    }

    #[test]
    fn seven_images_are_rejected() {
        let err = form(Some("rings"), 7).validate().unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
        assert_eq!(err.to_string(), "too many images (max 6)");
    }

    #[test]
    fn update_defaults_description_to_empty() {
        let changes = UpdateProductRequest {
            category: Some("bangles".into()),
            description: None,
            is_active: None,
        }
        .validate()
        .unwrap();
        assert_eq!(
            changes,
            ProductChanges {
                category: "bangles".into(),
                description: String::new(),
                is_active: None,
            }
        );
    }

    #[test]
    fn update_requires_category() {
        let err = UpdateProductRequest {
            category: None,
            description: Some("x".into()),
            is_active: Some(false),
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.to_string(), "category required");
    }
}
