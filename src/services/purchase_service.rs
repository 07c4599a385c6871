//! WhatsApp purchase links and shop QR codes.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Luma};
use qrcode::QrCode;
use sqlx::FromRow;
use uuid::Uuid;

use crate::{db::DbPool, error::AppResult};

const WHATSAPP_BASE: &str = "https://wa.me";

#[derive(Debug, Clone, FromRow)]
pub struct PurchaseTarget {
    pub category: String,
    pub image_urls: Vec<String>,
    pub shop_name: String,
    pub phone: Option<String>,
}

pub async fn find_purchase_target(pool: &DbPool, product_id: Uuid) -> AppResult<Option<PurchaseTarget>> {
    let target = sqlx::query_as::<_, PurchaseTarget>(
        r#"
        SELECT p.category, p.image_urls, s.name AS shop_name, s.phone
        FROM products p
        JOIN shops s ON s.id = p.shop_id
        WHERE p.id = $1
        "#,
    )
    .bind(product_id)
    .fetch_optional(pool)
    .await?;
    Ok(target)
}

/// Digits of `phone` in international form, without a `+`.
///
/// Leading zeros (trunk prefix) are dropped. A number that already carries
/// `country_code` and is longer than a national number is kept as is.
pub fn international_number(country_code: &str, phone: &str) -> Option<String> {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return None;
    }
    if digits.len() > 10 && digits.starts_with(country_code) {
        Some(digits.to_string())
    } else {
        Some(format!("{country_code}{digits}"))
    }
}

/// Relative upload paths become absolute so they are clickable in chat.
pub fn absolute_url(public_base_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        path.to_string()
    } else {
        format!(
            "{}/{}",
            public_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

pub fn purchase_message(shop_name: &str, product_name: &str, image_url: Option<&str>) -> String {
    match image_url {
        Some(url) => format!("Hi {shop_name}, I would like to buy {product_name}.\n{url}"),
        None => format!("Hi {shop_name}, I would like to buy {product_name}."),
    }
}

/// Prefilled chat link, or `None` when the shop has no usable phone.
pub fn whatsapp_link(
    country_code: &str,
    public_base_url: &str,
    target: &PurchaseTarget,
) -> Option<String> {
    let number = international_number(country_code, target.phone.as_deref()?)?;
    let image = target
        .image_urls
        .first()
        .map(|path| absolute_url(public_base_url, path));
    let text = purchase_message(&target.shop_name, &target.category, image.as_deref());
    Some(format!(
        "{WHATSAPP_BASE}/{number}?text={}",
        urlencoding::encode(&text)
    ))
}

/// PNG-encoded QR code for `data`.
pub fn qr_png(data: &str) -> anyhow::Result<Vec<u8>> {
    let code = QrCode::new(data.as_bytes()).map_err(|e| anyhow::anyhow!(e.to_string()))?;
    let img = code
        .render::<Luma<u8>>()
        .min_dimensions(256, 256)
        .build();
    let mut buf = Cursor::new(Vec::new());
    DynamicImage::ImageLuma8(img).write_to(&mut buf, ImageFormat::Png)?;
    Ok(buf.into_inner())
}
