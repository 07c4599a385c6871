use sea_orm::EntityTrait;
use uuid::Uuid;

use crate::{
    db::OrmConn,
    entity::shops::{Entity as Shops, Model as ShopModel},
    error::{AppError, AppResult},
    models::Shop,
};

pub async fn get_shop(orm: &OrmConn, id: Uuid) -> AppResult<Shop> {
    Shops::find_by_id(id)
        .one(orm)
        .await?
        .map(shop_from_entity)
        .ok_or(AppError::NotFound)
}

/// Public link a shop's QR code points at.
pub fn catalog_url(public_base_url: &str, shop_id: Uuid) -> String {
    format!("{}/?shop={}", public_base_url.trim_end_matches('/'), shop_id)
}

fn shop_from_entity(model: ShopModel) -> Shop {
    Shop {
        id: model.id,
        name: model.name,
        tagline: model.tagline,
        logo_url: model.logo_url,
        phone: model.phone,
        address: model.address,
    }
}
