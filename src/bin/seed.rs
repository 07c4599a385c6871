//! Out-of-band provisioning: the only way admin accounts come into existence.

use shop_catalog_api::{
    config::AppConfig,
    db::{create_pool, run_migrations},
    services::auth_service::hash_password,
};
use uuid::Uuid;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(&config.database_url).await?;
    // Ensure migrations are applied.
    run_migrations(&pool).await?;

    let shop_name = std::env::var("SEED_SHOP_NAME").unwrap_or_else(|_| "Demo Shop".into());
    let shop_phone = std::env::var("SEED_SHOP_PHONE").unwrap_or_else(|_| "9876543210".into());
    let email = std::env::var("SEED_ADMIN_EMAIL").unwrap_or_else(|_| "admin@example.com".into());
    let password = std::env::var("SEED_ADMIN_PASSWORD").unwrap_or_else(|_| "admin123".into());

    let shop_id = ensure_shop(&pool, &shop_name, &shop_phone).await?;
    let admin_id = ensure_admin(&pool, shop_id, &email, &password).await?;

    println!("Seed completed. Shop ID: {shop_id}, Admin ID: {admin_id}");
    Ok(())
}

async fn ensure_shop(pool: &sqlx::PgPool, name: &str, phone: &str) -> anyhow::Result<Uuid> {
    let existing: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM shops WHERE name = $1")
        .bind(name)
        .fetch_optional(pool)
        .await?;
    if let Some((id,)) = existing {
        return Ok(id);
    }

    let (id,): (Uuid,) = sqlx::query_as(
        r#"
        INSERT INTO shops (id, name, tagline, phone)
        VALUES ($1, $2, $3, $4)
        RETURNING id
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(name)
    .bind("Handpicked for you")
    .bind(phone)
    .fetch_one(pool)
    .await?;

    println!("Created shop {name}");
    Ok(id)
}

async fn ensure_admin(
    pool: &sqlx::PgPool,
    shop_id: Uuid,
    email: &str,
    password: &str,
) -> anyhow::Result<Uuid> {
    let password_hash = hash_password(password)?;

    let (id,): (Uuid,) = sqlx::query_as(
        r#"
        INSERT INTO admins (id, email, password_hash, shop_id, role)
        VALUES ($1, $2, $3, $4, 'admin')
        ON CONFLICT (email) DO UPDATE SET password_hash = EXCLUDED.password_hash, shop_id = EXCLUDED.shop_id
        RETURNING id
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(email)
    .bind(password_hash)
    .bind(shop_id)
    .fetch_one(pool)
    .await?;

    println!("Ensured admin {email} for shop {shop_id}");
    Ok(id)
}
