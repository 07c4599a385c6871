use uuid::Uuid;

use crate::{
    db::DbPool,
    dto::{analytics::AnalyticsSummary, events::NewEvent},
    error::{AppError, AppResult},
    models::Event,
    routes::params::LookbackWindow,
};

/// Events are append-only; there is no update or delete path.
pub async fn record_event(pool: &DbPool, event: NewEvent) -> AppResult<Event> {
    let row = sqlx::query_as::<_, Event>(
        r#"
        INSERT INTO events (id, shop_id, product_id, type)
        VALUES ($1, $2, $3, $4)
        RETURNING id, shop_id, product_id, type, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(event.shop_id)
    .bind(event.product_id)
    .bind(&event.event_type)
    .fetch_one(pool)
    .await
    .map_err(unknown_reference)?;

    tracing::debug!(shop_id = %row.shop_id, event_type = %row.event_type, "event recorded");
    Ok(row)
}

/// Foreign-key violations mean the event names a shop or product that does
/// not exist (or no longer does).
fn unknown_reference(err: sqlx::Error) -> AppError {
    let Some(db) = err.as_database_error().filter(|db| db.is_foreign_key_violation()) else {
        return err.into();
    };
    if db.constraint().is_some_and(|name| name.contains("product_id")) {
        AppError::bad_request("unknown product_id")
    } else {
        AppError::bad_request("unknown shop_id")
    }
}

pub async fn summarize(
    pool: &DbPool,
    shop_id: Uuid,
    window: LookbackWindow,
) -> AppResult<AnalyticsSummary> {
    let rows: Vec<(String, i64)> = sqlx::query_as(
        r#"
        SELECT type, COUNT(*)::bigint AS count
        FROM events
        WHERE shop_id = $1
          AND created_at >= NOW() - make_interval(days => $2)
        GROUP BY type
        "#,
    )
    .bind(shop_id)
    .bind(window.days())
    .fetch_all(pool)
    .await?;

    Ok(AnalyticsSummary::from_counts(rows))
}
