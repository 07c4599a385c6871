use serde::Serialize;
use utoipa::ToSchema;

/// Event counts for a shop, bucketed by the four known event types.
#[derive(Debug, Default, Clone, Copy, Serialize, ToSchema, PartialEq, Eq)]
pub struct AnalyticsSummary {
    pub visitors: i64,
    pub product_views: i64,
    pub whatsapp: i64,
    pub ar_views: i64,
}

impl AnalyticsSummary {
    /// Fold `(type, count)` rows into buckets. Unknown types are ignored.
    pub fn from_counts<I, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = (S, i64)>,
        S: AsRef<str>,
    {
        let mut summary = Self::default();
        for (event_type, count) in rows {
            match event_type.as_ref() {
                "shop_view" => summary.visitors += count,
                "product_view" => summary.product_views += count,
                "whatsapp" => summary.whatsapp += count,
                "ar_view" => summary.ar_views += count,
                _ => {}
            }
        }
        summary
    }
}
