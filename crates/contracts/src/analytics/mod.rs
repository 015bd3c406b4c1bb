//! Read-only analytics contracts. All aggregation happens server-side;
//! these are the pre-shaped responses of `/api/analytics/*`, consumed
//! as-is by the dashboards. The one exception is `price_series`, which
//! pivots raw validity windows into chart rows on the client.

pub mod price_series;

use serde::{Deserialize, Serialize};

pub use crate::domain::a003_ingredient_price::SupplierRef;
pub use price_series::{
    resolve_price_series, PriceSeriesError, PriceSeriesRow, PriceSeriesTable, PriceTrendPoint,
};

/// One dish plotted on the popularity × profitability matrix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuMatrixItem {
    pub name: String,

    /// Units sold in the period (popularity axis).
    pub qty: f64,

    pub profit_per_dish: f64,

    pub revenue: f64,

    /// Matrix quadrant 1..=4 as classified by the server:
    /// 1 popular+profitable, 2 popular only, 3 profitable only, 4 neither.
    pub category: u8,
}

/// Axis thresholds splitting the matrix into quadrants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatrixThresholds {
    pub popularity_qty: f64,

    pub profitability_per_dish: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuMatrixResponse {
    pub items: Vec<MenuMatrixItem>,
    pub thresholds: MatrixThresholds,
}

/// One matrix quadrant with the dishes that fell into it during the
/// period, `/analytics/menu-matrix-by-category?start=&end=`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatrixCategory {
    pub name: String,
    pub description: String,

    /// Dishes classified into this quadrant. May be absent for an
    /// empty quadrant.
    #[serde(default)]
    pub items: Vec<MenuMatrixItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuMatrixCategoriesResponse {
    /// Keyed "1".."4" by the server; rendered in key order.
    pub categories: std::collections::BTreeMap<String, MatrixCategory>,
}

/// One weekday × hour cell of the traffic heatmap.
///
/// `weekday` ("0" = sunday .. "6") and `hour` ("00".."23") come as
/// strings straight from the SQL grouping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrafficFlowEntry {
    pub weekday: String,
    pub hour: String,
    pub revenue: f64,
}

/// Break-even progress for one day, `/analytics/breakeven`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakevenResponse {
    pub date: String,

    pub fixed_cost: f64,

    /// Revenue threshold at which fixed costs are covered.
    pub breakeven_point: f64,

    pub current_revenue: f64,
}

impl BreakevenResponse {
    /// Share of the break-even target already attained, in percent.
    pub fn attained_pct(&self) -> f64 {
        if self.breakeven_point <= 0.0 {
            return 0.0;
        }
        self.current_revenue / self.breakeven_point * 100.0
    }

    pub fn remaining(&self) -> f64 {
        (self.breakeven_point - self.current_revenue).max(0.0)
    }
}

/// Perishable stock at risk, `/analytics/perishables-alerts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerishableAlert {
    pub ingredient_name: String,

    pub unit: String,

    /// Quantity currently in stock.
    pub stock: f64,

    pub hours_to_expiry: f64,

    /// Projected consumption before expiry, same unit as `stock`.
    pub forecast_use: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakeven_progress() {
        let b = BreakevenResponse {
            date: "2024-05-01".into(),
            fixed_cost: 1200.0,
            breakeven_point: 2000.0,
            current_revenue: 1650.0,
        };
        assert!((b.attained_pct() - 82.5).abs() < 1e-9);
        assert!((b.remaining() - 350.0).abs() < 1e-9);
    }

    #[test]
    fn test_breakeven_over_target_has_no_remaining() {
        let b = BreakevenResponse {
            date: "2024-05-01".into(),
            fixed_cost: 1200.0,
            breakeven_point: 2000.0,
            current_revenue: 2400.0,
        };
        assert_eq!(b.remaining(), 0.0);
        assert!(b.attained_pct() > 100.0);
    }

    #[test]
    fn test_matrix_categories_render_in_key_order() {
        let json = r#"{"categories": {
            "2": {"name": "Cavalo de batalha", "description": "Popular, pouco rentável"},
            "1": {"name": "Estrela", "description": "Popular e rentável"}
        }}"#;
        let resp: MenuMatrixCategoriesResponse = serde_json::from_str(json).unwrap();
        let keys: Vec<_> = resp.categories.keys().cloned().collect();
        assert_eq!(keys, vec!["1", "2"]);
        // A category without an `items` key is an empty quadrant.
        assert!(resp.categories["1"].items.is_empty());
    }

    #[test]
    fn test_matrix_category_carries_its_dishes() {
        let json = r#"{
            "name": "Estrela",
            "description": "Popular e rentável",
            "items": [
                {"name": "Moqueca", "qty": 42.0, "profit_per_dish": 31.5,
                 "revenue": 3775.8, "category": 1}
            ]
        }"#;
        let cat: MatrixCategory = serde_json::from_str(json).unwrap();
        assert_eq!(cat.items.len(), 1);
        assert_eq!(cat.items[0].name, "Moqueca");
        assert_eq!(cat.items[0].category, 1);
    }
}
