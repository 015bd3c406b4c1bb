//! Pivots raw supplier price windows into the row-per-date table the
//! price trend chart plots: one column per supplier, one row per
//! distinct window start, each cell the price valid on that date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::a003_ingredient_price::{parse_iso_date, SupplierRef};

/// Raw price window as served by `/analytics/price-trends?ingredient_id=`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceTrendPoint {
    pub id: i64,

    /// Decimal-in-a-string, as the API serializes decimals.
    pub price: String,

    /// Window start (inclusive), ISO date.
    pub valid_from: String,

    /// Window end (exclusive), ISO date. None = open-ended.
    pub valid_to: Option<String>,

    pub supplier: SupplierRef,
}

#[derive(Debug, Error, PartialEq)]
pub enum PriceSeriesError {
    /// A price or date field of the named record could not be parsed.
    /// Never coerced to 0 or NaN: a malformed record aborts the series.
    #[error("price record {id}: cannot parse {field} {value:?}")]
    Parse {
        id: i64,
        field: &'static str,
        value: String,
    },

    /// `valid_to` is not strictly after `valid_from`: the half-open
    /// window [valid_from, valid_to) would be empty or inverted.
    #[error("price record {id}: valid_to {valid_to} is not after valid_from {valid_from}")]
    InvalidInterval {
        id: i64,
        valid_from: NaiveDate,
        valid_to: NaiveDate,
    },
}

/// One chart row: the x-axis date plus one cell per supplier column.
/// `None` is "no price valid on this date" — rendered as a gap, never
/// as zero.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeriesRow {
    pub date: NaiveDate,
    pub values: Vec<Option<f64>>,
}

/// The pivoted table. `suppliers[i]` names the column `values[i]` of
/// every row belongs to; column order is first appearance in the input.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PriceSeriesTable {
    pub suppliers: Vec<String>,
    pub rows: Vec<PriceSeriesRow>,
}

struct ParsedWindow {
    supplier_col: usize,
    price: f64,
    from: NaiveDate,
    to: Option<NaiveDate>,
}

/// Resolve the validity windows into a chart table.
///
/// Coverage rule: a window covers date `d` iff `valid_from <= d` and
/// (`valid_to` is absent or `d < valid_to`). Open-ended windows cover
/// every date from their start onward. When windows of one supplier
/// overlap, the first matching record in input order wins; overlaps are
/// not rejected.
///
/// Pure and deterministic: same input always yields the same table.
pub fn resolve_price_series(
    points: &[PriceTrendPoint],
) -> Result<PriceSeriesTable, PriceSeriesError> {
    if points.is_empty() {
        return Ok(PriceSeriesTable::default());
    }

    // Column axis: suppliers in first-seen order. Window order within a
    // supplier stays as given, which is what makes first-match-wins
    // deterministic.
    let mut suppliers: Vec<String> = Vec::new();
    let mut windows: Vec<ParsedWindow> = Vec::with_capacity(points.len());

    for p in points {
        let supplier_col = match suppliers.iter().position(|s| *s == p.supplier.name) {
            Some(i) => i,
            None => {
                suppliers.push(p.supplier.name.clone());
                suppliers.len() - 1
            }
        };

        let price: f64 = p.price.trim().parse().map_err(|_| PriceSeriesError::Parse {
            id: p.id,
            field: "price",
            value: p.price.clone(),
        })?;

        let from = parse_iso_date(&p.valid_from).ok_or_else(|| PriceSeriesError::Parse {
            id: p.id,
            field: "valid_from",
            value: p.valid_from.clone(),
        })?;

        let to = match &p.valid_to {
            Some(raw) => {
                let to = parse_iso_date(raw).ok_or_else(|| PriceSeriesError::Parse {
                    id: p.id,
                    field: "valid_to",
                    value: raw.clone(),
                })?;
                if to <= from {
                    return Err(PriceSeriesError::InvalidInterval {
                        id: p.id,
                        valid_from: from,
                        valid_to: to,
                    });
                }
                Some(to)
            }
            None => None,
        };

        windows.push(ParsedWindow {
            supplier_col,
            price,
            from,
            to,
        });
    }

    // Row axis: distinct window starts, chronological. Calendar-date
    // ordering, not string ordering.
    let mut dates: Vec<NaiveDate> = windows.iter().map(|w| w.from).collect();
    dates.sort_unstable();
    dates.dedup();

    let rows = dates
        .into_iter()
        .map(|date| {
            let values = (0..suppliers.len())
                .map(|col| {
                    windows
                        .iter()
                        .find(|w| w.supplier_col == col && w.covers(date))
                        .map(|w| w.price)
                })
                .collect();
            PriceSeriesRow { date, values }
        })
        .collect();

    Ok(PriceSeriesTable { suppliers, rows })
}

impl ParsedWindow {
    fn covers(&self, date: NaiveDate) -> bool {
        self.from <= date && self.to.map_or(true, |to| date < to)
    }
}

impl PriceSeriesTable {
    /// Cell lookup by supplier name, for the detail table and tests.
    pub fn value_on(&self, date: NaiveDate, supplier: &str) -> Option<f64> {
        let col = self.suppliers.iter().position(|s| s == supplier)?;
        self.rows
            .iter()
            .find(|r| r.date == date)
            .and_then(|r| r.values[col])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(
        id: i64,
        supplier: &str,
        price: &str,
        valid_from: &str,
        valid_to: Option<&str>,
    ) -> PriceTrendPoint {
        PriceTrendPoint {
            id,
            price: price.into(),
            valid_from: valid_from.into(),
            valid_to: valid_to.map(Into::into),
            supplier: SupplierRef {
                id,
                name: supplier.into(),
            },
        }
    }

    fn date(s: &str) -> NaiveDate {
        parse_iso_date(s).unwrap()
    }

    #[test]
    fn test_empty_input_yields_empty_table() {
        let table = resolve_price_series(&[]).unwrap();
        assert!(table.rows.is_empty());
        assert!(table.suppliers.is_empty());
    }

    #[test]
    fn test_open_ended_window_covers_later_dates() {
        // A closed until Feb, B open-ended from mid-January. On B's own
        // start date both prices are valid.
        let points = vec![
            point(1, "Atacadão", "10", "2024-01-01", Some("2024-02-01")),
            point(2, "Hortifruti", "12", "2024-01-15", None),
        ];
        let table = resolve_price_series(&points).unwrap();

        assert_eq!(table.suppliers, vec!["Atacadão", "Hortifruti"]);
        assert_eq!(table.value_on(date("2024-01-15"), "Atacadão"), Some(10.0));
        assert_eq!(table.value_on(date("2024-01-15"), "Hortifruti"), Some(12.0));
    }

    #[test]
    fn test_window_start_is_a_lower_bound() {
        // Before its valid_from, a supplier has no price: the cell is a
        // gap (None), never zero.
        let points = vec![
            point(1, "Atacadão", "10", "2024-01-01", Some("2024-02-01")),
            point(2, "Hortifruti", "12", "2024-01-15", None),
        ];
        let table = resolve_price_series(&points).unwrap();
        assert_eq!(table.value_on(date("2024-01-01"), "Hortifruti"), None);
    }

    #[test]
    fn test_closed_window_end_is_exclusive() {
        let points = vec![
            point(1, "Atacadão", "10", "2024-01-01", Some("2024-02-01")),
            point(2, "Atacadão", "11", "2024-02-01", Some("2024-03-01")),
        ];
        let table = resolve_price_series(&points).unwrap();
        // On Feb 1st the first window is over, the second one applies.
        assert_eq!(table.value_on(date("2024-02-01"), "Atacadão"), Some(11.0));
    }

    #[test]
    fn test_overlap_first_record_in_input_order_wins() {
        let points = vec![
            point(1, "Atacadão", "10", "2024-01-01", Some("2024-03-01")),
            point(2, "Atacadão", "99", "2024-02-01", Some("2024-03-01")),
        ];
        let table = resolve_price_series(&points).unwrap();
        assert_eq!(table.value_on(date("2024-02-01"), "Atacadão"), Some(10.0));
    }

    #[test]
    fn test_rows_chronological_regardless_of_input_order() {
        let points = vec![
            point(1, "B", "5", "2024-03-10", None),
            point(2, "A", "3", "2024-01-02", None),
            point(3, "A", "4", "2024-02-20", None),
        ];
        let table = resolve_price_series(&points).unwrap();
        let dates: Vec<NaiveDate> = table.rows.iter().map(|r| r.date).collect();
        assert_eq!(
            dates,
            vec![date("2024-01-02"), date("2024-02-20"), date("2024-03-10")]
        );
        // Column identity survives the shuffle even though order is
        // first-seen.
        assert_eq!(table.value_on(date("2024-03-10"), "A"), Some(3.0));
    }

    #[test]
    fn test_duplicate_start_dates_collapse_to_one_row() {
        let points = vec![
            point(1, "A", "3", "2024-01-01", None),
            point(2, "B", "7", "2024-01-01", None),
        ];
        let table = resolve_price_series(&points).unwrap();
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].values, vec![Some(3.0), Some(7.0)]);
    }

    #[test]
    fn test_zero_price_is_not_a_gap() {
        let points = vec![point(1, "A", "0", "2024-01-01", None)];
        let table = resolve_price_series(&points).unwrap();
        assert_eq!(table.value_on(date("2024-01-01"), "A"), Some(0.0));
    }

    #[test]
    fn test_malformed_price_names_the_record() {
        let points = vec![
            point(7, "A", "3.50", "2024-01-01", None),
            point(8, "A", "R$ 4,20", "2024-02-01", None),
        ];
        let err = resolve_price_series(&points).unwrap_err();
        assert_eq!(
            err,
            PriceSeriesError::Parse {
                id: 8,
                field: "price",
                value: "R$ 4,20".into(),
            }
        );
    }

    #[test]
    fn test_malformed_date_names_the_record() {
        let points = vec![point(3, "A", "3.50", "01/02/2024", None)];
        let err = resolve_price_series(&points).unwrap_err();
        assert!(matches!(
            err,
            PriceSeriesError::Parse {
                id: 3,
                field: "valid_from",
                ..
            }
        ));
    }

    #[test]
    fn test_inverted_interval_is_rejected() {
        let points = vec![point(5, "A", "3.50", "2024-02-01", Some("2024-01-01"))];
        let err = resolve_price_series(&points).unwrap_err();
        assert!(matches!(err, PriceSeriesError::InvalidInterval { id: 5, .. }));

        // Empty window (equal boundaries) is rejected as well.
        let points = vec![point(6, "A", "3.50", "2024-02-01", Some("2024-02-01"))];
        assert!(matches!(
            resolve_price_series(&points).unwrap_err(),
            PriceSeriesError::InvalidInterval { id: 6, .. }
        ));
    }

    #[test]
    fn test_idempotent_on_same_input() {
        let points = vec![
            point(1, "Atacadão", "10", "2024-01-01", Some("2024-02-01")),
            point(2, "Hortifruti", "12", "2024-01-15", None),
        ];
        let first = resolve_price_series(&points).unwrap();
        let second = resolve_price_series(&points).unwrap();
        assert_eq!(first, second);
    }
}
