use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Embedded ingredient reference on price reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientRef {
    pub id: i64,
    pub name: String,
}

/// Embedded supplier reference on price reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplierRef {
    pub id: i64,
    pub name: String,
}

/// Preço de ingrediente por fornecedor, `/api/ingredient-prices`.
///
/// `price` arrives as a decimal-in-a-string (the API serializes decimals
/// that way); parsing happens at the use site so a malformed value
/// surfaces as an error instead of a silent 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientPrice {
    pub id: i64,

    pub ingredient_id: i64,

    pub supplier_id: i64,

    pub price: String,

    pub purchase_unit: String,

    pub purchase_unit_quantity: f64,

    /// Start of the validity window (inclusive), ISO date.
    pub valid_from: String,

    /// End of the validity window (exclusive), ISO date. None = open-ended.
    pub valid_to: Option<String>,

    pub ingredient: IngredientRef,
    pub supplier: SupplierRef,
}

/// Payload for create/update of an ingredient price.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct IngredientPriceDto {
    pub id: Option<i64>,

    pub ingredient_id: Option<i64>,

    pub supplier_id: Option<i64>,

    pub price: String,

    pub purchase_unit: String,

    pub purchase_unit_quantity: String,

    pub valid_from: String,

    pub valid_to: String,
}

impl IngredientPriceDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.ingredient_id.is_none() {
            return Err("Selecione um ingrediente".into());
        }
        if self.supplier_id.is_none() {
            return Err("Selecione um fornecedor".into());
        }
        let price: f64 = self
            .price
            .trim()
            .parse()
            .map_err(|_| "Preço inválido".to_string())?;
        if price < 0.0 {
            return Err("Preço não pode ser negativo".into());
        }
        let qty: f64 = self
            .purchase_unit_quantity
            .trim()
            .parse()
            .map_err(|_| "Quantidade inválida".to_string())?;
        if qty <= 0.0 {
            return Err("Quantidade deve ser maior que zero".into());
        }
        if self.purchase_unit.trim().is_empty() {
            return Err("Informe a unidade de compra".into());
        }

        let from = parse_iso_date(&self.valid_from)
            .ok_or_else(|| "Data inicial inválida".to_string())?;
        if !self.valid_to.trim().is_empty() {
            let to = parse_iso_date(&self.valid_to)
                .ok_or_else(|| "Data final inválida".to_string())?;
            // Half-open window [valid_from, valid_to): the end must be
            // strictly after the start.
            if to <= from {
                return Err("Data final deve ser posterior à data inicial".into());
            }
        }
        Ok(())
    }
}

/// Parse "YYYY-MM-DD", tolerating a trailing time component.
pub fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    let date_part = s.split('T').next().unwrap_or(s);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> IngredientPriceDto {
        IngredientPriceDto {
            id: None,
            ingredient_id: Some(1),
            supplier_id: Some(2),
            price: "12.50".into(),
            purchase_unit: "kg".into(),
            purchase_unit_quantity: "5".into(),
            valid_from: "2024-01-01".into(),
            valid_to: "2024-02-01".into(),
        }
    }

    #[test]
    fn test_validate_ok() {
        assert!(dto().validate().is_ok());
    }

    #[test]
    fn test_validate_open_ended_window() {
        let mut d = dto();
        d.valid_to = "".into();
        assert!(d.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_inverted_window() {
        let mut d = dto();
        d.valid_to = "2023-12-31".into();
        assert!(d.validate().is_err());

        // Equal boundaries denote an empty window, also rejected.
        d.valid_to = d.valid_from.clone();
        assert!(d.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_numeric_price() {
        let mut d = dto();
        d.price = "doze reais".into();
        assert!(d.validate().is_err());
    }

    #[test]
    fn test_parse_iso_date_with_time_suffix() {
        assert_eq!(
            parse_iso_date("2024-03-15T00:00:00.000000Z"),
            NaiveDate::from_ymd_opt(2024, 3, 15)
        );
        assert!(parse_iso_date("15/03/2024").is_none());
    }
}
