use serde::{Deserialize, Serialize};

/// Insumo (ingredient) as the API serves it from `/api/ingredients`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: i64,
    pub name: String,

    /// Stock unit the kitchen counts this ingredient in ("kg", "l", "un").
    pub unit: String,

    pub min_stock: f64,

    /// Shelf life in days; None for non-expiring stock.
    pub shelf_life_days: Option<f64>,

    pub is_perishable: bool,
}

impl Ingredient {
    pub fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.unit)
    }
}

/// Payload for create/update of an ingredient.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct IngredientDto {
    pub id: Option<i64>,
    pub name: String,
    pub unit: String,

    pub min_stock: f64,

    pub shelf_life_days: Option<f64>,

    pub is_perishable: bool,
}

impl IngredientDto {
    /// Field-level validation, mirrored by the form before submit.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().len() < 2 {
            return Err("Nome deve ter pelo menos 2 caracteres".into());
        }
        if self.name.trim().len() > 100 {
            return Err("Nome deve ter no máximo 100 caracteres".into());
        }
        if self.unit.trim().is_empty() {
            return Err("Selecione uma unidade".into());
        }
        if self.min_stock < 0.0 {
            return Err("Estoque mínimo não pode ser negativo".into());
        }
        if let Some(days) = self.shelf_life_days {
            if days <= 0.0 {
                return Err("Validade deve ser maior que zero".into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_ok() {
        let dto = IngredientDto {
            id: None,
            name: "Salmão".into(),
            unit: "kg".into(),
            min_stock: 5.0,
            shelf_life_days: Some(3.0),
            is_perishable: true,
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_short_name_and_missing_unit() {
        let mut dto = IngredientDto {
            name: "S".into(),
            unit: "kg".into(),
            ..Default::default()
        };
        assert!(dto.validate().is_err());

        dto.name = "Sal".into();
        dto.unit = "  ".into();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_deserialize_api_shape() {
        let json = r#"{
            "id": 12,
            "name": "Tomate",
            "unit": "kg",
            "min_stock": 10.5,
            "shelf_life_days": 7,
            "is_perishable": true
        }"#;
        let ing: Ingredient = serde_json::from_str(json).unwrap();
        assert_eq!(ing.id, 12);
        assert_eq!(ing.display_label(), "Tomate (kg)");
    }
}
