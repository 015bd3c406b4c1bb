use serde::{Deserialize, Serialize};

/// One ingredient line of a tech sheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechSheetItem {
    pub ingredient_id: i64,

    /// Quantity in the ingredient's stock unit, per yield.
    pub quantity: f64,
}

/// Ficha técnica (tech sheet): a dish definition with its ingredient
/// quantities and sale price, `/api/dishes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechSheet {
    pub id: i64,
    pub name: String,

    /// Portions one preparation yields.
    pub yield_portions: f64,

    pub sale_price: f64,

    pub prep_time_minutes: f64,

    pub instructions: String,

    #[serde(default)]
    pub items: Vec<TechSheetItem>,
}

/// Editable line of the tech sheet form. Quantity is kept as typed text
/// and parsed on validate, so partial input never panics the form.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TechSheetItemDto {
    pub ingredient_id: Option<i64>,

    pub quantity: String,
}

/// Payload for create/update of a tech sheet.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TechSheetDto {
    pub id: Option<i64>,
    pub name: String,

    pub yield_portions: String,

    pub sale_price: String,

    pub prep_time_minutes: String,

    pub instructions: String,

    #[serde(default)]
    pub items: Vec<TechSheetItemDto>,
}

impl TechSheetDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().len() < 3 {
            return Err("Nome deve ter pelo menos 3 caracteres".into());
        }
        if self.name.trim().len() > 100 {
            return Err("Nome deve ter no máximo 100 caracteres".into());
        }
        let portions: f64 = self
            .yield_portions
            .trim()
            .parse()
            .map_err(|_| "Rendimento inválido".to_string())?;
        if portions <= 0.0 {
            return Err("Rendimento deve ser maior que zero".into());
        }
        let price: f64 = self
            .sale_price
            .trim()
            .parse()
            .map_err(|_| "Preço de venda inválido".to_string())?;
        if price < 0.0 {
            return Err("Preço de venda não pode ser negativo".into());
        }
        let minutes: f64 = self
            .prep_time_minutes
            .trim()
            .parse()
            .map_err(|_| "Tempo de preparo inválido".to_string())?;
        if minutes <= 0.0 {
            return Err("Tempo de preparo deve ser maior que zero".into());
        }
        let instructions = self.instructions.trim();
        if instructions.len() < 10 {
            return Err("Modo de preparo deve ter pelo menos 10 caracteres".into());
        }
        if instructions.len() > 1000 {
            return Err("Modo de preparo deve ter no máximo 1000 caracteres".into());
        }

        for (i, item) in self.items.iter().enumerate() {
            if item.ingredient_id.is_none() {
                return Err(format!("Linha {}: selecione um ingrediente", i + 1));
            }
            let qty: f64 = item
                .quantity
                .trim()
                .parse()
                .map_err(|_| format!("Linha {}: quantidade inválida", i + 1))?;
            if qty <= 0.0 {
                return Err(format!("Linha {}: quantidade deve ser maior que zero", i + 1));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> TechSheetDto {
        TechSheetDto {
            id: None,
            name: "Moqueca de Salmão".into(),
            yield_portions: "4".into(),
            sale_price: "89.90".into(),
            prep_time_minutes: "45".into(),
            instructions: "Refogar, adicionar o leite de coco e cozinhar.".into(),
            items: vec![TechSheetItemDto {
                ingredient_id: Some(12),
                quantity: "0.8".into(),
            }],
        }
    }

    #[test]
    fn test_validate_ok() {
        assert!(dto().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_short_instructions() {
        let mut d = dto();
        d.instructions = "Cozinhar".into();
        assert!(d.validate().is_err());
    }

    #[test]
    fn test_validate_flags_the_offending_item_line() {
        let mut d = dto();
        d.items.push(TechSheetItemDto {
            ingredient_id: Some(3),
            quantity: "-1".into(),
        });
        let err = d.validate().unwrap_err();
        assert!(err.starts_with("Linha 2"), "got: {err}");
    }
}
