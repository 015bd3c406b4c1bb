pub mod aggregate;

pub use aggregate::{parse_iso_date, IngredientPrice, IngredientPriceDto, IngredientRef, SupplierRef};
