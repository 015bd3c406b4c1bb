pub mod aggregate;

pub use aggregate::{Ingredient, IngredientDto};
