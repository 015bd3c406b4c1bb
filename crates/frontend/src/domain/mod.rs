pub mod a001_ingredient;
pub mod a002_supplier;
pub mod a003_ingredient_price;
pub mod a004_tech_sheet;
