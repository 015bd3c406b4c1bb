pub mod aggregate;

pub use aggregate::{TechSheet, TechSheetDto, TechSheetItem, TechSheetItemDto};
