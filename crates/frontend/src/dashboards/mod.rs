pub mod d400_overview;
pub mod d401_price_trends;
pub mod d402_menu_matrix;
pub mod d403_traffic_heatmap;
pub mod reports;
