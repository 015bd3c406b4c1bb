pub mod pagination_bar;
pub mod search_input;
pub mod stat_card;
