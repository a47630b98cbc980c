pub mod a001_item_category;
pub mod a002_item;
pub mod a003_market_place;
