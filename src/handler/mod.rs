pub mod account_handler;
pub mod item_handler;
