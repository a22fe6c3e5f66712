pub mod account_service;
pub mod item_service;
