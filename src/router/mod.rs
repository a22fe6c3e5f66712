pub mod account_router;
pub mod item_router;
