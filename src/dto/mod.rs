pub mod account_dto;
pub mod item_dto;
