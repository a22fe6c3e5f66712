pub mod account_repo;
pub mod item_repo;
pub mod mongo;
pub mod repository_error;
