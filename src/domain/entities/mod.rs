pub mod query;
pub mod user;
