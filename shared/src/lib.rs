pub mod api;
pub mod auth;
pub mod campaign;
pub mod constants;
pub mod customer;
pub mod prizes;
pub mod rate_limit;
pub mod records;
pub mod validation;
pub mod wheel;
