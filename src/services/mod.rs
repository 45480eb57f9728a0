pub mod product_service;
pub mod user_service;
