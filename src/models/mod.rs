pub mod claims;
pub mod credentials;
pub mod message_response;
pub mod product;
pub mod token_response;
pub mod user;
