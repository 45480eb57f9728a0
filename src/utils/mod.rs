pub mod cors;
pub mod password;
pub mod token;
