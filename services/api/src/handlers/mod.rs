pub mod offer;
pub mod order;
pub mod root;
pub mod user;
