pub mod color;
pub mod product;
pub mod user;
