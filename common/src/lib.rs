pub mod chat;
pub mod model;
pub mod requests;
pub mod sync;
