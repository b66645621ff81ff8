pub mod chatbot;
pub mod member_detail;
pub mod members;
pub mod products;
