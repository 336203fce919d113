pub mod email;
pub mod handlers;
pub mod health;
pub mod schema;
