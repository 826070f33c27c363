pub mod auth;
pub mod data;
pub mod dispatch;
pub mod entry;
pub mod file;
pub mod image;
pub mod schema;
pub mod shared;
pub mod table;
pub mod text;
