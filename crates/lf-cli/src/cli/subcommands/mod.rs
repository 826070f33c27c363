pub mod auth;
pub mod data;
pub mod entry;
pub mod file;
pub mod image;
pub mod schema;
pub mod table;
pub mod text;

pub use auth::AuthCommands;
pub use data::DataCommands;
pub use entry::EntryCommands;
pub use file::FileCommands;
pub use image::ImageCommands;
pub use schema::SchemaTarget;
pub use table::TableCommands;
pub use text::TextCommands;
