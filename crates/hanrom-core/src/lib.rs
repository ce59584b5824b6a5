pub mod romanize;
pub mod settings;
pub mod unicode;
