pub mod configuration;
pub mod terminal;
