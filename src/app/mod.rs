pub mod clock;
pub mod commands;
pub mod dashboard;
pub mod favorites;
pub mod settings;
