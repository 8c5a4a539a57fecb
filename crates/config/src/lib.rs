// Configuration loading

pub mod session;
pub mod settings;
