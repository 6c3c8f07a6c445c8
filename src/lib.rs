pub mod launches;
pub mod server;
pub mod settings;
