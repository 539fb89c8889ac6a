mod config;
mod discovery;
mod io;

pub use config::ConfigError;
pub use discovery::DiscoveryError;
pub use io::IoError;
