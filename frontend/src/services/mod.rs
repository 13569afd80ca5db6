pub mod config;
pub mod logging;

pub use logging::Logger;
