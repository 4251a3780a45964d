pub mod data;
pub mod io;

pub use data::{resolve_base_url, Config, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use io::ConfigError;
