//! TOML config loading and the default template.

mod loader;
mod template;

#[cfg(test)]
mod tests;

pub use loader::{load_from_path, load_from_str};
pub use template::default_config_toml;
