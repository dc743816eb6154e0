// src/config/mod.rs
// Configuration: environment variables layered over ~/.womancart/config.toml

pub mod env;
pub mod file;

pub use env::{ApiKeys, ConfigValidation, EnvConfig, GenerationConfig, ServerConfig};
pub use file::HeroFileConfig;
