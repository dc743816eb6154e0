// src/lib.rs
// WomanCart shopping superhero generator

pub mod avatar;
pub mod config;
pub mod error;
pub mod http;
pub mod persona;
pub mod photo;
pub mod vision;
pub mod web;

pub use error::{HeroError, Result};
