#[macro_use]
extern crate log;

use thiserror::Error;

pub mod commands {
    pub mod catalog;
    pub mod check;
    pub mod classify;
    pub mod css;
    pub mod export;
    pub mod generate;
    pub mod harmony;
    pub mod name;
}

pub mod input;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("An IO error occurred: {0}")]
    IoError(#[from] std::io::Error),
    #[error(transparent)]
    Engine(#[from] palette_engine::Error),
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Theme failed {} check(s)", .0.len())]
    FailedChecks(Vec<palette_engine::Issue>),
}
