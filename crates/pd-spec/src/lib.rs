//! pd-spec: input-specification format for serial flow networks, with
//! loading and validation.

pub mod schema;
pub mod validate;

pub use schema::*;
pub use validate::{ValidationError, validate_spec};

pub type SpecResult<T> = Result<T, SpecError>;

#[derive(thiserror::Error, Debug)]
pub enum SpecError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &std::path::Path) -> SpecResult<NetworkSpec> {
    let content = std::fs::read_to_string(path)?;
    let spec: NetworkSpec = serde_yaml::from_str(&content)?;
    validate_spec(&spec)?;
    Ok(spec)
}

pub fn save_yaml(path: &std::path::Path, spec: &NetworkSpec) -> SpecResult<()> {
    validate_spec(spec)?;
    let content = serde_yaml::to_string(spec)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &std::path::Path) -> SpecResult<NetworkSpec> {
    let content = std::fs::read_to_string(path)?;
    let spec: NetworkSpec = serde_json::from_str(&content)?;
    validate_spec(&spec)?;
    Ok(spec)
}

pub fn save_json(path: &std::path::Path, spec: &NetworkSpec) -> SpecResult<()> {
    validate_spec(spec)?;
    let content = serde_json::to_string_pretty(spec)?;
    std::fs::write(path, content)?;
    Ok(())
}
