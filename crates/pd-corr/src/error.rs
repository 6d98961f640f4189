//! Error type for geometry and loss-coefficient evaluation.

use thiserror::Error;

pub type CorrResult<T> = Result<T, CorrError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CorrError {
    #[error("{func}: invalid argument: {what}")]
    InvalidArg {
        func: &'static str,
        what: &'static str,
    },

    #[error("unknown {registry} function '{name}'")]
    UnknownFunction {
        registry: &'static str,
        name: String,
    },

    #[error("{func}: missing parameter '{param}'")]
    MissingParam {
        func: &'static str,
        param: &'static str,
    },

    #[error("{func}: parameter '{param}' must be a number")]
    NonNumericParam {
        func: &'static str,
        param: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_names_function() {
        let err = CorrError::InvalidArg {
            func: "area_circle",
            what: "diameter must be non-negative",
        };
        assert!(err.to_string().contains("area_circle"));
    }
}
