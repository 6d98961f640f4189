//! Error types for element construction and network building.

use pd_corr::CorrError;
use thiserror::Error;

/// Errors raised by element constructors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ElementError {
    #[error(
        "upstream element '{upstream}' has no outlet pressure; the chain must be built in order"
    )]
    UpstreamPressureUnset { upstream: String },

    #[error("flow_direction must be 'up', 'down', or 'side' (got '{token}')")]
    InvalidFlowDirection { token: String },

    #[error("Non-finite value computed for {what}")]
    NonFinite { what: &'static str },
}

/// Errors raised while building a network from a specification.
///
/// Every variant names the offending element and field; any failure aborts
/// the whole build with no partial network.
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("network is empty or does not start with an inlet element")]
    MissingInlet,

    #[error("network does not terminate with an outlet element")]
    MissingOutlet,

    #[error("inlet '{name}' must be the first element (found at position {index})")]
    InletNotFirst { name: String, index: usize },

    #[error("outlet '{name}' must be the last element (found at position {index} of {len})")]
    OutletNotLast {
        name: String,
        index: usize,
        len: usize,
    },

    #[error("[{element}] unknown {registry} function '{name}'")]
    UnknownFunction {
        element: String,
        registry: &'static str,
        name: String,
    },

    #[error("[{element}] unresolved geometry reference '{reference}' in {field}")]
    UnresolvedReference {
        element: String,
        field: String,
        reference: String,
    },

    #[error("[{element}] unsupported value for {field}: expected a number or a function call")]
    UnsupportedValue { element: String, field: String },

    #[error("[{element}] missing required entry {field}")]
    MissingEntry { element: String, field: String },

    #[error("[{element}] entry {field} must be a number")]
    NonNumericEntry { element: String, field: String },

    #[error("[{element}] entry geom.flow_direction must be a direction string")]
    NotADirection { element: String },

    #[error("[{element}] ref_area station '{station}' does not name a geometry entry")]
    UnknownStation { element: String, station: String },

    #[error("[{element}] flow_splits must be positive (got {value})")]
    InvalidFlowSplits { element: String, value: f64 },

    #[error("[{element}] {field}: {source}")]
    Correlation {
        element: String,
        field: String,
        source: CorrError,
    },

    #[error("[{element}] {source}")]
    Element {
        element: String,
        source: ElementError,
    },
}
