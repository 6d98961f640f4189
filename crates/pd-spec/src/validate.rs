//! Static validation of a network specification.
//!
//! Catches structural problems before any element is built: ordering of the
//! plenum descriptors, duplicate names, dangling reference-area stations,
//! and non-physical boundary values. The builder re-checks ordering itself;
//! validation exists so a malformed file is rejected at load time with a
//! message naming the offending descriptor.

use std::collections::HashSet;

use crate::schema::{ElementDef, NetworkSpec};

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("network list is empty")]
    EmptyNetwork,

    #[error("Duplicate element name: {name}")]
    DuplicateName { name: String },

    #[error("inlet '{name}' must be the first element (found at position {index})")]
    InletNotFirst { name: String, index: usize },

    #[error("outlet '{name}' must be the last element (found at position {index})")]
    OutletNotLast { name: String, index: usize },

    #[error("network must start with an inlet element")]
    MissingInlet,

    #[error("network must end with an outlet element")]
    MissingOutlet,

    #[error("[{element}] ref_area station '{station}' does not name a geom entry")]
    UnknownStation { element: String, station: String },

    #[error("[{element}] {field} must be positive (got {value})")]
    NonPositive {
        element: String,
        field: &'static str,
        value: f64,
    },
}

pub fn validate_spec(spec: &NetworkSpec) -> Result<(), ValidationError> {
    if spec.network.is_empty() {
        return Err(ValidationError::EmptyNetwork);
    }

    let mut names = HashSet::new();
    let last = spec.network.len() - 1;

    for (index, def) in spec.network.iter().enumerate() {
        if !names.insert(def.name()) {
            return Err(ValidationError::DuplicateName {
                name: def.name().to_string(),
            });
        }

        match def {
            ElementDef::Inlet { name, flow } => {
                if index != 0 {
                    return Err(ValidationError::InletNotFirst {
                        name: name.clone(),
                        index,
                    });
                }
                if flow.density <= 0.0 {
                    return Err(ValidationError::NonPositive {
                        element: name.clone(),
                        field: "flow.density",
                        value: flow.density,
                    });
                }
            }
            ElementDef::Outlet { name } => {
                if index != last {
                    return Err(ValidationError::OutletNotLast {
                        name: name.clone(),
                        index,
                    });
                }
            }
            ElementDef::Pipe { name, geom, ref_area, .. }
            | ElementDef::Junction { name, geom, ref_area, .. } => {
                if !geom.contains_key(&ref_area.station) {
                    return Err(ValidationError::UnknownStation {
                        element: name.clone(),
                        station: ref_area.station.clone(),
                    });
                }
                if ref_area.flow_splits <= 0.0 {
                    return Err(ValidationError::NonPositive {
                        element: name.clone(),
                        field: "ref_area.flow_splits",
                        value: ref_area.flow_splits,
                    });
                }
            }
        }
    }

    if !matches!(spec.network.first(), Some(ElementDef::Inlet { .. })) {
        return Err(ValidationError::MissingInlet);
    }
    if !matches!(spec.network.last(), Some(ElementDef::Outlet { .. })) {
        return Err(ValidationError::MissingOutlet);
    }

    Ok(())
}
