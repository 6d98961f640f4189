//! Builds a live element chain from a network specification.
//!
//! Each pipe/junction descriptor is materialized in two passes: `geom`
//! entries first, then `loss` entries. The order is a correctness
//! requirement, not a preference: loss-function parameters may reference
//! already-materialized geometry values with `${geom.<key>}` tokens.
//! Construction is strictly sequential because every element reads its
//! predecessor's outlet pressure. Any failure aborts the whole build.

use std::collections::BTreeMap;
use std::str::FromStr;

use pd_corr::{Arg, Args, CorrError, Registry, geometry_registry, loss_registry};
use pd_spec::{ElementDef, NetworkSpec, ParamDef, ValueDef};
use tracing::{debug, info};

use crate::element::{Element, FlowDirection, Inlet, Junction, Outlet, Pipe, PipeGeometry};
use crate::error::BuildError;
use crate::network::Network;

/// A materialized `geom`/`loss` entry: a computed number, or the literal
/// flow-direction string copied through.
#[derive(Debug, Clone, PartialEq)]
enum Resolved {
    Number(f64),
    Text(String),
}

fn parse_geom_ref(s: &str) -> Option<&str> {
    s.strip_prefix("${geom.")?.strip_suffix('}')
}

/// Convert call parameters into registry arguments, substituting
/// `${geom.<key>}` references when a materialized geometry map is in scope
/// (loss entries only). Non-reference strings pass through for the adapter
/// to reject.
fn resolve_args(
    element: &str,
    field: &str,
    params: &BTreeMap<String, ParamDef>,
    geom: Option<&BTreeMap<String, Resolved>>,
) -> Result<Args, BuildError> {
    let mut args = Args::new();
    for (key, param) in params {
        let arg = match param {
            ParamDef::Number(v) => Arg::Number(*v),
            ParamDef::Text(s) => match (geom, parse_geom_ref(s)) {
                (Some(geom), Some(reference)) => match geom.get(reference) {
                    Some(Resolved::Number(v)) => Arg::Number(*v),
                    Some(Resolved::Text(t)) => Arg::Text(t.clone()),
                    None => {
                        return Err(BuildError::UnresolvedReference {
                            element: element.to_string(),
                            field: field.to_string(),
                            reference: s.clone(),
                        });
                    }
                },
                _ => Arg::Text(s.clone()),
            },
        };
        args.insert(key.clone(), arg);
    }
    Ok(args)
}

fn materialize(
    element: &str,
    group: &'static str,
    entries: &BTreeMap<String, ValueDef>,
    geom: Option<&BTreeMap<String, Resolved>>,
    registry: &Registry,
) -> Result<BTreeMap<String, Resolved>, BuildError> {
    let mut out = BTreeMap::new();
    for (key, value) in entries {
        let field = format!("{group}.{key}");
        let resolved = match value {
            ValueDef::Scalar(v) => Resolved::Number(*v),
            ValueDef::Text(s) => {
                if key == "flow_direction" {
                    Resolved::Text(s.clone())
                } else {
                    return Err(BuildError::UnsupportedValue {
                        element: element.to_string(),
                        field,
                    });
                }
            }
            ValueDef::Call { func, params } => {
                let args = resolve_args(element, &field, params, geom)?;
                let v = registry.call(func, &args).map_err(|e| match e {
                    CorrError::UnknownFunction { registry, name } => BuildError::UnknownFunction {
                        element: element.to_string(),
                        registry,
                        name,
                    },
                    other => BuildError::Correlation {
                        element: element.to_string(),
                        field: field.clone(),
                        source: other,
                    },
                })?;
                Resolved::Number(v)
            }
        };
        out.insert(key.clone(), resolved);
    }
    Ok(out)
}

fn require_number(
    element: &str,
    map: &BTreeMap<String, Resolved>,
    group: &'static str,
    key: &'static str,
) -> Result<f64, BuildError> {
    match map.get(key) {
        Some(Resolved::Number(v)) => Ok(*v),
        Some(Resolved::Text(_)) => Err(BuildError::NonNumericEntry {
            element: element.to_string(),
            field: format!("{group}.{key}"),
        }),
        None => Err(BuildError::MissingEntry {
            element: element.to_string(),
            field: format!("{group}.{key}"),
        }),
    }
}

fn optional_number(
    element: &str,
    map: &BTreeMap<String, Resolved>,
    group: &'static str,
    key: &'static str,
    default: f64,
) -> Result<f64, BuildError> {
    match map.get(key) {
        Some(Resolved::Number(v)) => Ok(*v),
        Some(Resolved::Text(_)) => Err(BuildError::NonNumericEntry {
            element: element.to_string(),
            field: format!("{group}.{key}"),
        }),
        None => Ok(default),
    }
}

fn require_direction(
    element: &str,
    map: &BTreeMap<String, Resolved>,
) -> Result<FlowDirection, BuildError> {
    match map.get("flow_direction") {
        Some(Resolved::Text(s)) => {
            FlowDirection::from_str(s).map_err(|source| BuildError::Element {
                element: element.to_string(),
                source,
            })
        }
        Some(Resolved::Number(_)) => Err(BuildError::NotADirection {
            element: element.to_string(),
        }),
        None => Err(BuildError::MissingEntry {
            element: element.to_string(),
            field: "geom.flow_direction".to_string(),
        }),
    }
}

fn station_area(
    element: &str,
    geom: &BTreeMap<String, Resolved>,
    station: &str,
) -> Result<f64, BuildError> {
    match geom.get(station) {
        Some(Resolved::Number(v)) => Ok(*v),
        Some(Resolved::Text(_)) => Err(BuildError::NonNumericEntry {
            element: element.to_string(),
            field: format!("geom.{station}"),
        }),
        None => Err(BuildError::UnknownStation {
            element: element.to_string(),
            station: station.to_string(),
        }),
    }
}

/// Build a fully evaluated [`Network`] from a specification.
///
/// The first descriptor must be the inlet plenum and the last the outlet
/// plenum; interior descriptors become pipes and junctions in chain order.
/// No partial network is ever returned.
pub fn build_network(spec: &NetworkSpec) -> Result<Network, BuildError> {
    let geometry = geometry_registry();
    let losses = loss_registry();
    let total = spec.network.len();

    let mut elements: Vec<Element> = Vec::with_capacity(total);
    let mut source: Option<Inlet> = None;
    let mut terminated = false;

    for (index, def) in spec.network.iter().enumerate() {
        match def {
            ElementDef::Inlet { name, flow } => {
                if index != 0 {
                    return Err(BuildError::InletNotFirst {
                        name: name.clone(),
                        index,
                    });
                }
                let inlet = Inlet {
                    name: name.clone(),
                    outlet_pressure: flow.pressure,
                    mass_flow_rate: flow.mass_flow_rate,
                    density: flow.density,
                    temperature: flow.temperature,
                };
                debug!(
                    element = %inlet.name,
                    pressure = inlet.outlet_pressure,
                    "added inlet plenum"
                );
                source = Some(inlet.clone());
                elements.push(Element::Inlet(inlet));
            }
            ElementDef::Outlet { name } => {
                if index + 1 != total {
                    return Err(BuildError::OutletNotLast {
                        name: name.clone(),
                        index,
                        len: total,
                    });
                }
                let upstream = elements.len().checked_sub(1).ok_or(BuildError::MissingInlet)?;
                debug!(element = %name, "added outlet plenum");
                elements.push(Element::Outlet(Outlet {
                    name: name.clone(),
                    upstream,
                }));
                terminated = true;
                break;
            }
            ElementDef::Pipe {
                name,
                geom,
                loss,
                ref_area,
            } => {
                let inlet = source.as_ref().ok_or(BuildError::MissingInlet)?;

                let geom_map = materialize(name, "geom", geom, None, &geometry)?;
                let loss_map = materialize(name, "loss", loss, Some(&geom_map), &losses)?;

                let pipe_geometry = PipeGeometry {
                    length: require_number(name, &geom_map, "geom", "length")?,
                    hydraulic_diameter: require_number(
                        name,
                        &geom_map,
                        "geom",
                        "hydraulic_diameter",
                    )?,
                    inlet_area: require_number(name, &geom_map, "geom", "inlet_area")?,
                    outlet_area: require_number(name, &geom_map, "geom", "outlet_area")?,
                    ref_area: station_area(name, &geom_map, &ref_area.station)?,
                    flow_direction: require_direction(name, &geom_map)?,
                    alpha_inlet: optional_number(name, &geom_map, "geom", "alpha_inlet", 1.0)?,
                    alpha_outlet: optional_number(name, &geom_map, "geom", "alpha_outlet", 1.0)?,
                };
                let friction = require_number(name, &loss_map, "loss", "friction")?;

                let upstream_index = elements.len() - 1;
                let pipe = Pipe::new(
                    name.clone(),
                    pipe_geometry,
                    friction,
                    inlet.mass_flow_rate,
                    inlet.density,
                    upstream_index,
                    &elements[upstream_index],
                )
                .map_err(|source| BuildError::Element {
                    element: name.clone(),
                    source,
                })?;
                debug!(element = %name, dp = pipe.pressure_drop, "built pipe");
                elements.push(Element::Pipe(pipe));
            }
            ElementDef::Junction {
                name,
                geom,
                loss,
                ref_area,
            } => {
                let inlet = source.as_ref().ok_or(BuildError::MissingInlet)?;

                let geom_map = materialize(name, "geom", geom, None, &geometry)?;
                let loss_map = materialize(name, "loss", loss, Some(&geom_map), &losses)?;

                let ref_area_value = station_area(name, &geom_map, &ref_area.station)?;
                let form = require_number(name, &loss_map, "loss", "form")?;

                if ref_area.flow_splits <= 0.0 {
                    return Err(BuildError::InvalidFlowSplits {
                        element: name.clone(),
                        value: ref_area.flow_splits,
                    });
                }
                let mass_flow_rate = inlet.mass_flow_rate / ref_area.flow_splits;

                let upstream_index = elements.len() - 1;
                let junction = Junction::new(
                    name.clone(),
                    ref_area_value,
                    form,
                    mass_flow_rate,
                    inlet.density,
                    upstream_index,
                    &elements[upstream_index],
                )
                .map_err(|source| BuildError::Element {
                    element: name.clone(),
                    source,
                })?;
                debug!(element = %name, dp = junction.pressure_drop, "built junction");
                elements.push(Element::Junction(junction));
            }
        }
    }

    if !terminated {
        return Err(BuildError::MissingOutlet);
    }

    info!(
        network = %spec.name,
        elements = elements.len(),
        "network build complete"
    );
    Ok(Network::new(spec.name.clone(), elements))
}
