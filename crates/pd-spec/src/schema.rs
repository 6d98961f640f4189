//! Network specification schema definitions.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A complete network specification: an identifier plus the ordered element
/// chain (inlet first, outlet last).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NetworkSpec {
    pub name: String,
    pub network: Vec<ElementDef>,
}

/// One element descriptor in the chain.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ElementDef {
    Inlet {
        name: String,
        flow: FlowDef,
    },
    Outlet {
        name: String,
    },
    Pipe {
        name: String,
        geom: BTreeMap<String, ValueDef>,
        loss: BTreeMap<String, ValueDef>,
        ref_area: RefAreaDef,
    },
    Junction {
        name: String,
        geom: BTreeMap<String, ValueDef>,
        loss: BTreeMap<String, ValueDef>,
        ref_area: RefAreaDef,
    },
}

impl ElementDef {
    pub fn name(&self) -> &str {
        match self {
            ElementDef::Inlet { name, .. }
            | ElementDef::Outlet { name }
            | ElementDef::Pipe { name, .. }
            | ElementDef::Junction { name, .. } => name,
        }
    }
}

/// Boundary flow state supplied at the inlet plenum (SI base units; the
/// pressure is in Pa).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlowDef {
    pub pressure: f64,
    pub mass_flow_rate: f64,
    pub density: f64,
    pub temperature: f64,
}

/// Names the `geom` entry whose value becomes the element's reference area,
/// plus an optional flow-split divisor for junction mass flow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RefAreaDef {
    pub station: String,
    #[serde(default = "default_flow_splits")]
    pub flow_splits: f64,
}

fn default_flow_splits() -> f64 {
    1.0
}

/// A `geom`/`loss` entry: a literal number, a literal string (only the
/// `flow_direction` key accepts one), or a function-call descriptor resolved
/// against the matching registry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ValueDef {
    Scalar(f64),
    Text(String),
    Call {
        func: String,
        #[serde(default)]
        params: BTreeMap<String, ParamDef>,
    },
}

/// A function-call parameter. A string of the form `${geom.<key>}` is a
/// reference to an already-materialized geometry value; any other string is
/// passed through for the function adapter to reject.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ParamDef {
    Number(f64),
    Text(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipe_descriptor_from_yaml() {
        let yaml = r#"
type: pipe
name: riser
geom:
  length: 2.5
  flow_direction: up
  hydraulic_diameter: {func: hydraulic_diameter_circle, params: {d: 0.1}}
  inlet_area: {func: area_circle, params: {d: 0.1}}
  outlet_area: {func: area_circle, params: {d: 0.1}}
loss:
  friction: 0.02
ref_area:
  station: inlet_area
"#;
        let def: ElementDef = serde_yaml::from_str(yaml).unwrap();
        match &def {
            ElementDef::Pipe { name, geom, loss, ref_area } => {
                assert_eq!(name, "riser");
                assert_eq!(geom.get("length"), Some(&ValueDef::Scalar(2.5)));
                assert_eq!(
                    geom.get("flow_direction"),
                    Some(&ValueDef::Text("up".to_string()))
                );
                assert!(matches!(
                    geom.get("hydraulic_diameter"),
                    Some(ValueDef::Call { .. })
                ));
                assert_eq!(loss.get("friction"), Some(&ValueDef::Scalar(0.02)));
                assert_eq!(ref_area.station, "inlet_area");
                assert_eq!(ref_area.flow_splits, 1.0);
            }
            other => panic!("expected pipe, got {other:?}"),
        }
    }

    #[test]
    fn junction_descriptor_with_reference_param() {
        let yaml = r#"
type: junction
name: entrance
geom:
  inlet_area: {func: area_circle, params: {d: 0.3}}
  outlet_area: {func: area_circle, params: {d: 0.1}}
loss:
  form:
    func: sudden_contraction
    params:
      inlet_area: "${geom.inlet_area}"
      outlet_area: "${geom.outlet_area}"
ref_area:
  station: outlet_area
  flow_splits: 4
"#;
        let def: ElementDef = serde_yaml::from_str(yaml).unwrap();
        match &def {
            ElementDef::Junction { loss, ref_area, .. } => {
                let ValueDef::Call { func, params } = loss.get("form").unwrap() else {
                    panic!("expected call descriptor");
                };
                assert_eq!(func, "sudden_contraction");
                assert_eq!(
                    params.get("inlet_area"),
                    Some(&ParamDef::Text("${geom.inlet_area}".to_string()))
                );
                assert_eq!(ref_area.flow_splits, 4.0);
            }
            other => panic!("expected junction, got {other:?}"),
        }
    }

    #[test]
    fn integer_literals_deserialize_as_scalars() {
        let yaml = "type: pipe\nname: p\ngeom: {length: 1}\nloss: {}\nref_area: {station: inlet_area}\n";
        let def: ElementDef = serde_yaml::from_str(yaml).unwrap();
        let ElementDef::Pipe { geom, .. } = def else {
            panic!("expected pipe");
        };
        assert_eq!(geom.get("length"), Some(&ValueDef::Scalar(1.0)));
    }

    #[test]
    fn malformed_call_descriptor_is_rejected() {
        // A mapping without `func` is neither a literal nor a call.
        let yaml = "type: pipe\nname: p\ngeom: {length: {params: {d: 1.0}}}\nloss: {}\nref_area: {station: x}\n";
        assert!(serde_yaml::from_str::<ElementDef>(yaml).is_err());
    }

    #[test]
    fn unknown_element_type_is_rejected() {
        let yaml = "type: manifold\nname: m\n";
        assert!(serde_yaml::from_str::<ElementDef>(yaml).is_err());
    }
}
