//! Name-keyed registries over the geometry and loss libraries.
//!
//! A network specification addresses correlation functions by string
//! identifier. Each registry maps an identifier to an adapter with the fixed
//! signature `fn(&Args) -> CorrResult<f64>`; adapters pull named parameters
//! out of the argument map and delegate to the typed function.

use std::collections::BTreeMap;

use crate::error::{CorrError, CorrResult};
use crate::{geom, loss};

/// A single named argument: a number, or a string that survived the
/// builder's reference resolution (and will be rejected by any adapter that
/// expects a number).
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Number(f64),
    Text(String),
}

/// Named arguments for a registry call.
pub type Args = BTreeMap<String, Arg>;

pub type CorrFn = fn(&Args) -> CorrResult<f64>;

/// Immutable map from function identifier to adapter.
#[derive(Debug)]
pub struct Registry {
    kind: &'static str,
    funcs: BTreeMap<&'static str, CorrFn>,
}

impl Registry {
    fn new(kind: &'static str, entries: &[(&'static str, CorrFn)]) -> Self {
        Self {
            kind,
            funcs: entries.iter().copied().collect(),
        }
    }

    /// Registry label ("geometry" or "loss"), used in error messages.
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn contains(&self, name: &str) -> bool {
        self.funcs.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.funcs.keys().copied()
    }

    /// Look up `name` and invoke it with `args`.
    pub fn call(&self, name: &str, args: &Args) -> CorrResult<f64> {
        let f = self.funcs.get(name).ok_or_else(|| CorrError::UnknownFunction {
            registry: self.kind,
            name: name.to_string(),
        })?;
        f(args)
    }
}

fn require(args: &Args, func: &'static str, param: &'static str) -> CorrResult<f64> {
    match args.get(param) {
        Some(Arg::Number(v)) => Ok(*v),
        Some(Arg::Text(_)) => Err(CorrError::NonNumericParam { func, param }),
        None => Err(CorrError::MissingParam { func, param }),
    }
}

// Geometry adapters

fn call_area_circle(args: &Args) -> CorrResult<f64> {
    geom::area_circle(require(args, "area_circle", "d")?)
}

fn call_area_rectangle(args: &Args) -> CorrResult<f64> {
    geom::area_rectangle(
        require(args, "area_rectangle", "l")?,
        require(args, "area_rectangle", "w")?,
    )
}

fn call_area_annulus(args: &Args) -> CorrResult<f64> {
    geom::area_annulus(
        require(args, "area_annulus", "d_outer")?,
        require(args, "area_annulus", "d_inner")?,
    )
}

fn call_area_capsule_slot(args: &Args) -> CorrResult<f64> {
    geom::area_capsule_slot(
        require(args, "area_capsule_slot", "b")?,
        require(args, "area_capsule_slot", "l")?,
    )
}

fn call_wetted_perimeter_circle(args: &Args) -> CorrResult<f64> {
    geom::wetted_perimeter_circle(require(args, "wetted_perimeter_circle", "d")?)
}

fn call_hydraulic_diameter_generic(args: &Args) -> CorrResult<f64> {
    geom::hydraulic_diameter_generic(
        require(args, "hydraulic_diameter_generic", "area")?,
        require(args, "hydraulic_diameter_generic", "wetted_perimeter")?,
    )
}

fn call_hydraulic_diameter_circle(args: &Args) -> CorrResult<f64> {
    geom::hydraulic_diameter_circle(require(args, "hydraulic_diameter_circle", "d")?)
}

fn call_hydraulic_diameter_annulus(args: &Args) -> CorrResult<f64> {
    geom::hydraulic_diameter_annulus(
        require(args, "hydraulic_diameter_annulus", "d_outer")?,
        require(args, "hydraulic_diameter_annulus", "d_inner")?,
    )
}

fn call_hydraulic_diameter_annulus_concentric(args: &Args) -> CorrResult<f64> {
    geom::hydraulic_diameter_annulus_concentric(
        require(args, "hydraulic_diameter_annulus_concentric", "d_outer")?,
        require(args, "hydraulic_diameter_annulus_concentric", "d_inner")?,
    )
}

fn call_hydraulic_diameter_rect_slot(args: &Args) -> CorrResult<f64> {
    geom::hydraulic_diameter_rect_slot(
        require(args, "hydraulic_diameter_rect_slot", "a")?,
        require(args, "hydraulic_diameter_rect_slot", "b")?,
    )
}

fn call_hydraulic_diameter_capsule_slot(args: &Args) -> CorrResult<f64> {
    geom::hydraulic_diameter_capsule_slot(
        require(args, "hydraulic_diameter_capsule_slot", "b")?,
        require(args, "hydraulic_diameter_capsule_slot", "l")?,
    )
}

// Loss adapters

fn call_sudden_contraction(args: &Args) -> CorrResult<f64> {
    loss::sudden_contraction(
        require(args, "sudden_contraction", "inlet_area")?,
        require(args, "sudden_contraction", "outlet_area")?,
    )
}

fn call_sudden_expansion(args: &Args) -> CorrResult<f64> {
    loss::sudden_expansion(
        require(args, "sudden_expansion", "inlet_area")?,
        require(args, "sudden_expansion", "outlet_area")?,
    )
}

fn call_free_discharge(_args: &Args) -> CorrResult<f64> {
    Ok(loss::free_discharge())
}

fn call_f_annulus_turbulent(args: &Args) -> CorrResult<f64> {
    loss::f_annulus_turbulent(
        require(args, "f_annulus_turbulent", "lambda_circ")?,
        require(args, "f_annulus_turbulent", "d_outer")?,
        require(args, "f_annulus_turbulent", "d_inner")?,
    )
}

fn call_sharp_thick_inlet_facing_baffle(args: &Args) -> CorrResult<f64> {
    loss::sharp_thick_inlet_facing_baffle(
        require(args, "sharp_thick_inlet_facing_baffle", "baffle_gap")?,
        require(args, "sharp_thick_inlet_facing_baffle", "hydraulic_diameter")?,
    )
}

fn call_discharge_from_straight_tube_to_baffle(args: &Args) -> CorrResult<f64> {
    loss::discharge_from_straight_tube_to_baffle(
        require(args, "discharge_from_straight_tube_to_baffle", "baffle_gap")?,
        require(
            args,
            "discharge_from_straight_tube_to_baffle",
            "hydraulic_diameter",
        )?,
    )
}

fn call_smooth_cone_diffuser_nar1(args: &Args) -> CorrResult<f64> {
    loss::smooth_cone_diffuser_nar1(require(args, "smooth_cone_diffuser_nar1", "diverging_angle")?)
}

fn call_beveled_contraction_alpha60(args: &Args) -> CorrResult<f64> {
    loss::beveled_contraction_alpha60(
        require(args, "beveled_contraction_alpha60", "bevel_length")?,
        require(args, "beveled_contraction_alpha60", "hydraulic_diameter")?,
        require(args, "beveled_contraction_alpha60", "inlet_area")?,
        require(args, "beveled_contraction_alpha60", "outlet_area")?,
    )
}

fn call_beveled_contraction_alpha140(args: &Args) -> CorrResult<f64> {
    loss::beveled_contraction_alpha140(
        require(args, "beveled_contraction_alpha140", "bevel_length")?,
        require(args, "beveled_contraction_alpha140", "hydraulic_diameter")?,
        require(args, "beveled_contraction_alpha140", "inlet_area")?,
        require(args, "beveled_contraction_alpha140", "outlet_area")?,
    )
}

/// Registry of geometry functions (areas, perimeters, hydraulic diameters).
pub fn geometry_registry() -> Registry {
    Registry::new(
        "geometry",
        &[
            ("area_circle", call_area_circle as CorrFn),
            ("area_rectangle", call_area_rectangle),
            ("area_annulus", call_area_annulus),
            ("area_capsule_slot", call_area_capsule_slot),
            ("wetted_perimeter_circle", call_wetted_perimeter_circle),
            ("hydraulic_diameter_generic", call_hydraulic_diameter_generic),
            ("hydraulic_diameter_circle", call_hydraulic_diameter_circle),
            ("hydraulic_diameter_annulus", call_hydraulic_diameter_annulus),
            (
                "hydraulic_diameter_annulus_concentric",
                call_hydraulic_diameter_annulus_concentric,
            ),
            (
                "hydraulic_diameter_rect_slot",
                call_hydraulic_diameter_rect_slot,
            ),
            (
                "hydraulic_diameter_capsule_slot",
                call_hydraulic_diameter_capsule_slot,
            ),
        ],
    )
}

/// Registry of loss-coefficient correlations.
pub fn loss_registry() -> Registry {
    Registry::new(
        "loss",
        &[
            ("sudden_contraction", call_sudden_contraction as CorrFn),
            ("sudden_expansion", call_sudden_expansion),
            ("free_discharge", call_free_discharge),
            ("f_annulus_turbulent", call_f_annulus_turbulent),
            (
                "sharp_thick_inlet_facing_baffle",
                call_sharp_thick_inlet_facing_baffle,
            ),
            (
                "discharge_from_straight_tube_to_baffle",
                call_discharge_from_straight_tube_to_baffle,
            ),
            ("smooth_cone_diffuser_nar1", call_smooth_cone_diffuser_nar1),
            (
                "beveled_contraction_alpha60",
                call_beveled_contraction_alpha60,
            ),
            (
                "beveled_contraction_alpha140",
                call_beveled_contraction_alpha140,
            ),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn args(entries: &[(&str, Arg)]) -> Args {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn geometry_call_by_name() {
        let reg = geometry_registry();
        let a = reg
            .call("area_circle", &args(&[("d", Arg::Number(0.1))]))
            .unwrap();
        assert_relative_eq!(a, PI * 0.01 / 4.0, max_relative = 1e-12);
    }

    #[test]
    fn loss_call_by_name() {
        let reg = loss_registry();
        let k = reg
            .call(
                "sudden_contraction",
                &args(&[
                    ("inlet_area", Arg::Number(2.0)),
                    ("outlet_area", Arg::Number(1.0)),
                ]),
            )
            .unwrap();
        assert_relative_eq!(k, 0.5915, max_relative = 1e-12);
    }

    #[test]
    fn unknown_name_is_reported_with_registry_kind() {
        let reg = geometry_registry();
        let err = reg.call("area_square", &Args::new()).unwrap_err();
        match err {
            CorrError::UnknownFunction { registry, name } => {
                assert_eq!(registry, "geometry");
                assert_eq!(name, "area_square");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_parameter_is_reported() {
        let reg = geometry_registry();
        let err = reg.call("area_circle", &Args::new()).unwrap_err();
        assert!(matches!(err, CorrError::MissingParam { param: "d", .. }));
    }

    #[test]
    fn text_parameter_is_rejected() {
        let reg = loss_registry();
        let err = reg
            .call(
                "sudden_expansion",
                &args(&[
                    ("inlet_area", Arg::Text("${geom.inlet_area}".into())),
                    ("outlet_area", Arg::Number(1.0)),
                ]),
            )
            .unwrap_err();
        assert!(matches!(err, CorrError::NonNumericParam { .. }));
    }

    #[test]
    fn free_discharge_takes_no_parameters() {
        let reg = loss_registry();
        assert_relative_eq!(reg.call("free_discharge", &Args::new()).unwrap(), 1.0);
    }

    #[test]
    fn registries_cover_the_full_library() {
        let geom = geometry_registry();
        assert_eq!(geom.names().count(), 11);
        assert!(geom.contains("hydraulic_diameter_capsule_slot"));

        let loss = loss_registry();
        assert_eq!(loss.names().count(), 9);
        assert!(loss.contains("f_annulus_turbulent"));
    }
}
