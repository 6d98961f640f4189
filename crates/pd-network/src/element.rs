//! Network element types and their closed-form pressure relations.
//!
//! Every element computes its derived quantities exactly once, at
//! construction, from its own inputs and the already-computed outlet
//! pressure of the element immediately upstream. There is no re-evaluation
//! entry point; changing an input means building a new element.

use std::str::FromStr;

use pd_core::numeric::ensure_finite;
use pd_core::units::constants::G0_MPS2;

use crate::error::ElementError;

pub type ElementResult<T> = Result<T, ElementError>;

fn finite(v: f64, what: &'static str) -> ElementResult<f64> {
    ensure_finite(v, what).map_err(|_| ElementError::NonFinite { what })
}

/// Orientation of a pipe run, fixing the sign of the hydrostatic term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowDirection {
    Up,
    Down,
    Side,
}

impl FlowDirection {
    /// Sign applied to rho * g * L: +1 up, -1 down, 0 horizontal.
    pub fn sign(self) -> f64 {
        match self {
            FlowDirection::Up => 1.0,
            FlowDirection::Down => -1.0,
            FlowDirection::Side => 0.0,
        }
    }
}

impl FromStr for FlowDirection {
    type Err = ElementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(FlowDirection::Up),
            "down" => Ok(FlowDirection::Down),
            "side" => Ok(FlowDirection::Side),
            _ => Err(ElementError::InvalidFlowDirection {
                token: s.to_string(),
            }),
        }
    }
}

/// Boundary source at the head of the chain: caller-supplied state, nothing
/// derived. Sole source of mass flow and density for the elements downstream.
#[derive(Debug, Clone)]
pub struct Inlet {
    pub name: String,
    pub outlet_pressure: f64,
    pub mass_flow_rate: f64,
    pub density: f64,
    pub temperature: f64,
}

/// Boundary sink at the end of the chain. Holds the index of the last flow
/// element so downstream consumers can read the final outlet pressure.
#[derive(Debug, Clone)]
pub struct Outlet {
    pub name: String,
    pub upstream: usize,
}

/// Geometric inputs for a straight pipe section.
///
/// `alpha_inlet`/`alpha_outlet` are kinetic-energy correction factors for
/// the acceleration term; 1.0 for a flat velocity profile.
#[derive(Debug, Clone)]
pub struct PipeGeometry {
    pub length: f64,
    pub hydraulic_diameter: f64,
    pub inlet_area: f64,
    pub outlet_area: f64,
    pub ref_area: f64,
    pub flow_direction: FlowDirection,
    pub alpha_inlet: f64,
    pub alpha_outlet: f64,
}

/// Pressure drop in a straight pipe section (steady, one-dimensional).
///
/// Friction (Darcy-Weisbach):
///   dp_loss = f * (L / D_h) * (1/2) * rho * V_ref^2
///
/// Gravity (hydrostatic):
///   dp_gravity = rho * g * L * sign(flow_direction)
///
/// Acceleration (kinetic energy):
///   dp_accel = (1/2) * rho * (alpha_out * V_out^2 - alpha_in * V_in^2)
///
/// Endpoints:
///   pressure_drop   = dp_loss + dp_gravity + dp_accel
///   inlet_pressure  = upstream outlet pressure (copied, never recomputed)
///   outlet_pressure = inlet_pressure - pressure_drop
#[derive(Debug, Clone)]
pub struct Pipe {
    pub name: String,
    pub geometry: PipeGeometry,
    pub friction_factor: f64,
    pub mass_flow_rate: f64,
    pub density: f64,
    pub upstream: usize,

    // Computed at construction
    pub inlet_velocity: f64,
    pub outlet_velocity: f64,
    pub ref_velocity: f64,
    pub dp_loss: f64,
    pub dp_gravity: f64,
    pub dp_accel: f64,
    pub pressure_drop: f64,
    pub inlet_pressure: f64,
    pub outlet_pressure: f64,
}

impl Pipe {
    /// Build a pipe downstream of `upstream` (at `upstream_index` in the
    /// chain). Fails before any arithmetic if the upstream element has no
    /// outlet pressure.
    pub fn new(
        name: impl Into<String>,
        geometry: PipeGeometry,
        friction_factor: f64,
        mass_flow_rate: f64,
        density: f64,
        upstream_index: usize,
        upstream: &Element,
    ) -> ElementResult<Pipe> {
        let inlet_pressure =
            upstream
                .outlet_pressure()
                .ok_or_else(|| ElementError::UpstreamPressureUnset {
                    upstream: upstream.name().to_string(),
                })?;

        let inlet_velocity = finite(
            mass_flow_rate / (density * geometry.inlet_area),
            "inlet velocity",
        )?;
        let outlet_velocity = finite(
            mass_flow_rate / (density * geometry.outlet_area),
            "outlet velocity",
        )?;
        let ref_velocity = finite(
            mass_flow_rate / (density * geometry.ref_area),
            "reference velocity",
        )?;

        let q_ref = 0.5 * density * ref_velocity * ref_velocity;
        let dp_loss = finite(
            friction_factor * (geometry.length / geometry.hydraulic_diameter) * q_ref,
            "friction pressure drop",
        )?;
        let dp_gravity =
            density * G0_MPS2 * geometry.length * geometry.flow_direction.sign();
        let dp_accel = 0.5
            * density
            * (geometry.alpha_outlet * outlet_velocity * outlet_velocity
                - geometry.alpha_inlet * inlet_velocity * inlet_velocity);

        let pressure_drop = finite(dp_loss + dp_gravity + dp_accel, "pressure drop")?;
        let outlet_pressure = inlet_pressure - pressure_drop;

        Ok(Pipe {
            name: name.into(),
            geometry,
            friction_factor,
            mass_flow_rate,
            density,
            upstream: upstream_index,
            inlet_velocity,
            outlet_velocity,
            ref_velocity,
            dp_loss,
            dp_gravity,
            dp_accel,
            pressure_drop,
            inlet_pressure,
            outlet_pressure,
        })
    }
}

/// Lumped form loss across a local fitting.
///
///   dp_loss = K * (1/2) * rho * V_ref^2, V_ref = mdot / (rho * A_ref)
///
/// K must match the chosen reference area (convert beforehand if the
/// coefficient was tabulated against a different section).
#[derive(Debug, Clone)]
pub struct Junction {
    pub name: String,
    pub ref_area: f64,
    pub form_loss: f64,
    pub mass_flow_rate: f64,
    pub density: f64,
    pub upstream: usize,

    // Computed at construction
    pub ref_velocity: f64,
    pub dp_loss: f64,
    pub pressure_drop: f64,
    pub inlet_pressure: f64,
    pub outlet_pressure: f64,
}

impl Junction {
    pub fn new(
        name: impl Into<String>,
        ref_area: f64,
        form_loss: f64,
        mass_flow_rate: f64,
        density: f64,
        upstream_index: usize,
        upstream: &Element,
    ) -> ElementResult<Junction> {
        let inlet_pressure =
            upstream
                .outlet_pressure()
                .ok_or_else(|| ElementError::UpstreamPressureUnset {
                    upstream: upstream.name().to_string(),
                })?;

        let ref_velocity = finite(
            mass_flow_rate / (density * ref_area),
            "reference velocity",
        )?;
        let dp_loss = finite(
            form_loss * 0.5 * density * ref_velocity * ref_velocity,
            "form pressure drop",
        )?;
        let pressure_drop = dp_loss;
        let outlet_pressure = inlet_pressure - pressure_drop;

        Ok(Junction {
            name: name.into(),
            ref_area,
            form_loss,
            mass_flow_rate,
            density,
            upstream: upstream_index,
            ref_velocity,
            dp_loss,
            pressure_drop,
            inlet_pressure,
            outlet_pressure,
        })
    }
}

/// Element kind discriminant shared with the summarizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Inlet,
    Pipe,
    Junction,
    Outlet,
}

impl ElementKind {
    pub fn label(self) -> &'static str {
        match self {
            ElementKind::Inlet => "inlet",
            ElementKind::Pipe => "pipe",
            ElementKind::Junction => "junction",
            ElementKind::Outlet => "outlet",
        }
    }
}

/// Closed set of element variants making up a chain.
#[derive(Debug, Clone)]
pub enum Element {
    Inlet(Inlet),
    Pipe(Pipe),
    Junction(Junction),
    Outlet(Outlet),
}

impl Element {
    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Inlet(_) => ElementKind::Inlet,
            Element::Pipe(_) => ElementKind::Pipe,
            Element::Junction(_) => ElementKind::Junction,
            Element::Outlet(_) => ElementKind::Outlet,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Element::Inlet(e) => &e.name,
            Element::Pipe(e) => &e.name,
            Element::Junction(e) => &e.name,
            Element::Outlet(e) => &e.name,
        }
    }

    /// Outlet pressure of this element, if it has one. An outlet plenum has
    /// no pressure of its own, so a chain can never continue past it.
    pub fn outlet_pressure(&self) -> Option<f64> {
        match self {
            Element::Inlet(e) => Some(e.outlet_pressure),
            Element::Pipe(e) => Some(e.outlet_pressure),
            Element::Junction(e) => Some(e.outlet_pressure),
            Element::Outlet(_) => None,
        }
    }

    pub fn inlet_pressure(&self) -> Option<f64> {
        match self {
            Element::Pipe(e) => Some(e.inlet_pressure),
            Element::Junction(e) => Some(e.inlet_pressure),
            Element::Inlet(_) | Element::Outlet(_) => None,
        }
    }

    pub fn pressure_drop(&self) -> Option<f64> {
        match self {
            Element::Pipe(e) => Some(e.pressure_drop),
            Element::Junction(e) => Some(e.pressure_drop),
            Element::Inlet(_) | Element::Outlet(_) => None,
        }
    }
}
