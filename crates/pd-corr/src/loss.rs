//! Empirical loss-coefficient correlations.
//!
//! Each correlation carries a hand-transcribed table from the corresponding
//! Idelchik handbook diagram and looks it up through
//! [`pd_core::interp_clamped`], so every function shares the same
//! interpolate-inside / clamp-outside policy. Deviations from plain clamping
//! (ratio intervals, closed-form tails) are noted per function.

use pd_core::interp_clamped;

use crate::error::{CorrError, CorrResult};

fn positive(func: &'static str, what: &'static str, v: f64) -> CorrResult<f64> {
    if v <= 0.0 {
        return Err(CorrError::InvalidArg { func, what });
    }
    Ok(v)
}

/// Coefficient for a sudden contraction with sharp edges.
///
/// Idelchik, Diagram 4.9 (Re > 3.5e4). Linear interpolation of the
/// coefficient vs. outlet_area/inlet_area table; the ratio is clamped to
/// [0, 1] before lookup.
pub fn sudden_contraction(inlet_area: f64, outlet_area: f64) -> CorrResult<f64> {
    positive("sudden_contraction", "inlet area must be positive", inlet_area)?;
    positive(
        "sudden_contraction",
        "outlet area must be positive",
        outlet_area,
    )?;

    let r = (outlet_area / inlet_area).clamp(0.0, 1.0);

    // Idelchik 4.9: area ratio -> coefficient
    const X: [f64; 7] = [0.0, 0.2, 0.4, 0.6, 0.8, 0.9, 1.0];
    const Y: [f64; 7] = [1.00, 0.85, 0.68, 0.503, 0.300, 0.178, 0.00];

    Ok(interp_clamped(&X, &Y, r))
}

/// Borda-Carnot loss for a sudden expansion: (1 - A_in/A_out)^2, referenced
/// to the upstream velocity.
pub fn sudden_expansion(inlet_area: f64, outlet_area: f64) -> CorrResult<f64> {
    positive("sudden_expansion", "inlet area must be positive", inlet_area)?;
    positive(
        "sudden_expansion",
        "outlet area must be positive",
        outlet_area,
    )?;
    let r = inlet_area / outlet_area;
    Ok((1.0 - r) * (1.0 - r))
}

/// Free discharge into a large plenum: the full dynamic head is lost.
pub fn free_discharge() -> f64 {
    1.0
}

/// Turbulent Darcy friction factor for a concentric annulus (Idelchik,
/// Diagram 2.7), as a correction on the round-pipe value `lambda_circ` at
/// the same Re and roughness.
///
/// Implemented as the reciprocal relationship
///
/// ```text
/// 1/lambda_ann = (0.02 r + 0.98) * (1/lambda_circ - 0.27 r + 0.1),
/// r = d_inner / d_outer
/// ```
///
/// returning the reciprocal of the right-hand side. The printed form of the
/// diagram is easy to misread; the reciprocal form is used here because it
/// yields physically plausible magnitudes (lambda_ann close to lambda_circ
/// with modest corrections). That is a reading of an ambiguous source, not
/// settled physics.
///
/// `lambda_circ` must be formed with the annulus hydraulic diameter
/// (d_outer - d_inner) and the mean annulus velocity.
pub fn f_annulus_turbulent(lambda_circ: f64, d_outer: f64, d_inner: f64) -> CorrResult<f64> {
    positive(
        "f_annulus_turbulent",
        "outer diameter must be positive",
        d_outer,
    )?;
    positive(
        "f_annulus_turbulent",
        "inner diameter must be positive",
        d_inner,
    )?;
    if d_inner >= d_outer {
        return Err(CorrError::InvalidArg {
            func: "f_annulus_turbulent",
            what: "inner diameter must be smaller than outer diameter",
        });
    }
    positive(
        "f_annulus_turbulent",
        "round-pipe friction factor must be positive",
        lambda_circ,
    )?;

    let r = d_inner / d_outer;
    let inv_lambda_ann = (0.02 * r + 0.98) * (1.0 / lambda_circ - 0.27 * r + 0.1);

    if inv_lambda_ann <= 0.0 {
        return Err(CorrError::InvalidArg {
            func: "f_annulus_turbulent",
            what: "computed 1/lambda_ann is non-positive; check inputs",
        });
    }

    Ok(1.0 / inv_lambda_ann)
}

/// Entrance loss for a sharp, thick-edged inlet facing a baffle.
///
/// Base term 0.5 for the flush sharp-thick inlet, plus the baffle proximity
/// term sigma_1(h/D_h) from Idelchik Diagram 3.8. For h/D_h >= 1 the
/// proximity term vanishes.
pub fn sharp_thick_inlet_facing_baffle(baffle_gap: f64, hydraulic_diameter: f64) -> CorrResult<f64> {
    positive(
        "sharp_thick_inlet_facing_baffle",
        "hydraulic diameter must be positive",
        hydraulic_diameter,
    )?;

    const K_PRIME: f64 = 0.5;

    // Idelchik 3.8: h/D_h -> sigma_1
    const X: [f64; 8] = [0.20, 0.30, 0.40, 0.50, 0.60, 0.70, 0.80, 1.00];
    const Y: [f64; 8] = [1.60, 0.65, 0.37, 0.25, 0.15, 0.07, 0.04, 0.00];

    let r = baffle_gap / hydraulic_diameter;
    let sigma1 = if r >= 1.0 {
        0.0
    } else {
        interp_clamped(&X, &Y, r)
    };

    Ok(K_PRIME + sigma1)
}

/// Discharge loss for a straight circular tube exiting onto a baffle.
///
/// Idelchik, Diagram 11.7, alpha = 0 deg row (no diffuser). The tabulated
/// data cover h/D in [0.50, 1.00]; queries outside that interval clamp to
/// the end values.
pub fn discharge_from_straight_tube_to_baffle(
    baffle_gap: f64,
    hydraulic_diameter: f64,
) -> CorrResult<f64> {
    positive(
        "discharge_from_straight_tube_to_baffle",
        "hydraulic diameter must be positive",
        hydraulic_diameter,
    )?;

    // Idelchik 11.7, alpha = 0 deg
    const X: [f64; 4] = [0.50, 0.60, 0.70, 1.00];
    const Y: [f64; 4] = [1.37, 1.20, 1.11, 1.00];

    Ok(interp_clamped(&X, &Y, baffle_gap / hydraulic_diameter))
}

/// Loss coefficient for a smooth conical diffuser at Re ~ 1e5 and area
/// ratio 2, interpolated over the diverging half-angle in degrees.
pub fn smooth_cone_diffuser_nar1(diverging_angle: f64) -> CorrResult<f64> {
    if !diverging_angle.is_finite() {
        return Err(CorrError::InvalidArg {
            func: "smooth_cone_diffuser_nar1",
            what: "diverging angle must be finite",
        });
    }

    const X: [f64; 14] = [
        3.0, 4.0, 6.0, 8.0, 10.0, 12.0, 14.0, 16.0, 20.0, 30.0, 45.0, 60.0, 90.0, 120.0,
    ];
    const Y: [f64; 14] = [
        0.120, 0.106, 0.090, 0.083, 0.080, 0.088, 0.102, 0.122, 0.196, 0.298, 0.297, 0.286, 0.283,
        0.279,
    ];

    Ok(interp_clamped(&X, &Y, diverging_angle))
}

// Idelchik beveled-contraction zeta'' columns: l/D_h -> zeta''
const BEVEL_X: [f64; 6] = [0.025, 0.050, 0.075, 0.10, 0.15, 0.60];
const BEVEL_Y_60: [f64; 6] = [0.40, 0.30, 0.23, 0.18, 0.15, 0.12];
const BEVEL_Y_140: [f64; 6] = [0.45, 0.42, 0.40, 0.38, 0.37, 0.36];

fn beveled_contraction(
    func: &'static str,
    zeta_pp_table: &[f64; 6],
    bevel_length: f64,
    hydraulic_diameter: f64,
    inlet_area: f64,
    outlet_area: f64,
) -> CorrResult<f64> {
    positive(func, "inlet area must be positive", inlet_area)?;
    positive(func, "outlet area must be positive", outlet_area)?;
    positive(func, "hydraulic diameter must be positive", hydraulic_diameter)?;

    let r = outlet_area / inlet_area;
    if r > 1.0 {
        return Err(CorrError::InvalidArg {
            func,
            what: "outlet_area / inlet_area must be in (0, 1]",
        });
    }

    let zeta_pp = interp_clamped(&BEVEL_X, zeta_pp_table, bevel_length / hydraulic_diameter);
    Ok(zeta_pp * (1.0 - r).powf(0.75))
}

/// Total loss coefficient for a beveled contraction at alpha = 60 deg,
/// referenced to the downstream velocity:
/// zeta = zeta''(l/D_h) * (1 - A_out/A_in)^(3/4).
pub fn beveled_contraction_alpha60(
    bevel_length: f64,
    hydraulic_diameter: f64,
    inlet_area: f64,
    outlet_area: f64,
) -> CorrResult<f64> {
    beveled_contraction(
        "beveled_contraction_alpha60",
        &BEVEL_Y_60,
        bevel_length,
        hydraulic_diameter,
        inlet_area,
        outlet_area,
    )
}

/// Total loss coefficient for a beveled contraction at alpha = 140 deg,
/// referenced to the downstream velocity.
pub fn beveled_contraction_alpha140(
    bevel_length: f64,
    hydraulic_diameter: f64,
    inlet_area: f64,
    outlet_area: f64,
) -> CorrResult<f64> {
    beveled_contraction(
        "beveled_contraction_alpha140",
        &BEVEL_Y_140,
        bevel_length,
        hydraulic_diameter,
        inlet_area,
        outlet_area,
    )
}
