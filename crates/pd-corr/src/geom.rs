//! Flow areas, wetted perimeters, and hydraulic diameters for the duct
//! shapes the network tool supports.
//!
//! All functions are pure and work in SI base units (m, m^2). Dimensional
//! inputs must be non-negative; shapes with an ordering constraint (annulus
//! outer vs. inner diameter) reject inverted inputs.

use std::f64::consts::PI;

use crate::error::{CorrError, CorrResult};

fn non_negative(func: &'static str, what: &'static str, v: f64) -> CorrResult<f64> {
    if v < 0.0 {
        return Err(CorrError::InvalidArg { func, what });
    }
    Ok(v)
}

fn annulus_diameters(func: &'static str, d_outer: f64, d_inner: f64) -> CorrResult<()> {
    if d_inner < 0.0 {
        return Err(CorrError::InvalidArg {
            func,
            what: "inner diameter must be non-negative",
        });
    }
    if d_outer <= d_inner {
        return Err(CorrError::InvalidArg {
            func,
            what: "outer diameter must exceed inner diameter",
        });
    }
    Ok(())
}

/// Area of a circle with diameter `d`.
pub fn area_circle(d: f64) -> CorrResult<f64> {
    non_negative("area_circle", "diameter must be non-negative", d)?;
    Ok(PI * d * d / 4.0)
}

/// Area of a rectangle `l` x `w`.
pub fn area_rectangle(l: f64, w: f64) -> CorrResult<f64> {
    non_negative("area_rectangle", "length must be non-negative", l)?;
    non_negative("area_rectangle", "width must be non-negative", w)?;
    Ok(l * w)
}

/// Area of a "capsule" slot: width `b` with two semicircular ends and a
/// straight length `l` between them.
///
/// A = b*l + pi*b^2/4 (the two semicircles form one circle of diameter b).
pub fn area_capsule_slot(b: f64, l: f64) -> CorrResult<f64> {
    non_negative("area_capsule_slot", "width must be non-negative", b)?;
    non_negative("area_capsule_slot", "length must be non-negative", l)?;
    Ok(area_rectangle(l, b)? + area_circle(b)?)
}

/// Area of a concentric annulus: pi/4 * (d_outer^2 - d_inner^2).
pub fn area_annulus(d_outer: f64, d_inner: f64) -> CorrResult<f64> {
    annulus_diameters("area_annulus", d_outer, d_inner)?;
    Ok(PI * (d_outer * d_outer - d_inner * d_inner) / 4.0)
}

/// Wetted perimeter of a full circular pipe (internal flow).
pub fn wetted_perimeter_circle(d: f64) -> CorrResult<f64> {
    non_negative("wetted_perimeter_circle", "diameter must be non-negative", d)?;
    Ok(PI * d)
}

/// Hydraulic diameter from the definition D_h = 4A / P_w.
pub fn hydraulic_diameter_generic(area: f64, wetted_perimeter: f64) -> CorrResult<f64> {
    non_negative("hydraulic_diameter_generic", "area must be non-negative", area)?;
    if wetted_perimeter <= 0.0 {
        return Err(CorrError::InvalidArg {
            func: "hydraulic_diameter_generic",
            what: "wetted perimeter must be positive",
        });
    }
    Ok(4.0 * area / wetted_perimeter)
}

/// Hydraulic diameter of a circular pipe (equals the actual diameter).
pub fn hydraulic_diameter_circle(d: f64) -> CorrResult<f64> {
    non_negative(
        "hydraulic_diameter_circle",
        "diameter must be non-negative",
        d,
    )?;
    Ok(d)
}

/// Hydraulic diameter of a concentric annulus from its wetted perimeter.
///
/// D_h = 4A / P_w with A = pi/4 (Do^2 - Di^2) and P_w = pi (Do + Di), the
/// sum of the inner and outer circumferences.
pub fn hydraulic_diameter_annulus(d_outer: f64, d_inner: f64) -> CorrResult<f64> {
    annulus_diameters("hydraulic_diameter_annulus", d_outer, d_inner)?;
    let area = PI * (d_outer * d_outer - d_inner * d_inner) / 4.0;
    let perimeter = PI * (d_outer + d_inner);
    Ok(4.0 * area / perimeter)
}

/// Hydraulic diameter of a concentric annulus, direct-difference form
/// (Idel'chik): D_h = d_outer - d_inner.
pub fn hydraulic_diameter_annulus_concentric(d_outer: f64, d_inner: f64) -> CorrResult<f64> {
    annulus_diameters("hydraulic_diameter_annulus_concentric", d_outer, d_inner)?;
    Ok(d_outer - d_inner)
}

/// Hydraulic diameter of a rectangular slot `a` x `b`.
///
/// D_h = 2ab / (a + b). For a >> b this approaches 2b.
pub fn hydraulic_diameter_rect_slot(a: f64, b: f64) -> CorrResult<f64> {
    non_negative(
        "hydraulic_diameter_rect_slot",
        "slot length must be non-negative",
        a,
    )?;
    non_negative(
        "hydraulic_diameter_rect_slot",
        "slot gap must be non-negative",
        b,
    )?;
    if a + b <= 0.0 {
        return Err(CorrError::InvalidArg {
            func: "hydraulic_diameter_rect_slot",
            what: "slot dimensions must not both be zero",
        });
    }
    Ok(2.0 * a * b / (a + b))
}

/// Hydraulic diameter of a "capsule" slot (width `b`, two semicircular ends,
/// straight length `l`): D_h = 4A / P_w with A = b*l + pi*b^2/4 and
/// P_w = 2l + pi*b.
pub fn hydraulic_diameter_capsule_slot(b: f64, l: f64) -> CorrResult<f64> {
    non_negative(
        "hydraulic_diameter_capsule_slot",
        "width must be non-negative",
        b,
    )?;
    non_negative(
        "hydraulic_diameter_capsule_slot",
        "length must be non-negative",
        l,
    )?;
    let perimeter = 2.0 * l + PI * b;
    if perimeter <= 0.0 {
        return Err(CorrError::InvalidArg {
            func: "hydraulic_diameter_capsule_slot",
            what: "capsule dimensions must not both be zero",
        });
    }
    let area = b * l + PI * b * b / 4.0;
    Ok(4.0 * area / perimeter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn circle_area_and_diameter() {
        assert_relative_eq!(area_circle(0.1).unwrap(), PI * 0.01 / 4.0, max_relative = 1e-12);
        assert_relative_eq!(hydraulic_diameter_circle(0.1).unwrap(), 0.1);
        assert!(area_circle(-0.1).is_err());
    }

    #[test]
    fn rectangle_area() {
        assert_relative_eq!(area_rectangle(2.0, 0.5).unwrap(), 1.0);
        assert!(area_rectangle(-1.0, 0.5).is_err());
    }

    #[test]
    fn annulus_area_matches_difference_of_circles() {
        let a = area_annulus(0.143, 0.102).unwrap();
        let expected = area_circle(0.143).unwrap() - area_circle(0.102).unwrap();
        assert_relative_eq!(a, expected, max_relative = 1e-12);
    }

    #[test]
    fn annulus_rejects_inverted_diameters() {
        assert!(area_annulus(0.1, 0.2).is_err());
        assert!(area_annulus(0.1, 0.1).is_err());
        assert!(hydraulic_diameter_annulus(0.1, -0.05).is_err());
    }

    #[test]
    fn annulus_hydraulic_diameter_forms_agree() {
        // 4A/P for a concentric annulus reduces to Do - Di exactly.
        let wetted = hydraulic_diameter_annulus(0.143, 0.102).unwrap();
        let direct = hydraulic_diameter_annulus_concentric(0.143, 0.102).unwrap();
        assert_relative_eq!(wetted, direct, max_relative = 1e-12);
        assert_relative_eq!(direct, 0.041, max_relative = 1e-12);
    }

    #[test]
    fn generic_hydraulic_diameter() {
        let a = area_circle(0.2).unwrap();
        let p = wetted_perimeter_circle(0.2).unwrap();
        assert_relative_eq!(hydraulic_diameter_generic(a, p).unwrap(), 0.2);
        assert!(hydraulic_diameter_generic(1.0, 0.0).is_err());
    }

    #[test]
    fn rect_slot_limits() {
        // Narrow slot: D_h -> 2b
        let dh = hydraulic_diameter_rect_slot(10.0, 0.01).unwrap();
        assert_relative_eq!(dh, 2.0 * 10.0 * 0.01 / 10.01);
        assert!(hydraulic_diameter_rect_slot(0.0, 0.0).is_err());
    }

    #[test]
    fn capsule_slot_consistency() {
        let b = 0.02;
        let l = 0.15;
        let area = area_capsule_slot(b, l).unwrap();
        let dh = hydraulic_diameter_capsule_slot(b, l).unwrap();
        assert_relative_eq!(dh, 4.0 * area / (2.0 * l + PI * b), max_relative = 1e-12);
    }

    #[test]
    fn capsule_degenerates_to_circle() {
        // l = 0 leaves just the two semicircular caps.
        let dh = hydraulic_diameter_capsule_slot(0.02, 0.0).unwrap();
        assert_relative_eq!(dh, 0.02, max_relative = 1e-12);
    }
}
