//! pd-core: stable foundation for the pressure-drop workspace.
//!
//! Contains:
//! - units (uom SI types + constructors + standard gravity)
//! - numeric (Real + tolerances + float helpers)
//! - interp (shared clamped table interpolation for correlation data)
//! - error (shared error types)

pub mod error;
pub mod interp;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{PdError, PdResult};
pub use interp::interp_clamped;
pub use numeric::*;
pub use units::*;
