//! pd-corr: duct geometry functions and empirical loss-coefficient
//! correlations, exposed through name-keyed registries.
//!
//! Contains:
//! - geom (flow areas, wetted perimeters, hydraulic diameters)
//! - loss (tabulated Idelchik-diagram correlations)
//! - registry (string-addressable adapters over both libraries)
//! - error (shared error type)

pub mod error;
pub mod geom;
pub mod loss;
pub mod registry;

pub use error::{CorrError, CorrResult};
pub use registry::{Arg, Args, Registry, geometry_registry, loss_registry};
