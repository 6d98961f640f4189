//! pd-network: element data model and network builder for steady serial
//! flow networks.
//!
//! Contains:
//! - element (Inlet/Pipe/Junction/Outlet and their closed-form relations)
//! - network (the immutable, ordered element chain)
//! - builder (specification -> evaluated Network)
//! - error (build and element error types)

pub mod builder;
pub mod element;
pub mod error;
pub mod network;

pub use builder::build_network;
pub use element::{
    Element, ElementKind, FlowDirection, Inlet, Junction, Outlet, Pipe, PipeGeometry,
};
pub use error::{BuildError, ElementError};
pub use network::Network;
