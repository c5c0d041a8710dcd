//! Backend-agnostic rendering module
//!
//! Produces draw commands and triangle lists; presenting them is the
//! platform backend's job.

pub mod frame;
pub mod shapes;
pub mod vertex;

pub use frame::{DrawCommand, Frame, render};
pub use vertex::{Vertex, colors};
