#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// I/O utilities for reading and writing 3D data.
pub mod io;

/// Implicit plane model.
pub mod plane;

/// Point cloud container.
pub mod pointcloud;

pub use plane::{PlaneError, PlaneModel};
pub use pointcloud::PointCloud;
