#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use planefit_linalg as linalg;

#[doc(inline)]
pub use planefit_3d as k3d;

#[doc(inline)]
pub use planefit_ransac as ransac;
