//! # kernelite
//!
//! Elementwise activation kernels and an explicit kernel registry for a
//! lightweight, inference oriented tensor operator framework.
//!
//! This crate re-exports `kernelite-core` and the `KernelParams` derive.
//! See [feature_flags] for details on feature flags.
//!
//! ```rust
//! # use kernelite::prelude::*;
//! let dev: Cpu = Default::default();
//! let ctx = Context::from(dev.clone());
//!
//! let x = dev.tensor([1.0f32, 2.0, 3.0]);
//! let out = x.square(&ctx);
//! assert_eq!(out.as_vec::<f32>(), [1.0, 4.0, 9.0]);
//!
//! let dx = x.square_grad(&out, &dev.tensor([1.0f32, 1.0, 1.0]), &ctx);
//! assert_eq!(dx.as_vec::<f32>(), [2.0, 4.0, 6.0]);
//! ```
//!
//! Parameter bundles for new kernels derive their port names:
//!
//! ```rust
//! # use kernelite::prelude::*;
//! use kernelite::KernelParams;
//!
//! #[derive(Debug, KernelParams)]
//! struct ScaleParams<'a> {
//!     #[input("X")]
//!     x: &'a Tensor,
//!     #[input("Scale")]
//!     scale: &'a Tensor,
//!     #[output("Out")]
//!     out: &'a mut Tensor,
//! }
//!
//! assert_eq!(ScaleParams::INPUTS, ["X", "Scale"]);
//! assert_eq!(ScaleParams::OUTPUTS, ["Out"]);
//! ```

extern crate self as kernelite;

pub mod feature_flags;

pub use kernelite_core::*;

pub use kernelite_derives::KernelParams;

pub mod prelude {
    pub use kernelite_core::prelude::*;
}
