//! Compute kernels and the [Kernel] trait they implement.
//!
//! Every kernel is a small struct implementing [Kernel]. It receives a
//! [crate::context::Context] and a [crate::params::Params] bundle, borrows the
//! device from the context, allocates its outputs on demand, and writes them.
//!
//! Elementwise activations share two generic drivers: a forward one applying
//! `f` to every element, and a backward one multiplying `f'` by the incoming
//! gradient. An activation only has to provide `f` and `f'` by implementing
//! [UnaryDerivative] and naming its operators with [ActivationOp].
//!
//! # Activations
//!
//! | op | forward | gradient |
//! | --- | --- | --- |
//! | `square` | `x^2` | `2 * x * dy` |
//!
//! Besides running kernels through [Kernel::run], tensors expose typed
//! shortcuts such as [crate::tensor::Tensor::square].

pub(crate) mod square;
mod utilities;

pub use square::{SquareCompute, SquareGradCompute, SquareKernelOp};
pub use utilities::{ActivationCompute, ActivationGradCompute, ActivationOp, Kernel, UnaryDerivative};
