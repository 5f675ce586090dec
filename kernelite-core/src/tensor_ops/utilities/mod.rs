pub(crate) mod cpu_kernels;
mod kernel;

pub use cpu_kernels::UnaryDerivative;
pub use kernel::{ActivationCompute, ActivationGradCompute, ActivationOp, Kernel};
