mod cpu_kernel;

use std::vec::Vec;

use super::{ActivationCompute, ActivationGradCompute, ActivationOp, Kernel};
use crate::{
    context::Context,
    dtypes::DType,
    params::{ActivationGradParams, ActivationParams, Params},
    registry::KernelDescriptor,
    tensor::{Error, Tensor},
};

#[derive(Debug, Default, Copy, Clone)]
pub struct SquareKernelOp;

impl ActivationOp for SquareKernelOp {
    const OP_TYPE: &'static str = "square";
    const GRAD_OP_TYPE: &'static str = "square_grad";
}

/// `Out = X^2`, registered as `square`.
pub type SquareCompute<E> = ActivationCompute<SquareKernelOp, E>;

/// `X@GRAD = 2 * X * Out@GRAD`, registered as `square_grad`.
pub type SquareGradCompute<E> = ActivationGradCompute<SquareKernelOp, E>;

pub(crate) fn square_kernels() -> Vec<KernelDescriptor> {
    #[allow(unused_mut)]
    let mut kernels = std::vec![
        SquareCompute::<f32>::descriptor(),
        SquareGradCompute::<f32>::descriptor(),
        SquareCompute::<f64>::descriptor(),
        SquareGradCompute::<f64>::descriptor(),
    ];
    #[cfg(feature = "f16")]
    kernels.extend([
        SquareCompute::<crate::dtypes::f16>::descriptor(),
        SquareGradCompute::<crate::dtypes::f16>::descriptor(),
    ]);
    kernels
}

impl Tensor {
    /// `t^2`, in the dtype `t` is stored in.
    ///
    /// The derivative is `2 * t`, see [Tensor::square_grad].
    ///
    /// Examples:
    /// ```rust
    /// # use kernelite_core::prelude::*;
    /// let dev: Cpu = Default::default();
    /// let ctx = Context::from(dev.clone());
    /// let t = dev.tensor([-1.0f32, 0.0, 1.0, 2.0]);
    /// let r = t.square(&ctx);
    /// assert_eq!(r.as_vec::<f32>(), [1.0, 0.0, 1.0, 4.0]);
    /// ```
    pub fn square(&self, ctx: &Context) -> Tensor {
        self.try_square(ctx).unwrap()
    }

    /// See [Tensor::square]
    pub fn try_square(&self, ctx: &Context) -> Result<Tensor, Error> {
        let mut out = Tensor::new(self.shape.clone());
        let mut params = Params::from(ActivationParams::new(self, &mut out));
        match self.try_dtype()? {
            DType::F32 => SquareCompute::<f32>::default().try_run(ctx, &mut params)?,
            DType::F64 => SquareCompute::<f64>::default().try_run(ctx, &mut params)?,
            #[cfg(feature = "f16")]
            DType::F16 => {
                SquareCompute::<crate::dtypes::f16>::default().try_run(ctx, &mut params)?
            }
        }
        Ok(out)
    }

    /// The gradient of [Tensor::square] with respect to `self`, given the
    /// forward output `out` and the gradient flowing into it `out_grad`.
    ///
    /// ```rust
    /// # use kernelite_core::prelude::*;
    /// let dev: Cpu = Default::default();
    /// let ctx = Context::from(dev.clone());
    /// let x = dev.tensor([1.0f32, 2.0, 3.0]);
    /// let out = x.square(&ctx);
    /// let dx = x.square_grad(&out, &dev.tensor([1.0f32, 1.0, 1.0]), &ctx);
    /// assert_eq!(dx.as_vec::<f32>(), [2.0, 4.0, 6.0]);
    /// ```
    pub fn square_grad(&self, out: &Tensor, out_grad: &Tensor, ctx: &Context) -> Tensor {
        self.try_square_grad(out, out_grad, ctx).unwrap()
    }

    /// See [Tensor::square_grad]
    pub fn try_square_grad(
        &self,
        out: &Tensor,
        out_grad: &Tensor,
        ctx: &Context,
    ) -> Result<Tensor, Error> {
        let mut x_grad = Tensor::new(self.shape.clone());
        let mut params = Params::from(ActivationGradParams::new(self, out, out_grad, &mut x_grad));
        match self.try_dtype()? {
            DType::F32 => SquareGradCompute::<f32>::default().try_run(ctx, &mut params)?,
            DType::F64 => SquareGradCompute::<f64>::default().try_run(ctx, &mut params)?,
            #[cfg(feature = "f16")]
            DType::F16 => {
                SquareGradCompute::<crate::dtypes::f16>::default().try_run(ctx, &mut params)?
            }
        }
        Ok(x_grad)
    }
}
