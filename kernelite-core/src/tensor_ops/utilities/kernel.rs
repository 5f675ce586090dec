use log::trace;
use std::marker::PhantomData;

use super::cpu_kernels::{activate, activate_grad, UnaryDerivative};
use crate::{
    context::Context,
    dtypes::Dtype,
    params::{ActivationGradParams, ActivationParams, Params},
    registry::{KernelDescriptor, KernelKey, Layout, Precision, Target, TensorTy},
    tensor::Error,
};

/// A compiled implementation of one operator for one target, precision and layout.
pub trait Kernel: std::fmt::Debug + Send + Sync {
    fn op_type(&self) -> &'static str;

    fn target(&self) -> Target {
        Target::Host
    }

    fn precision(&self) -> Precision;

    fn layout(&self) -> Layout {
        Layout::NCHW
    }

    fn key(&self) -> KernelKey {
        KernelKey::new(self.op_type(), self.target(), self.precision(), self.layout())
    }

    /// Runs the kernel, allocating its outputs if needed.
    fn try_run(&self, ctx: &Context, params: &mut Params<'_>) -> Result<(), Error>;

    /// Runs the kernel - **panics** if the context has no device, or on any
    /// other error. See [Kernel::try_run].
    fn run(&self, ctx: &Context, params: &mut Params<'_>) {
        if let Err(err) = self.try_run(ctx, params) {
            panic!("{} kernel failed: {err}", self.key());
        }
    }
}

/// Names the forward and gradient operators of an elementwise activation.
pub trait ActivationOp: 'static + std::fmt::Debug + Default + Clone + Send + Sync {
    const OP_TYPE: &'static str;
    const GRAD_OP_TYPE: &'static str;
}

/// Forward kernel of an elementwise activation: `Out = f(X)`.
#[derive(Debug, Clone, Copy)]
pub struct ActivationCompute<Op, E> {
    op: Op,
    marker: PhantomData<fn() -> E>,
}

impl<Op: Default, E> Default for ActivationCompute<Op, E> {
    fn default() -> Self {
        Self {
            op: Default::default(),
            marker: PhantomData,
        }
    }
}

impl<Op: ActivationOp + UnaryDerivative<E>, E: Dtype> ActivationCompute<Op, E> {
    /// Describes this kernel with host tensors bound to [ActivationParams]' ports.
    pub fn descriptor() -> KernelDescriptor {
        KernelDescriptor::of::<Self>().bind_ports::<ActivationParams>(TensorTy::host())
    }
}

impl<Op: ActivationOp + UnaryDerivative<E>, E: Dtype> Kernel for ActivationCompute<Op, E> {
    fn op_type(&self) -> &'static str {
        Op::OP_TYPE
    }

    fn precision(&self) -> Precision {
        E::PRECISION
    }

    fn try_run(&self, ctx: &Context, params: &mut Params<'_>) -> Result<(), Error> {
        let dev = ctx.try_cpu()?;
        let params = params.try_as_activation()?;
        let x = params.x.try_data::<E>()?;
        trace!(
            "{} forward: {} x {} ({} -> {})",
            Op::OP_TYPE,
            x.len(),
            E::DTYPE,
            params.x.id(),
            params.out.id()
        );
        debug_assert_eq!(x.len(), params.out.num_elements());
        let out = params.out.try_mutable_data::<E>(dev)?;
        activate(dev, x, out, |x| self.op.f(x));
        Ok(())
    }
}

/// Gradient kernel of an elementwise activation: `X@GRAD = f'(X) * Out@GRAD`.
#[derive(Debug, Clone, Copy)]
pub struct ActivationGradCompute<Op, E> {
    op: Op,
    marker: PhantomData<fn() -> E>,
}

impl<Op: Default, E> Default for ActivationGradCompute<Op, E> {
    fn default() -> Self {
        Self {
            op: Default::default(),
            marker: PhantomData,
        }
    }
}

impl<Op: ActivationOp + UnaryDerivative<E>, E: Dtype> ActivationGradCompute<Op, E> {
    /// Describes this kernel with host tensors bound to [ActivationGradParams]' ports.
    pub fn descriptor() -> KernelDescriptor {
        KernelDescriptor::of::<Self>().bind_ports::<ActivationGradParams>(TensorTy::host())
    }
}

impl<Op: ActivationOp + UnaryDerivative<E>, E: Dtype> Kernel for ActivationGradCompute<Op, E> {
    fn op_type(&self) -> &'static str {
        Op::GRAD_OP_TYPE
    }

    fn precision(&self) -> Precision {
        E::PRECISION
    }

    fn try_run(&self, ctx: &Context, params: &mut Params<'_>) -> Result<(), Error> {
        let dev = ctx.try_cpu()?;
        let params = params.try_as_activation_grad()?;
        let inp = if Op::DF_USES_FX {
            params.out.try_data::<E>()?
        } else {
            params.x.try_data::<E>()?
        };
        let grad_out = params.out_grad.try_data::<E>()?;
        trace!(
            "{} backward: {} x {} ({} -> {})",
            Op::GRAD_OP_TYPE,
            inp.len(),
            E::DTYPE,
            params.out_grad.id(),
            params.x_grad.id()
        );
        debug_assert_eq!(inp.len(), params.x_grad.num_elements());
        let grad_inp = params.x_grad.try_mutable_data::<E>(dev)?;
        activate_grad(dev, inp, grad_out, grad_inp, |x| self.op.df(x));
        Ok(())
    }
}
