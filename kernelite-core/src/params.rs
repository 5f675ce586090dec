//! Parameter bundles: the tensors a kernel reads and writes.
//!
//! Each bundle is a plain struct of borrowed tensors. Inputs are shared
//! borrows, outputs are exclusive ones, so the borrow checker enforces that
//! nothing else touches an output while the kernel writes it.
//!
//! Bundles declare their ports with `#[derive(KernelParams)]`, which implements
//! [PortSpec]. The registry reads those port names when it describes a kernel,
//! so the names a kernel is registered with are always the names of the
//! tensors it actually uses.
//!
//! [Params] is the type erased form that goes through [crate::tensor_ops::Kernel].

use kernelite_derives::KernelParams;

use crate::tensor::{Error, Tensor};

/// The named input and output ports of a parameter bundle.
///
/// Usually implemented with `#[derive(KernelParams)]`.
pub trait PortSpec {
    const NAME: &'static str;
    const INPUTS: &'static [&'static str];
    const OUTPUTS: &'static [&'static str];
}

/// Parameters of a forward elementwise activation: `Out = f(X)`.
#[derive(Debug, KernelParams)]
pub struct ActivationParams<'a> {
    #[input("X")]
    pub x: &'a Tensor,
    #[output("Out")]
    pub out: &'a mut Tensor,
}

impl<'a> ActivationParams<'a> {
    pub fn new(x: &'a Tensor, out: &'a mut Tensor) -> Self {
        Self { x, out }
    }
}

/// Parameters of an elementwise activation gradient: `X@GRAD = f'(X) * Out@GRAD`.
#[derive(Debug, KernelParams)]
pub struct ActivationGradParams<'a> {
    #[input("X")]
    pub x: &'a Tensor,
    #[input("Out")]
    pub out: &'a Tensor,
    #[input("Out@GRAD")]
    pub out_grad: &'a Tensor,
    #[output("X@GRAD")]
    pub x_grad: &'a mut Tensor,
}

impl<'a> ActivationGradParams<'a> {
    pub fn new(
        x: &'a Tensor,
        out: &'a Tensor,
        out_grad: &'a Tensor,
        x_grad: &'a mut Tensor,
    ) -> Self {
        Self {
            x,
            out,
            out_grad,
            x_grad,
        }
    }
}

/// Any parameter bundle a kernel can receive.
#[non_exhaustive]
#[derive(Debug)]
pub enum Params<'a> {
    Activation(ActivationParams<'a>),
    ActivationGrad(ActivationGradParams<'a>),
}

impl<'a> Params<'a> {
    /// The [PortSpec::NAME] of the bundle inside.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Activation(_) => ActivationParams::NAME,
            Self::ActivationGrad(_) => ActivationGradParams::NAME,
        }
    }

    pub fn try_as_activation(&mut self) -> Result<&mut ActivationParams<'a>, Error> {
        match self {
            Self::Activation(params) => Ok(params),
            other => Err(Error::ParamsMismatch {
                expected: ActivationParams::NAME,
                found: other.name(),
            }),
        }
    }

    pub fn try_as_activation_grad(&mut self) -> Result<&mut ActivationGradParams<'a>, Error> {
        match self {
            Self::ActivationGrad(params) => Ok(params),
            other => Err(Error::ParamsMismatch {
                expected: ActivationGradParams::NAME,
                found: other.name(),
            }),
        }
    }
}

impl<'a> From<ActivationParams<'a>> for Params<'a> {
    fn from(params: ActivationParams<'a>) -> Self {
        Self::Activation(params)
    }
}

impl<'a> From<ActivationGradParams<'a>> for Params<'a> {
    fn from(params: ActivationGradParams<'a>) -> Self {
        Self::ActivationGrad(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activation_ports() {
        assert_eq!(ActivationParams::NAME, "ActivationParams");
        assert_eq!(ActivationParams::INPUTS, ["X"]);
        assert_eq!(ActivationParams::OUTPUTS, ["Out"]);
    }

    #[test]
    fn test_activation_grad_ports() {
        assert_eq!(ActivationGradParams::INPUTS, ["X", "Out", "Out@GRAD"]);
        assert_eq!(ActivationGradParams::OUTPUTS, ["X@GRAD"]);
    }

    #[test]
    fn test_params_mismatch() {
        let x = Tensor::new(2);
        let mut out = Tensor::new(2);
        let mut params = Params::from(ActivationParams::new(&x, &mut out));
        assert_eq!(params.name(), "ActivationParams");
        assert!(params.try_as_activation().is_ok());
        assert!(matches!(
            params.try_as_activation_grad(),
            Err(Error::ParamsMismatch {
                expected: "ActivationGradParams",
                found: "ActivationParams",
            })
        ));
    }
}
