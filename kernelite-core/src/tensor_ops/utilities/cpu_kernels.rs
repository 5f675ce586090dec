use crate::{dtypes::Dtype, tensor::Cpu};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// An elementwise function and its derivative.
pub trait UnaryDerivative<E>: Send + Sync {
    /// Whether the [UnaryDerivative::df] function can re-use the output
    /// from [UnaryDerivative::f].
    const DF_USES_FX: bool;

    fn f(&self, x: &E) -> E;

    /// Receives `f(x)` if [UnaryDerivative::DF_USES_FX] is true,
    /// otherwise `x`.
    fn df(&self, x: &E) -> E;
}

/// `out[i] = f(inp[i])`.
pub(crate) fn activate<E: Dtype, F: Fn(&E) -> E + Sync>(dev: &Cpu, inp: &[E], out: &mut [E], f: F) {
    debug_assert_eq!(inp.len(), out.len());
    dev.install(|| {
        #[cfg(not(feature = "parallel"))]
        for (o, x) in out.iter_mut().zip(inp.iter()) {
            *o = f(x);
        }

        #[cfg(feature = "parallel")]
        out.par_iter_mut()
            .zip(inp.par_iter())
            .for_each(|(o, x)| *o = f(x));
    })
}

/// `grad_inp[i] = df(inp[i]) * grad_out[i]`.
///
/// `inp` is whatever `df` is expressed in, the op's input or its output.
/// `grad_inp` is overwritten, not accumulated into.
pub(crate) fn activate_grad<E: Dtype, F: Fn(&E) -> E + Sync>(
    dev: &Cpu,
    inp: &[E],
    grad_out: &[E],
    grad_inp: &mut [E],
    df: F,
) {
    debug_assert_eq!(inp.len(), grad_inp.len());
    debug_assert_eq!(grad_out.len(), grad_inp.len());
    dev.install(|| {
        #[cfg(not(feature = "parallel"))]
        for (i, x) in grad_inp.iter_mut().enumerate() {
            *x = df(&inp[i]) * grad_out[i];
        }

        #[cfg(feature = "parallel")]
        grad_inp.par_iter_mut().enumerate().for_each(|(i, x)| {
            *x = df(&inp[i]) * grad_out[i];
        });
    })
}
