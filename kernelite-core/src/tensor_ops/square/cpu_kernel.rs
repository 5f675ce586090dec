use crate::{dtypes::Dtype, tensor_ops::UnaryDerivative};

impl<E: Dtype> UnaryDerivative<E> for super::SquareKernelOp {
    const DF_USES_FX: bool = false;
    #[inline(always)]
    fn f(&self, x: &E) -> E {
        *x * *x
    }
    #[inline(always)]
    fn df(&self, x: &E) -> E {
        (E::ONE + E::ONE) * *x
    }
}
