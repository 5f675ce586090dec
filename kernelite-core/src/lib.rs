//! # kernelite
//!
//! Leaf compute kernels for an inference oriented tensor operator framework,
//! plus the registry a dispatcher uses to find them.
//!
//! The framework around the kernels (operator graphs, shape inference,
//! scheduling) lives elsewhere. What this crate provides is:
//!
//! 1. Dense [`tensor::Tensor`]s whose storage is allocated lazily by the kernel
//!    that writes them.
//! 2. A [`tensor::Cpu`] device that allocates that storage and runs the
//!    elementwise loops, optionally on a rayon thread pool.
//! 3. Kernels ([`tensor_ops::Kernel`]) that take a [`context::Context`] and a
//!    parameter bundle ([`params::Params`]).
//! 4. A [`registry::KernelRegistry`] keyed by operator name, target, precision
//!    and layout.
//!
//! # Running a kernel directly
//!
//! ```rust
//! # use kernelite_core::prelude::*;
//! let dev: Cpu = Default::default();
//! let ctx = Context::from(dev.clone());
//! let x = dev.tensor([1.0f32, 2.0, 3.0]);
//! let mut out = Tensor::new(x.shape().clone());
//!
//! let kernel = SquareCompute::<f32>::default();
//! kernel.run(&ctx, &mut ActivationParams::new(&x, &mut out).into());
//! assert_eq!(out.as_vec::<f32>(), [1.0, 4.0, 9.0]);
//! ```
//!
//! # Dispatching through the registry
//!
//! ```rust
//! # use kernelite_core::prelude::*;
//! let registry = KernelRegistry::with_builtin();
//! let found = registry.find("square", Target::Host, Precision::Float);
//! assert_eq!(found.len(), 1);
//!
//! let dev: Cpu = Default::default();
//! let ctx = Context::from(dev.clone());
//! let x = dev.tensor([-1.0f32, 0.5]);
//! let mut out = Tensor::new(x.shape().clone());
//! let kernel = found[0].create();
//! kernel.run(&ctx, &mut ActivationParams::new(&x, &mut out).into());
//! assert_eq!(out.as_vec::<f32>(), [1.0, 0.25]);
//! ```

extern crate self as kernelite;

pub mod context;
pub mod dtypes;
pub mod params;
pub mod registry;
pub mod shapes;
pub mod tensor;
pub mod tensor_ops;

/// Contains subset of all public exports.
pub mod prelude {
    pub use crate::context::*;
    pub use crate::dtypes::*;
    pub use crate::params::*;
    pub use crate::registry::*;
    pub use crate::shapes::*;
    pub use crate::tensor::*;
    pub use crate::tensor_ops::*;
}

#[cfg(test)]
pub(crate) mod tests {
    pub use num_traits::FromPrimitive;

    pub type TestDevice = crate::tensor::Cpu;

    #[cfg(all(feature = "test-f64", feature = "test-f16"))]
    compile_error!("f64 and f16 cannot be tested at the same time");

    #[cfg(all(not(feature = "test-f16"), not(feature = "test-f64")))]
    pub type TestDtype = f32;

    #[cfg(feature = "test-f16")]
    pub type TestDtype = crate::dtypes::f16;

    #[cfg(feature = "test-f64")]
    pub type TestDtype = f64;

    pub fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    /// Builds a 1d tensor of [TestDtype] from `f64` literals.
    pub fn test_tensor<const N: usize>(dev: &TestDevice, values: [f64; N]) -> crate::tensor::Tensor {
        dev.tensor(values.map(|v| <TestDtype as FromPrimitive>::from_f64(v).unwrap()))
    }

    pub trait AssertClose {
        type Elem: std::fmt::Display + std::fmt::Debug + Copy;
        const DEFAULT_TOLERANCE: Self::Elem;
        fn get_default_tol(&self) -> Self::Elem {
            Self::DEFAULT_TOLERANCE
        }
        fn get_far_pair(
            &self,
            rhs: &Self,
            tolerance: Self::Elem,
        ) -> Option<(Self::Elem, Self::Elem)>;
    }

    #[cfg(feature = "f16")]
    impl AssertClose for half::f16 {
        type Elem = Self;
        const DEFAULT_TOLERANCE: Self::Elem = half::f16::from_f32_const(1e-2);
        fn get_far_pair(&self, rhs: &Self, tolerance: Self) -> Option<(Self, Self)> {
            if num_traits::Float::abs(*self - *rhs) > tolerance {
                Some((*self, *rhs))
            } else {
                None
            }
        }
    }

    impl AssertClose for f32 {
        type Elem = f32;
        const DEFAULT_TOLERANCE: Self::Elem = 1e-6;
        fn get_far_pair(&self, rhs: &Self, tolerance: f32) -> Option<(f32, f32)> {
            if (self - rhs).abs() > tolerance {
                Some((*self, *rhs))
            } else {
                None
            }
        }
    }

    impl AssertClose for f64 {
        type Elem = f64;
        const DEFAULT_TOLERANCE: Self::Elem = 1e-6;
        fn get_far_pair(&self, rhs: &Self, tolerance: f64) -> Option<(f64, f64)> {
            if (self - rhs).abs() > tolerance {
                Some((*self, *rhs))
            } else {
                None
            }
        }
    }

    impl<T: AssertClose> AssertClose for std::vec::Vec<T> {
        type Elem = T::Elem;
        const DEFAULT_TOLERANCE: Self::Elem = T::DEFAULT_TOLERANCE;
        fn get_far_pair(
            &self,
            rhs: &Self,
            tolerance: Self::Elem,
        ) -> Option<(Self::Elem, Self::Elem)> {
            assert_eq!(self.len(), rhs.len(), "length mismatch");
            for (l, r) in self.iter().zip(rhs.iter()) {
                if let Some(pair) = l.get_far_pair(r, tolerance) {
                    return Some(pair);
                }
            }
            None
        }
    }

    macro_rules! assert_close_to_literal {
        ($Lhs:expr, $Rhs:expr) => {{
            let lhs: std::vec::Vec<TestDtype> = $Lhs.as_vec();
            let rhs: std::vec::Vec<TestDtype> = $Rhs
                .iter()
                .map(|&x: &f64| num_traits::FromPrimitive::from_f64(x).unwrap())
                .collect();
            let tol = AssertClose::get_default_tol(&lhs);
            if let Some((l, r)) = AssertClose::get_far_pair(&lhs, &rhs, tol) {
                panic!("lhs != rhs | {l} != {r}\n\n{lhs:?}\n\n{rhs:?}");
            }
        }};
    }
    pub(crate) use assert_close_to_literal;

    macro_rules! assert_close {
        ($Lhs:expr, $Rhs:expr) => {
            let lhs = $Lhs;
            let tol = AssertClose::get_default_tol(&lhs);
            let far_pair = AssertClose::get_far_pair(&lhs, &$Rhs, tol);
            if let Some((l, r)) = far_pair {
                panic!("lhs != rhs | {l} != {r}");
            }
        };
    }
    pub(crate) use assert_close;

    #[test]
    fn test_test_tensor_is_test_dtype() {
        use crate::dtypes::Dtype;
        let dev: TestDevice = Default::default();
        let t = test_tensor(&dev, [0.5, -2.0]);
        assert_eq!(t.dtype(), Some(TestDtype::DTYPE));
        assert_close_to_literal!(t, [0.5, -2.0]);
    }
}
