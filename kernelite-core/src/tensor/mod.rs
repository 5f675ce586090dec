//! The [Tensor] struct, [Cpu] device, and the crate wide [Error] type.
//!
//! # Storage is allocated by the writer
//!
//! A [Tensor] can be created with only a shape:
//!
//! ```rust
//! # use kernelite_core::prelude::*;
//! let out = Tensor::new([2, 3]);
//! assert!(!out.is_allocated());
//! assert_eq!(out.dtype(), None);
//! ```
//!
//! The kernel that writes `out` calls [Tensor::try_mutable_data] with the
//! element type it produces, which allocates zeroed storage on the device if
//! there is none (or if the existing storage has the wrong type or length).
//!
//! ```rust
//! # use kernelite_core::prelude::*;
//! let dev: Cpu = Default::default();
//! let mut out = Tensor::new([2, 3]);
//! let data: &mut [f32] = out.try_mutable_data(&dev).unwrap();
//! assert_eq!(data.len(), 6);
//! assert_eq!(out.dtype(), Some(DType::F32));
//! ```
//!
//! # Creating tensors from data
//!
//! ```rust
//! # use kernelite_core::prelude::*;
//! let dev: Cpu = Default::default();
//! let a = dev.tensor([1.0f64, 2.0, 3.0]);
//! let b = dev.tensor_from_vec(vec![1.0f32, 2.0, 3.0, 4.0], [2, 2]);
//! assert_eq!(a.shape().dims(), [3]);
//! assert_eq!(b.as_vec::<f32>(), [1.0, 2.0, 3.0, 4.0]);
//! ```

mod buffer;
pub(crate) mod cpu;
mod error;
mod tensor_impl;
mod unique_id;

pub use buffer::Buffer;
pub use cpu::Cpu;
pub use error::Error;
pub use tensor_impl::Tensor;
pub use unique_id::UniqueId;

pub(crate) use unique_id::unique_id;
