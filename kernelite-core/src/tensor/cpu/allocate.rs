use crate::{
    dtypes::{Dtype, Unit},
    shapes::Shape,
    tensor::{Error, Tensor},
};

use super::Cpu;

use std::vec::Vec;

impl Cpu {
    #[inline]
    pub(crate) fn try_alloc_zeros<E: Unit>(&self, numel: usize) -> Result<Vec<E>, Error> {
        self.try_alloc_elem::<E>(numel, Default::default())
    }

    #[inline]
    pub(crate) fn try_alloc_elem<E: Unit>(&self, numel: usize, elem: E) -> Result<Vec<E>, Error> {
        let mut data: Vec<E> = Vec::new();
        data.try_reserve(numel).map_err(|_| Error::OutOfMemory)?;
        data.resize(numel, elem);
        Ok(data)
    }

    /// Creates a 1d tensor from an array.
    ///
    /// ```rust
    /// # use kernelite_core::prelude::*;
    /// let dev: Cpu = Default::default();
    /// let t = dev.tensor([1.0f32, 2.0, 3.0]);
    /// assert_eq!(t.shape().dims(), [3]);
    /// ```
    pub fn tensor<E: Dtype, const N: usize>(&self, src: [E; N]) -> Tensor {
        self.tensor_from_vec(src.to_vec(), N)
    }

    /// Creates a tensor of `shape` from a [Vec] - **panics** if `src` does not
    /// have exactly `shape.num_elements()` elements.
    pub fn tensor_from_vec<E: Dtype>(&self, src: Vec<E>, shape: impl Into<Shape>) -> Tensor {
        self.try_tensor_from_vec(src, shape).unwrap()
    }

    /// Fallible version of [Cpu::tensor_from_vec].
    pub fn try_tensor_from_vec<E: Dtype>(
        &self,
        src: Vec<E>,
        shape: impl Into<Shape>,
    ) -> Result<Tensor, Error> {
        let mut tensor = Tensor::new(shape);
        let expected = tensor.num_elements();
        if src.len() != expected {
            return Err(Error::WrongNumElements {
                expected,
                found: src.len(),
            });
        }
        tensor.buffer = Some(E::into_buffer(src));
        Ok(tensor)
    }

    /// Creates a tensor of `shape` filled with zeros.
    pub fn try_zeros<E: Dtype>(&self, shape: impl Into<Shape>) -> Result<Tensor, Error> {
        let mut tensor = Tensor::new(shape);
        tensor.try_mutable_data::<E>(self)?;
        Ok(tensor)
    }
}
