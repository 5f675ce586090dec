use log::debug;
use std::vec::Vec;

use super::{unique_id, Buffer, Cpu, Error, UniqueId};
use crate::{
    dtypes::{DType, Dtype},
    shapes::Shape,
};

/// A dense n-dimensional array.
///
/// The storage is optional: the host creates output tensors with only a shape,
/// and the kernel writing them allocates the storage with the element type it
/// produces. See [Tensor::try_mutable_data].
#[derive(Debug, Clone)]
pub struct Tensor {
    pub(crate) id: UniqueId,
    pub(crate) shape: Shape,
    pub(crate) buffer: Option<Buffer>,
}

impl Tensor {
    /// Creates a tensor with a shape and no storage.
    pub fn new(shape: impl Into<Shape>) -> Self {
        Self {
            id: unique_id(),
            shape: shape.into(),
            buffer: None,
        }
    }

    pub fn id(&self) -> &UniqueId {
        &self.id
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn num_elements(&self) -> usize {
        self.shape.num_elements()
    }

    /// The element type of the storage, or `None` if nothing is allocated yet.
    pub fn dtype(&self) -> Option<DType> {
        self.buffer.as_ref().map(Buffer::dtype)
    }

    pub fn try_dtype(&self) -> Result<DType, Error> {
        self.dtype().ok_or(Error::NotAllocated)
    }

    pub fn is_allocated(&self) -> bool {
        self.buffer.is_some()
    }

    pub fn buffer(&self) -> Option<&Buffer> {
        self.buffer.as_ref()
    }

    /// Drops the storage, keeping the shape.
    pub fn reset(&mut self) {
        self.buffer = None;
    }

    /// Borrows the storage as `&[E]`.
    pub fn try_data<E: Dtype>(&self) -> Result<&[E], Error> {
        let buf = self.buffer.as_ref().ok_or(Error::NotAllocated)?;
        E::buffer_ref(buf).ok_or(Error::DtypeMismatch {
            expected: E::DTYPE,
            found: buf.dtype(),
        })
    }

    /// Borrows the storage as `&mut [E]`, allocating it on `dev` first if it is
    /// missing, holds another dtype, or does not match the shape's element count.
    ///
    /// Storage that already matches is reused as is, without being zeroed.
    pub fn try_mutable_data<E: Dtype>(&mut self, dev: &Cpu) -> Result<&mut [E], Error> {
        let numel = self.shape.num_elements();
        let reusable = self
            .buffer
            .as_ref()
            .and_then(E::buffer_ref)
            .map_or(false, |data| data.len() == numel);
        if !reusable {
            debug!(
                "allocating {numel} x {} for tensor {} (had {:?})",
                E::DTYPE,
                self.id,
                self.dtype()
            );
            self.buffer = Some(E::into_buffer(dev.try_alloc_zeros::<E>(numel)?));
        }
        self.buffer
            .as_mut()
            .and_then(E::buffer_mut)
            .ok_or(Error::NotAllocated)
    }

    /// Copies the storage out as a [Vec] - **panics** if the tensor is not
    /// allocated or holds another dtype.
    pub fn as_vec<E: Dtype>(&self) -> Vec<E> {
        self.try_as_vec().unwrap()
    }

    pub fn try_as_vec<E: Dtype>(&self) -> Result<Vec<E>, Error> {
        self.try_data().map(<[E]>::to_vec)
    }
}
