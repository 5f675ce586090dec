use crate::dtypes::DType;
use std::vec::Vec;

#[cfg(feature = "f16")]
use crate::dtypes::f16;

/// Contiguous storage behind a [super::Tensor], one variant per supported dtype.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub enum Buffer {
    F32(Vec<f32>),
    F64(Vec<f64>),
    #[cfg(feature = "f16")]
    F16(Vec<f16>),
}

impl Buffer {
    pub fn dtype(&self) -> DType {
        match self {
            Self::F32(_) => DType::F32,
            Self::F64(_) => DType::F64,
            #[cfg(feature = "f16")]
            Self::F16(_) => DType::F16,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::F32(data) => data.len(),
            Self::F64(data) => data.len(),
            #[cfg(feature = "f16")]
            Self::F16(data) => data.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
