use crate::{dtypes::DType, registry::KernelKey};

/// Represents a number of different errors that can occur from creating tensors,
/// running kernels, or building a kernel registry.
#[non_exhaustive]
#[derive(Debug)]
pub enum Error {
    /// The execution context carries no device to run on.
    MissingDevice,
    /// Device is out of memory
    OutOfMemory,
    /// Not enough elements were provided when creating a tensor
    WrongNumElements { expected: usize, found: usize },
    /// A tensor was read before any storage was allocated for it.
    NotAllocated,
    /// A tensor was read as a different dtype than it stores.
    DtypeMismatch { expected: DType, found: DType },
    /// A kernel received a parameter bundle it does not understand.
    ParamsMismatch {
        expected: &'static str,
        found: &'static str,
    },
    /// Two kernels were registered under the same key and alias.
    DuplicateKernel(KernelKey),
    /// No kernel is registered under the key.
    KernelNotFound(KernelKey),
    #[cfg(feature = "parallel")]
    ThreadPool(rayon::ThreadPoolBuildError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingDevice => f.write_str("execution context has no device"),
            Self::OutOfMemory => f.write_str("device is out of memory"),
            Self::WrongNumElements { expected, found } => {
                write!(f, "expected {expected} elements, found {found}")
            }
            Self::NotAllocated => f.write_str("tensor has no storage"),
            Self::DtypeMismatch { expected, found } => {
                write!(f, "expected a {expected} tensor, found {found}")
            }
            Self::ParamsMismatch { expected, found } => {
                write!(f, "expected {expected}, found {found}")
            }
            Self::DuplicateKernel(key) => write!(f, "kernel {key} is already registered"),
            Self::KernelNotFound(key) => write!(f, "no kernel registered for {key}"),
            #[cfg(feature = "parallel")]
            Self::ThreadPool(err) => write!(f, "failed to build thread pool: {err}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            #[cfg(feature = "parallel")]
            Self::ThreadPool(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(feature = "parallel")]
impl From<rayon::ThreadPoolBuildError> for Error {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        Self::ThreadPool(err)
    }
}
