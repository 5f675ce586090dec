/// The device family a kernel runs on, or a tensor lives on.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Target {
    /// Plain host memory and the host CPU.
    Host,
    /// Host CPU kernels that use x86 specific code paths.
    X86,
    Cuda,
}

/// The numeric precision a kernel computes in.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Precision {
    /// 32 bit float
    Float,
    /// 64 bit float
    Double,
    /// 16 bit float
    Half,
}

/// The memory layout a kernel expects for 4d activations.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(clippy::upper_case_acronyms)]
pub enum Layout {
    NCHW,
}

/// The class of tensor a port accepts: where its storage lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TensorTy {
    pub target: Target,
}

impl TensorTy {
    pub const fn new(target: Target) -> Self {
        Self { target }
    }

    /// A tensor in host memory.
    pub const fn host() -> Self {
        Self::new(Target::Host)
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Host => "host",
            Self::X86 => "x86",
            Self::Cuda => "cuda",
        })
    }
}

impl std::fmt::Display for Precision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Float => "float",
            Self::Double => "double",
            Self::Half => "half",
        })
    }
}

impl std::fmt::Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::NCHW => "NCHW",
        })
    }
}

impl std::fmt::Display for TensorTy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tensor<{}>", self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Target::Host.to_string(), "host");
        assert_eq!(Target::X86.to_string(), "x86");
        assert_eq!(Target::Cuda.to_string(), "cuda");
        assert_eq!(Precision::Float.to_string(), "float");
        assert_eq!(Precision::Double.to_string(), "double");
        assert_eq!(Precision::Half.to_string(), "half");
        assert_eq!(Layout::NCHW.to_string(), "NCHW");
        assert_eq!(TensorTy::host().to_string(), "Tensor<host>");
    }
}
