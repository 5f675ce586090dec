//! The per call execution context handed to kernels.

use crate::tensor::{Cpu, Error};

/// Carries the device a kernel runs on.
///
/// The host owns the context and passes it by reference to every
/// [crate::tensor_ops::Kernel::run]. A context without a device is a host
/// programming error: [crate::tensor_ops::Kernel::run] panics on it and
/// [crate::tensor_ops::Kernel::try_run] returns [Error::MissingDevice].
///
/// ```rust
/// # use kernelite_core::prelude::*;
/// let ctx = Context::new();
/// assert!(ctx.cpu().is_none());
///
/// let ctx = Context::from(Cpu::default());
/// assert!(ctx.try_cpu().is_ok());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Context {
    cpu: Option<Cpu>,
}

impl Context {
    /// A context with no device attached.
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_cpu(mut self, cpu: Cpu) -> Self {
        self.cpu = Some(cpu);
        self
    }

    pub fn cpu(&self) -> Option<&Cpu> {
        self.cpu.as_ref()
    }

    pub fn try_cpu(&self) -> Result<&Cpu, Error> {
        self.cpu.as_ref().ok_or(Error::MissingDevice)
    }
}

impl From<Cpu> for Context {
    fn from(cpu: Cpu) -> Self {
        Self::new().with_cpu(cpu)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_device() {
        let ctx = Context::new();
        assert!(matches!(ctx.try_cpu(), Err(Error::MissingDevice)));
    }

    #[test]
    fn test_with_cpu() {
        let ctx = Context::new().with_cpu(Default::default());
        assert!(ctx.cpu().is_some());
    }
}
