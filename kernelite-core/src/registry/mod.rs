//! Kernel descriptors and the registry a dispatcher looks kernels up in.
//!
//! Nothing registers itself. The host collects [KernelDescriptor]s (usually
//! [builtin_kernels], plus any of its own), builds a [KernelRegistry] once at
//! startup, and hands it to whatever dispatches operators.
//!
//! ```rust
//! # use kernelite_core::prelude::*;
//! let registry = KernelRegistry::try_from_descriptors(builtin_kernels()).unwrap();
//!
//! let found = registry.find("square", Target::Host, Precision::Float);
//! assert_eq!(found.len(), 1);
//! assert_eq!(found[0].input_names().collect::<Vec<_>>(), ["X"]);
//! assert_eq!(found[0].output_names().collect::<Vec<_>>(), ["Out"]);
//! ```

mod place;

pub use place::{Layout, Precision, Target, TensorTy};

use log::debug;
use std::{boxed::Box, collections::BTreeMap, vec::Vec};

use crate::{params::PortSpec, tensor::Error, tensor_ops::Kernel};

/// The alias kernels are registered under unless they pick another.
pub const DEFAULT_ALIAS: &str = "def";

/// What a dispatcher looks a kernel up by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KernelKey {
    pub op_type: &'static str,
    pub target: Target,
    pub precision: Precision,
    pub layout: Layout,
}

impl KernelKey {
    pub const fn new(
        op_type: &'static str,
        target: Target,
        precision: Precision,
        layout: Layout,
    ) -> Self {
        Self {
            op_type,
            target,
            precision,
            layout,
        }
    }
}

impl std::fmt::Display for KernelKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}",
            self.op_type, self.target, self.precision, self.layout
        )
    }
}

/// A named port and the class of tensor it accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortBinding {
    pub name: &'static str,
    pub ty: TensorTy,
}

pub type KernelFactory = fn() -> Box<dyn Kernel>;

fn create_default<K: Kernel + Default + 'static>() -> Box<dyn Kernel> {
    Box::new(K::default())
}

/// Everything the registry knows about one kernel.
#[derive(Debug, Clone)]
pub struct KernelDescriptor {
    key: KernelKey,
    alias: &'static str,
    inputs: Vec<PortBinding>,
    outputs: Vec<PortBinding>,
    factory: KernelFactory,
}

impl KernelDescriptor {
    /// Describes a kernel with no ports bound yet.
    pub fn new(key: KernelKey, factory: KernelFactory) -> Self {
        Self {
            key,
            alias: DEFAULT_ALIAS,
            inputs: Vec::new(),
            outputs: Vec::new(),
            factory,
        }
    }

    /// Describes `K`, taking the key from a default constructed instance.
    pub fn of<K: Kernel + Default + 'static>() -> Self {
        Self::new(K::default().key(), create_default::<K>)
    }

    pub fn with_alias(mut self, alias: &'static str) -> Self {
        self.alias = alias;
        self
    }

    pub fn bind_input(mut self, name: &'static str, ty: TensorTy) -> Self {
        self.inputs.push(PortBinding { name, ty });
        self
    }

    pub fn bind_output(mut self, name: &'static str, ty: TensorTy) -> Self {
        self.outputs.push(PortBinding { name, ty });
        self
    }

    /// Binds every port `P` declares, all accepting `ty`.
    pub fn bind_ports<P: PortSpec + ?Sized>(self, ty: TensorTy) -> Self {
        let this = P::INPUTS
            .iter()
            .fold(self, |this, &name| this.bind_input(name, ty));
        P::OUTPUTS
            .iter()
            .fold(this, |this, &name| this.bind_output(name, ty))
    }

    pub fn key(&self) -> &KernelKey {
        &self.key
    }

    pub fn alias(&self) -> &'static str {
        self.alias
    }

    pub fn inputs(&self) -> &[PortBinding] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[PortBinding] {
        &self.outputs
    }

    pub fn input_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.inputs.iter().map(|p| p.name)
    }

    pub fn output_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.outputs.iter().map(|p| p.name)
    }

    /// Instantiates the kernel.
    pub fn create(&self) -> Box<dyn Kernel> {
        (self.factory)()
    }
}

/// The kernels built into this crate, one per operator, dtype and layout.
pub fn builtin_kernels() -> Vec<KernelDescriptor> {
    crate::tensor_ops::square::square_kernels()
}

/// Maps [KernelKey]s to the kernels registered under them.
///
/// Several kernels can share a key as long as their aliases differ.
#[derive(Debug, Clone, Default)]
pub struct KernelRegistry {
    kernels: BTreeMap<KernelKey, Vec<KernelDescriptor>>,
}

impl KernelRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Default::default()
    }

    /// A registry holding [builtin_kernels].
    pub fn with_builtin() -> Self {
        Self::try_from_descriptors(builtin_kernels()).unwrap()
    }

    /// Builds a registry from `descriptors`, failing on the first duplicate.
    pub fn try_from_descriptors(
        descriptors: impl IntoIterator<Item = KernelDescriptor>,
    ) -> Result<Self, Error> {
        let mut registry = Self::new();
        for desc in descriptors {
            registry.try_register(desc)?;
        }
        debug!("built kernel registry with {} kernels", registry.len());
        Ok(registry)
    }

    /// Adds a kernel. Returns [Error::DuplicateKernel] if its key and alias
    /// are already taken.
    pub fn try_register(&mut self, desc: KernelDescriptor) -> Result<(), Error> {
        let entries = self.kernels.entry(desc.key).or_default();
        if entries.iter().any(|d| d.alias == desc.alias) {
            return Err(Error::DuplicateKernel(desc.key));
        }
        debug!("registered kernel {} ({})", desc.key, desc.alias);
        entries.push(desc);
        Ok(())
    }

    /// All kernels registered under exactly `key`, in registration order.
    pub fn get(&self, key: &KernelKey) -> &[KernelDescriptor] {
        self.kernels
            .get(key)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// All kernels for `op_type` on `target` at `precision`, in any layout.
    pub fn find(
        &self,
        op_type: &str,
        target: Target,
        precision: Precision,
    ) -> Vec<&KernelDescriptor> {
        self.iter()
            .filter(|d| {
                d.key.op_type == op_type && d.key.target == target && d.key.precision == precision
            })
            .collect()
    }

    /// Instantiates the first kernel registered under `key`.
    pub fn try_create(&self, key: &KernelKey) -> Result<Box<dyn Kernel>, Error> {
        self.get(key)
            .first()
            .map(KernelDescriptor::create)
            .ok_or(Error::KernelNotFound(*key))
    }

    pub fn iter(&self) -> impl Iterator<Item = &KernelDescriptor> + '_ {
        self.kernels.values().flatten()
    }

    /// The number of registered kernels, counting every alias.
    pub fn len(&self) -> usize {
        self.kernels.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        params::ActivationParams,
        tensor_ops::{SquareCompute, SquareGradCompute},
    };

    #[test]
    fn test_find_square_float() {
        let registry = KernelRegistry::with_builtin();
        let found = registry.find("square", Target::Host, Precision::Float);
        assert_eq!(found.len(), 1);
        let desc = found[0];
        assert_eq!(
            *desc.key(),
            KernelKey::new("square", Target::Host, Precision::Float, Layout::NCHW)
        );
        assert_eq!(desc.alias(), DEFAULT_ALIAS);
        assert_eq!(desc.input_names().collect::<Vec<_>>(), ["X"]);
        assert_eq!(desc.output_names().collect::<Vec<_>>(), ["Out"]);
        assert!(desc
            .inputs()
            .iter()
            .chain(desc.outputs())
            .all(|p| p.ty == TensorTy::host()));
    }

    #[test]
    fn test_find_square_grad_float() {
        let registry = KernelRegistry::with_builtin();
        let found = registry.find("square_grad", Target::Host, Precision::Float);
        assert_eq!(found.len(), 1);
        assert_eq!(
            found[0].input_names().collect::<Vec<_>>(),
            ["X", "Out", "Out@GRAD"]
        );
        assert_eq!(found[0].output_names().collect::<Vec<_>>(), ["X@GRAD"]);
    }

    #[test]
    fn test_find_nothing() {
        let registry = KernelRegistry::with_builtin();
        assert!(registry
            .find("square", Target::Cuda, Precision::Float)
            .is_empty());
        assert!(registry
            .find("relu", Target::Host, Precision::Float)
            .is_empty());
    }

    #[test]
    fn test_duplicate_kernel() {
        let r = KernelRegistry::try_from_descriptors([
            KernelDescriptor::of::<SquareCompute<f32>>(),
            KernelDescriptor::of::<SquareCompute<f32>>(),
        ]);
        assert!(matches!(r, Err(Error::DuplicateKernel(key)) if key.op_type == "square"));
    }

    #[test]
    fn test_aliases_share_a_key() {
        let registry = KernelRegistry::try_from_descriptors([
            KernelDescriptor::of::<SquareCompute<f32>>(),
            KernelDescriptor::of::<SquareCompute<f32>>().with_alias("fast"),
        ])
        .unwrap();
        assert_eq!(registry.len(), 2);
        let key = KernelKey::new("square", Target::Host, Precision::Float, Layout::NCHW);
        let aliases: Vec<_> = registry.get(&key).iter().map(|d| d.alias()).collect();
        assert_eq!(aliases, ["def", "fast"]);
    }

    #[test]
    fn test_try_create() {
        let registry = KernelRegistry::try_from_descriptors([
            KernelDescriptor::of::<SquareGradCompute<f64>>()
        ])
        .unwrap();
        let key = KernelKey::new("square_grad", Target::Host, Precision::Double, Layout::NCHW);
        let kernel = registry.try_create(&key).unwrap();
        assert_eq!(kernel.key(), key);

        let missing = KernelKey::new("square", Target::Host, Precision::Double, Layout::NCHW);
        assert!(matches!(
            registry.try_create(&missing),
            Err(Error::KernelNotFound(k)) if k == missing
        ));
    }

    #[test]
    fn test_bind_ports() {
        let desc = KernelDescriptor::of::<SquareCompute<f32>>()
            .bind_ports::<ActivationParams>(TensorTy::new(Target::X86));
        assert_eq!(
            desc.inputs(),
            [PortBinding {
                name: "X",
                ty: TensorTy::new(Target::X86)
            }]
        );
        assert_eq!(desc.outputs().len(), 1);
    }

    #[test]
    fn test_builtin_count() {
        let registry = KernelRegistry::with_builtin();
        #[cfg(not(feature = "f16"))]
        assert_eq!(registry.len(), 4);
        #[cfg(feature = "f16")]
        assert_eq!(registry.len(), 6);
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_key_display() {
        let key = KernelKey::new("square", Target::Host, Precision::Float, Layout::NCHW);
        assert_eq!(key.to_string(), "square/host/float/NCHW");
    }
}
