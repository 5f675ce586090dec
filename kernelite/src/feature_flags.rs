//! Information about the available feature flags
//!
//! # "std"
//!
//! **Enabled by default**
//!
//! Implements [std::error::Error] for [crate::tensor::Error] and enables the
//! `std` feature of `num-traits`.
//!
//! # "parallel"
//!
//! Splits elementwise kernels across threads with [rayon](https://docs.rs/rayon).
//! Also enables `Cpu::with_threads`, which gives a device its own thread pool
//! instead of rayon's global one.
//!
//! Example:
//! ```toml
//! kernelite = { version = "...", features = ["parallel"] }
//! ```
//!
//! # "f16"
//!
//! Adds `f16` (from [half](https://docs.rs/half)) as a dtype, and registers
//! `Precision::Half` variants of every builtin kernel.
//!
//! Example:
//! ```toml
//! kernelite = { version = "...", features = ["f16"] }
//! ```

#[cfg(not(feature = "parallel"))]
/// How elementwise kernels are executed. Configure with crate features.
pub const EXECUTION: &str = "serial";

#[cfg(feature = "parallel")]
/// How elementwise kernels are executed. Configure with crate features.
pub const EXECUTION: &str = "rayon";
