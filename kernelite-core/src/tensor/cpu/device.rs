#[cfg(feature = "parallel")]
use std::sync::Arc;

/// A device that stores tensors on the heap and runs kernels on the host.
///
/// Without the `parallel` feature, elementwise loops run on the calling thread.
/// With it, they are split with rayon, on the device's own thread pool if one
/// was configured with [Cpu::with_threads], otherwise on rayon's global pool.
#[derive(Clone, Debug, Default)]
pub struct Cpu {
    #[cfg(feature = "parallel")]
    pub(crate) pool: Option<Arc<rayon::ThreadPool>>,
}

impl Cpu {
    /// Creates a device that runs kernels on a dedicated pool of `num_threads` threads.
    #[cfg(feature = "parallel")]
    pub fn with_threads(num_threads: usize) -> Result<Self, crate::tensor::Error> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .thread_name(|i| std::format!("kernelite-cpu-{i}"))
            .build()?;
        log::debug!("built cpu thread pool with {num_threads} threads");
        Ok(Self {
            pool: Some(Arc::new(pool)),
        })
    }

    /// How many threads an elementwise loop may be split across.
    pub fn num_threads(&self) -> usize {
        #[cfg(feature = "parallel")]
        {
            self.pool
                .as_ref()
                .map_or_else(rayon::current_num_threads, |pool| pool.current_num_threads())
        }

        #[cfg(not(feature = "parallel"))]
        {
            1
        }
    }

    /// Runs `f` in this device's execution context.
    pub(crate) fn install<R: Send, F: FnOnce() -> R + Send>(&self, f: F) -> R {
        #[cfg(feature = "parallel")]
        if let Some(pool) = self.pool.as_ref() {
            return pool.install(f);
        }
        f()
    }
}
