#[cfg(any(use_cpu, test))]
pub mod common_cpu;

#[cfg(use_cuda)]
pub mod nvidia_gpu;
