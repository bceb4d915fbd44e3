//! 通过 CUDA 运行时库完成拷贝的原语。

mod library;

use crate::{Memcpy, MemcpyKind};
use std::{
    env::var_os,
    error::Error,
    ffi::{c_int, c_void},
    fmt,
    path::{Path, PathBuf},
    sync::Arc,
};

pub use library::Runtime;

/// `cudaMemcpy` 的函数签名。
type CudaMemcpy = unsafe extern "C" fn(*mut c_void, *const c_void, usize, c_int) -> c_int;

#[derive(Clone, Debug)]
pub struct Config {
    /// CUDA 运行时动态库的路径。
    pub library: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        let library = if let Some(path) = var_os("CUDA_RUNTIME_LIBRARY") {
            PathBuf::from(path)
        } else if let Some(root) = var_os("CUDA_ROOT") {
            let root = PathBuf::from(root);
            if cfg!(windows) {
                root.join("bin").join(DEFAULT_NAME)
            } else {
                root.join("lib64").join(DEFAULT_NAME)
            }
        } else {
            PathBuf::from(DEFAULT_NAME)
        };
        Self { library }
    }
}

const DEFAULT_NAME: &str = if cfg!(windows) {
    "cudart64_12.dll"
} else {
    "libcudart.so"
};

/// 加载 CUDA 运行时失败。
#[derive(Debug)]
pub struct LoadError {
    pub path: PathBuf,
    pub source: libloading::Error,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "failed to load CUDA runtime from {}: {}",
            self.path.display(),
            self.source
        )
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

#[derive(Clone)]
pub struct Gpu(Arc<Runtime>);

impl Gpu {
    /// 加载运行时库。同一路径的库在进程内只加载一次。
    #[inline]
    pub fn load(config: Config) -> Result<Self, LoadError> {
        library::load(&config.library).map(Self)
    }

    #[inline]
    pub fn path(&self) -> &Path {
        self.0.path()
    }

    #[cfg(test)]
    pub(crate) fn init() -> Option<Self> {
        Self::load(Config::default()).ok()
    }
}

impl fmt::Debug for Gpu {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Gpu").field(&self.path()).finish()
    }
}

impl Memcpy for Gpu {
    #[inline]
    unsafe fn memcpy(
        &self,
        dst: *mut c_void,
        src: *const c_void,
        count: usize,
        kind: MemcpyKind,
    ) -> i32 {
        self.0.memcpy(dst, src, count, kind)
    }
}
