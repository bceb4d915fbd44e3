use super::{CudaMemcpy, LoadError};
use crate::MemcpyKind;
use libloading::Library;
use log::info;
use std::{
    collections::HashMap,
    ffi::c_void,
    path::{Path, PathBuf},
    sync::{Arc, OnceLock, RwLock},
};

/// 已加载的 CUDA 运行时。
pub struct Runtime {
    path: PathBuf,
    memcpy: CudaMemcpy,
    // 必须比 `memcpy` 活得更久
    _lib: Library,
}

impl Runtime {
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// # Safety
    ///
    /// 见 [`crate::Memcpy::memcpy`]。
    #[inline]
    pub(super) unsafe fn memcpy(
        &self,
        dst: *mut c_void,
        src: *const c_void,
        count: usize,
        kind: MemcpyKind,
    ) -> i32 {
        (self.memcpy)(dst, src, count, kind.as_raw())
    }
}

pub(super) fn load(path: &Path) -> Result<Arc<Runtime>, LoadError> {
    static CACHE: OnceLock<RwLock<HashMap<PathBuf, Arc<Runtime>>>> = OnceLock::new();
    let cache = CACHE.get_or_init(Default::default);

    if let Some(rt) = cache.read().unwrap().get(path) {
        return Ok(rt.clone());
    }

    let err = |source| LoadError {
        path: path.to_path_buf(),
        source,
    };
    let lib = unsafe { Library::new(path) }.map_err(err)?;
    let memcpy = *unsafe { lib.get::<CudaMemcpy>(b"cudaMemcpy\0") }.map_err(err)?;
    info!("CUDA runtime loaded from {}", path.display());

    let rt = Arc::new(Runtime {
        path: path.to_path_buf(),
        memcpy,
        _lib: lib,
    });
    Ok(cache
        .write()
        .unwrap()
        .entry(path.to_path_buf())
        .or_insert(rt)
        .clone())
}
