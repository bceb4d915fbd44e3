//! 以主存模拟加速器存储的拷贝原语。

use crate::{Memcpy, MemcpyKind};
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use std::{ffi::c_void, ptr::copy_nonoverlapping};

/// 与 `cudaErrorInvalidValue` 相同的错误码。
pub const INVALID_VALUE: i32 = 1;

#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// 超过这个字节数的拷贝将被切分到多个线程上。
    pub parallel_threshold: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            parallel_threshold: 1 << 20,
        }
    }
}

/// 加速器存储也是主存的“加速器”。
#[derive(Clone, Copy, Default, Debug)]
pub struct Cpu {
    config: Config,
}

impl Cpu {
    #[inline]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    #[inline]
    pub const fn config(&self) -> &Config {
        &self.config
    }
}

impl Memcpy for Cpu {
    unsafe fn memcpy(
        &self,
        dst: *mut c_void,
        src: *const c_void,
        count: usize,
        _kind: MemcpyKind,
    ) -> i32 {
        if count == 0 {
            return 0;
        }
        if dst.is_null() || src.is_null() {
            return INVALID_VALUE;
        }

        let chunk = self.config.parallel_threshold.max(1);
        if count <= chunk {
            copy_nonoverlapping(src.cast::<u8>(), dst.cast::<u8>(), count);
        } else {
            let dst = dst as usize;
            let src = src as usize;
            (0..count.div_ceil(chunk)).into_par_iter().for_each(|i| {
                let offset = i * chunk;
                let len = chunk.min(count - offset);
                unsafe {
                    copy_nonoverlapping::<u8>((src + offset) as _, (dst + offset) as _, len)
                };
            });
        }
        0
    }
}
