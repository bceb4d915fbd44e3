//! 在两个存储空间之间执行平凡拷贝。
//!
//! 调用者只提供源位置、元素数量和目的位置，拷贝方向由两个位置的存储空间标记在编译期推断。
//!
//! ```
//! use std::ffi::c_void;
//! use trivial_copy::{trivial_copy_n, DevPtr, Memcpy, MemcpyKind};
//!
//! struct Nop;
//!
//! impl Memcpy for Nop {
//!     unsafe fn memcpy(&self, _: *mut c_void, _: *const c_void, _: usize, kind: MemcpyKind) -> i32 {
//!         assert_eq!(kind, MemcpyKind::HostToDevice);
//!         0
//!     }
//! }
//!
//! let host = [1u32, 2, 3];
//! let mut mirror = [0u32; 3];
//! let dev = DevPtr::new(mirror.as_mut_ptr());
//! unsafe { trivial_copy_n(&Nop, &host[..], host.len(), dev) }.unwrap();
//! ```

mod common;
mod copy_n;
mod handle;
mod location;
mod space;

pub use common::*;
pub use copy_n::{checked_memcpy, trivial_copy_n};
pub use location::{DevPtr, HostPtr, Location, LocationMut, SpacePtr};
pub use space::{
    memcpy_kind, Device, DeviceClass, Direction, Host, HostClass, MemSpace, MemcpyKind,
    SpaceClass, Supported, TagClass,
};

#[cfg(any(use_cpu, test))]
pub use handle::common_cpu;

#[cfg(use_cuda)]
pub use handle::nvidia_gpu;

use std::ffi::c_void;

/// 批量拷贝原语。
///
/// 约定拷贝如何真正发生。
/// 这个特质应该由能够访问加速器运行时的类型实现，通常是**运行时库的句柄**。
/// 原语可能被多个线程同时使用，因此必须是 [`Sync`] 的：
///
/// ```compile_fail
/// use std::{cell::Cell, ffi::c_void};
/// use trivial_copy::{Memcpy, MemcpyKind};
///
/// struct Counter(Cell<usize>);
///
/// impl Memcpy for Counter {
///     unsafe fn memcpy(&self, _: *mut c_void, _: *const c_void, _: usize, _: MemcpyKind) -> i32 {
///         self.0.set(self.0.get() + 1);
///         0
///     }
/// }
/// ```
pub trait Memcpy: Sync {
    /// 从 `src` 拷贝 `count` 字节到 `dst`，`kind` 指示两者所在的存储空间。
    ///
    /// 返回运行时的原生状态码，0 表示成功。
    ///
    /// # Safety
    ///
    /// `dst` 和 `src` 必须分别是 `kind` 指示的存储空间中至少 `count` 字节的有效区域，且互不重叠。
    unsafe fn memcpy(
        &self,
        dst: *mut c_void,
        src: *const c_void,
        count: usize,
        kind: MemcpyKind,
    ) -> i32;
}

pub type SpaceOf<L> = <L as Location>::Space;
pub type ElemOf<L> = <L as Location>::Elem;
pub type ClassOf<S> = <S as MemSpace>::Class;
/// 两个存储空间标记之间的拷贝方向。
pub type DirectionOf<Src, Dst> = Direction<ClassOf<Src>, ClassOf<Dst>>;
