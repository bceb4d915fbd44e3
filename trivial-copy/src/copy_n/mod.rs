//! dst[0..n] = src[0..n]，方向由存储空间推断。

use crate::{
    accelerator_runtime, DirectionOf, ElemOf, Location, LocationMut, Memcpy, MemcpyKind, SpaceOf,
    Supported, TransferError,
};
use log::{trace, warn};
use std::ffi::c_void;

/// 调用拷贝原语并检查状态码，非 0 的状态码原样放入 [`TransferError`]。
///
/// # Safety
///
/// 见 [`Memcpy::memcpy`]。
pub unsafe fn checked_memcpy<M>(
    memcpy: &M,
    dst: *mut c_void,
    src: *const c_void,
    count: usize,
    kind: MemcpyKind,
) -> Result<(), TransferError>
where
    M: Memcpy + ?Sized,
{
    trace!("memcpy {kind} {count} bytes: {src:p} -> {dst:p}");
    match memcpy.memcpy(dst, src, count, kind) {
        0 => Ok(()),
        code => {
            let e = accelerator_runtime(code);
            warn!("memcpy {kind} {count} bytes failed: {e}");
            Err(e)
        }
    }
}

/// 从 `first` 开始拷贝 `n` 个元素到 `result`。
///
/// 拷贝方向由 `first` 和 `result` 的存储空间在编译期决定，不受支持的组合无法通过编译：
///
/// ```compile_fail
/// use std::ffi::c_void;
/// use trivial_copy::{trivial_copy_n, Memcpy, MemcpyKind};
///
/// struct Nop;
///
/// impl Memcpy for Nop {
///     unsafe fn memcpy(&self, _: *mut c_void, _: *const c_void, _: usize, _: MemcpyKind) -> i32 {
///         0
///     }
/// }
///
/// let src = [0u32; 4];
/// let mut dst = [0u32; 4];
/// // 主存之间的拷贝不走这里
/// let _ = unsafe { trivial_copy_n(&Nop, &src[..], 4, &mut dst[..]) };
/// ```
///
/// 即使 `n` 为 0 也会调用原语。失败时目的区域的内容是不确定的。
///
/// # Safety
///
/// `first` 和 `result` 必须分别指向各自存储空间中至少 `n` 个有效元素，且两个区域互不重叠。
pub unsafe fn trivial_copy_n<M, Src, Dst>(
    memcpy: &M,
    first: Src,
    n: usize,
    mut result: Dst,
) -> Result<(), TransferError>
where
    M: Memcpy + ?Sized,
    Src: Location,
    Dst: LocationMut<Elem = ElemOf<Src>>,
    DirectionOf<SpaceOf<Src>, SpaceOf<Dst>>: Supported,
{
    let dst = result.get_mut().cast::<c_void>();
    let src = first.get().cast::<c_void>();
    checked_memcpy(
        memcpy,
        dst,
        src,
        n * size_of::<ElemOf<Src>>(),
        <DirectionOf<SpaceOf<Src>, SpaceOf<Dst>> as Supported>::KIND,
    )
}

#[cfg(test)]
mod test;
