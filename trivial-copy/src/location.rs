use crate::{Device, Host, MemSpace};
use std::{fmt, marker::PhantomData, ptr::null_mut};

/// 位置句柄。
///
/// 指向某个存储空间中的一个元素，可能是裸地址，也可能是包装了裸地址的类型。
/// 解析只展开一层：裸地址原样返回，包装类型返回被包装的地址。
pub trait Location {
    /// 位置所在的存储空间。
    type Space: MemSpace;
    /// 位置上的元素类型，只有可以逐字节拷贝的类型能参与平凡拷贝。
    type Elem: Copy;

    fn get(&self) -> *const Self::Elem;
}

/// 可写的位置句柄。
pub trait LocationMut: Location {
    fn get_mut(&mut self) -> *mut Self::Elem;
}

impl<T: Copy> Location for *const T {
    type Space = Host;
    type Elem = T;
    #[inline]
    fn get(&self) -> *const T {
        *self
    }
}

impl<T: Copy> Location for *mut T {
    type Space = Host;
    type Elem = T;
    #[inline]
    fn get(&self) -> *const T {
        self.cast_const()
    }
}

impl<T: Copy> LocationMut for *mut T {
    #[inline]
    fn get_mut(&mut self) -> *mut T {
        *self
    }
}

impl<T: Copy> Location for &[T] {
    type Space = Host;
    type Elem = T;
    #[inline]
    fn get(&self) -> *const T {
        self.as_ptr()
    }
}

impl<T: Copy> Location for &mut [T] {
    type Space = Host;
    type Elem = T;
    #[inline]
    fn get(&self) -> *const T {
        self.as_ptr()
    }
}

impl<T: Copy> LocationMut for &mut [T] {
    #[inline]
    fn get_mut(&mut self) -> *mut T {
        self.as_mut_ptr()
    }
}

/// 标记了存储空间的指针。
#[repr(transparent)]
pub struct SpacePtr<S, T>(*mut T, PhantomData<S>);

pub type HostPtr<T> = SpacePtr<Host, T>;
pub type DevPtr<T> = SpacePtr<Device, T>;

impl<S, T> SpacePtr<S, T> {
    #[inline]
    pub const fn new(ptr: *mut T) -> Self {
        Self(ptr, PhantomData)
    }

    #[inline]
    pub const fn null() -> Self {
        Self::new(null_mut())
    }

    #[inline]
    pub const fn get(self) -> *mut T {
        self.0
    }

    #[inline]
    pub fn is_null(self) -> bool {
        self.0.is_null()
    }

    #[inline]
    pub const fn cast<U>(self) -> SpacePtr<S, U> {
        SpacePtr::new(self.0.cast())
    }

    /// 向后偏移 `count` 个元素。
    ///
    /// # Safety
    ///
    /// 与 [`pointer::add`] 相同，偏移后的地址必须仍在同一块分配内。
    #[inline]
    pub const unsafe fn add(self, count: usize) -> Self {
        Self::new(self.0.add(count))
    }
}

impl<S, T> Clone for SpacePtr<S, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, T> Copy for SpacePtr<S, T> {}

impl<S, T> PartialEq for SpacePtr<S, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<S, T> Eq for SpacePtr<S, T> {}

impl<S: MemSpace, T> fmt::Debug for SpacePtr<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{:p}", S::NAME, self.0)
    }
}

impl<T> From<&mut [T]> for HostPtr<T> {
    #[inline]
    fn from(value: &mut [T]) -> Self {
        Self::new(value.as_mut_ptr())
    }
}

impl<S: MemSpace, T: Copy> Location for SpacePtr<S, T> {
    type Space = S;
    type Elem = T;
    #[inline]
    fn get(&self) -> *const T {
        self.0.cast_const()
    }
}

impl<S: MemSpace, T: Copy> LocationMut for SpacePtr<S, T> {
    #[inline]
    fn get_mut(&mut self) -> *mut T {
        self.0
    }
}
