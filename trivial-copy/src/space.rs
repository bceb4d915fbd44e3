use crate::DirectionOf;
use std::{fmt, marker::PhantomData};

/// 存储空间标记。
///
/// 标记类型不携带运行时状态，只用于在编译期选择拷贝方向。
/// 新的存储空间通过声明自己所属的 [类别](MemSpace::Class) 接入拷贝方向的推断。
pub trait MemSpace: 'static {
    /// 存储空间所属的类别。
    type Class: TagClass;
    /// 用于诊断信息的名字。
    const NAME: &'static str;
    /// 类别的运行时镜像。
    const CLASS: SpaceClass = <Self::Class as TagClass>::VALUE;
}

/// 存储空间类别的类型级表示。
pub trait TagClass: 'static {
    const VALUE: SpaceClass;
}

/// 主存类别。
pub enum HostClass {}
/// 加速器存储类别。
pub enum DeviceClass {}

impl TagClass for HostClass {
    const VALUE: SpaceClass = SpaceClass::Host;
}

impl TagClass for DeviceClass {
    const VALUE: SpaceClass = SpaceClass::Device;
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum SpaceClass {
    Host,
    Device,
}

/// 主存。
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub struct Host;

/// 加速器存储。
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub struct Device;

impl MemSpace for Host {
    type Class = HostClass;
    const NAME: &'static str = "host";
}

impl MemSpace for Device {
    type Class = DeviceClass;
    const NAME: &'static str = "device";
}

/// 拷贝方向。
///
/// 主存到主存的拷贝不在其中，这类拷贝应直接使用 [`std::ptr::copy_nonoverlapping`]。
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum MemcpyKind {
    HostToDevice,
    DeviceToHost,
    DeviceToDevice,
}

impl MemcpyKind {
    /// 按类别查询拷贝方向，不支持的组合返回 [`None`]。
    pub const fn classify(src: SpaceClass, dst: SpaceClass) -> Option<Self> {
        use SpaceClass::{Device, Host};
        match (src, dst) {
            (Host, Device) => Some(Self::HostToDevice),
            (Device, Host) => Some(Self::DeviceToHost),
            (Device, Device) => Some(Self::DeviceToDevice),
            _ => None,
        }
    }

    /// 运行时 `cudaMemcpyKind` 的原生取值。
    #[inline]
    pub const fn as_raw(self) -> i32 {
        match self {
            Self::HostToDevice => 1,
            Self::DeviceToHost => 2,
            Self::DeviceToDevice => 3,
        }
    }

    #[inline]
    pub const fn src_class(self) -> SpaceClass {
        match self {
            Self::HostToDevice => SpaceClass::Host,
            Self::DeviceToHost | Self::DeviceToDevice => SpaceClass::Device,
        }
    }

    #[inline]
    pub const fn dst_class(self) -> SpaceClass {
        match self {
            Self::DeviceToHost => SpaceClass::Host,
            Self::HostToDevice | Self::DeviceToDevice => SpaceClass::Device,
        }
    }
}

impl fmt::Display for MemcpyKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Self::HostToDevice => "host->device",
            Self::DeviceToHost => "device->host",
            Self::DeviceToDevice => "device->device",
        };
        f.write_str(s)
    }
}

/// 类型级的拷贝方向，由源类别和目的类别组成。
///
/// 只有受支持的组合实现了 [`Supported`]，其他组合在编译期被拒绝。
pub struct Direction<Src, Dst>(PhantomData<(Src, Dst)>);

/// 受支持的拷贝方向。
pub trait Supported {
    const KIND: MemcpyKind;
}

impl Supported for Direction<HostClass, DeviceClass> {
    const KIND: MemcpyKind = MemcpyKind::HostToDevice;
}

impl Supported for Direction<DeviceClass, HostClass> {
    const KIND: MemcpyKind = MemcpyKind::DeviceToHost;
}

impl Supported for Direction<DeviceClass, DeviceClass> {
    const KIND: MemcpyKind = MemcpyKind::DeviceToDevice;
}

/// 在编译期求两个存储空间之间的拷贝方向。
///
/// ```compile_fail
/// use trivial_copy::{memcpy_kind, Host};
///
/// let _ = memcpy_kind::<Host, Host>();
/// ```
#[inline]
pub const fn memcpy_kind<Src, Dst>() -> MemcpyKind
where
    Src: MemSpace,
    Dst: MemSpace,
    DirectionOf<Src, Dst>: Supported,
{
    <DirectionOf<Src, Dst> as Supported>::KIND
}
