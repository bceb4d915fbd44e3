use std::{error::Error, fmt};

/// 错误码所属的错误域。
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Category {
    /// 加速器运行时，错误码即 `cudaError_t`。
    AcceleratorRuntime,
}

impl Category {
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::AcceleratorRuntime => "accelerator runtime",
        }
    }

    pub const fn message(self, code: i32) -> &'static str {
        match self {
            Self::AcceleratorRuntime => match code {
                0 => "no error",
                1 => "invalid argument",
                2 => "out of memory",
                3 => "initialization error",
                4 => "driver shutting down",
                17 => "invalid device pointer",
                21 => "invalid copy direction for memcpy",
                35 => "CUDA driver version is insufficient for CUDA runtime version",
                46 => "all CUDA-capable devices are busy or unavailable",
                100 => "no CUDA-capable device is detected",
                101 => "invalid device ordinal",
                201 => "invalid device context",
                400 => "invalid resource handle",
                600 => "device not ready",
                700 => "an illegal memory access was encountered",
                999 => "unknown error",
                _ => "unrecognized error code",
            },
        }
    }
}

impl fmt::Display for Category {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 拷贝失败，携带原语返回的原生错误码。
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct TransferError {
    pub category: Category,
    pub code: i32,
}

impl TransferError {
    #[inline]
    pub const fn new(category: Category, code: i32) -> Self {
        Self { category, code }
    }

    #[inline]
    pub const fn message(&self) -> &'static str {
        self.category.message(self.code)
    }
}

impl fmt::Display for TransferError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} error {}: {}",
            self.category,
            self.code,
            self.message()
        )
    }
}

impl Error for TransferError {}

pub(super) mod functions {
    use super::{Category::*, TransferError};

    #[inline]
    pub fn accelerator_runtime(code: i32) -> TransferError {
        TransferError::new(AcceleratorRuntime, code)
    }
}

#[test]
fn test_display() {
    let e = functions::accelerator_runtime(700);
    assert_eq!(e.category, Category::AcceleratorRuntime);
    assert_eq!(
        e.to_string(),
        "accelerator runtime error 700: an illegal memory access was encountered"
    );
    assert_eq!(
        functions::accelerator_runtime(12345).message(),
        "unrecognized error code"
    );
}
