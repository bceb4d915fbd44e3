mod error;

pub use error::{functions::*, Category, TransferError};
