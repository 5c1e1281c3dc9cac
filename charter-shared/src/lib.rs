pub mod envelope;
pub mod pii;

pub use envelope::{ApiResponse, Pagination};
pub use pii::Masked;
