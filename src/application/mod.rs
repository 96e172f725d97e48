//! Application layer: services and use cases
//!
//! This layer orchestrates domain logic and depends on I/O boundary traits.

pub mod columns;
pub mod error;
pub mod error_ext;
pub mod services;

pub use columns::{parse_columns, RawColumn, RawColumnFile};
pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
