//! Configuration utility types.
//!
//! | Module    | Purpose                                         |
//! |-----------|-------------------------------------------------|
//! | `entries` | Ordered map that keeps repeated keys            |
//! | `error`   | Configuration error types and `Report`          |
//! | `field`   | Field paths for diagnostics                     |

mod entries;
mod error;
mod field;

pub use entries::Entries;
pub use error::{ConfigError, Report};
pub use field::FieldPath;
