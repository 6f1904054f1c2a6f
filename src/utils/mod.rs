//! Various unsorted geometrical and logical operators.

pub use self::center::center;
pub use self::cov::{center_cov, cov};
pub use self::obb::obb;

mod center;
mod cov;
mod obb;
