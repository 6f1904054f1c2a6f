//! Member shapes and union shapes.

pub use self::cuboid::{Cuboid, OrientedCuboid};
pub use self::member_shape::MemberShape;
pub use self::shape_union::{IgnoreFlags, ShapeUnion, UnionMember, UnionParams, UnionParamsError};
pub use self::sphere::Sphere;

mod cuboid;
mod member_shape;
mod shape_union;
mod sphere;
