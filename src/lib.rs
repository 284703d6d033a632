pub mod core;
mod feature;
mod linestring;
mod points;
mod polygons;
pub mod serialization;

pub use self::core::*;
pub use self::feature::Feature;
pub use self::linestring::*;
pub use self::points::*;
pub use self::polygons::*;
pub use self::serialization::{Geometry, parse_wkt};
