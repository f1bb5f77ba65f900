//! Queries over whole geometries: centers, representative points, signed distances and routes.

mod center;
mod center_of_mass;
mod distance;
mod navigation;
mod point_on_surface;
mod route;

pub use center::center;
pub use center_of_mass::center_of_mass;
pub use distance::polygon_point_distance;
pub use point_on_surface::point_on_surface;
pub use route::{great_circle_route, great_circle_route_by_distance, MAX_ROUTE_POINTS};
