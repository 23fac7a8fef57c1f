mod dataset;
mod location;
mod road;
mod route;

pub use dataset::Dataset;
pub use location::{Amenity, Location, LocationId, Locations};
pub use road::Road;
pub use route::{OptimizeFor, Route, RouteRequest, RouteResponse};
