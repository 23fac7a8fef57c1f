mod graph;
mod route;

pub use graph::{GraphRenderer, MarkerTable};
pub use route::{CurrentRoute, RouteDisplay};
