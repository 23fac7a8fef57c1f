pub mod route_server;

pub use route_server::HttpRouteService;
