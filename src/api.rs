use async_trait::async_trait;

use crate::entities::{Dataset, RouteRequest, RouteResponse};
use crate::error::Error;

/// The route server. A server-side rejection comes back as
/// `Ok(RouteResponse::Rejected { .. })`; `Err` is reserved for requests that
/// never produced a usable reply.
#[async_trait]
pub trait RouteService {
    async fn fetch_dataset(&self) -> Result<Dataset, Error>;
    async fn request_route(&self, request: &RouteRequest) -> Result<RouteResponse, Error>;
}
