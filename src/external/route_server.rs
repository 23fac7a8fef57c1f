use async_trait::async_trait;

use crate::{
    api::RouteService,
    config::Config,
    entities::{Dataset, RouteRequest, RouteResponse},
    error::{upstream_error, Error},
};

pub const LOCATIONS_PATH: &str = "/api/locations";
pub const ROUTE_PATH: &str = "/api/route";

#[derive(Clone, Debug)]
pub struct HttpRouteService {
    client: reqwest::Client,
    api_base: String,
}

impl HttpRouteService {
    pub fn new(config: &Config) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client,
            api_base: config.api_base.trim_end_matches('/').into(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}

#[async_trait]
impl RouteService for HttpRouteService {
    #[tracing::instrument(skip(self))]
    async fn fetch_dataset(&self) -> Result<Dataset, Error> {
        let res = self.client.get(self.url(LOCATIONS_PATH)).send().await?;

        let status_code = res.status().as_u16();

        if !res.status().is_success() {
            return Err(upstream_error(status_code));
        }

        let body = res.bytes().await?;
        let dataset: Dataset = serde_json::from_slice(&body)?;

        tracing::info!(
            locations = dataset.locations.len(),
            roads = dataset.roads.len(),
            "fetched dataset"
        );

        Ok(dataset)
    }

    // The server reports "no route" with an error body, sometimes alongside a
    // 4xx status, so the body is decoded whatever the status.
    #[tracing::instrument(skip(self))]
    async fn request_route(&self, request: &RouteRequest) -> Result<RouteResponse, Error> {
        let res = self
            .client
            .post(self.url(ROUTE_PATH))
            .json(request)
            .send()
            .await?;

        let status_code = res.status().as_u16();
        let body = res.bytes().await?;

        let response: RouteResponse = serde_json::from_slice(&body).map_err(|err| {
            tracing::warn!(status_code, "undecodable route response: {}", err);
            Error::from(err)
        })?;

        if let RouteResponse::Rejected { error } = &response {
            tracing::info!(status_code, error = %error, "route rejected by server");
        }

        Ok(response)
    }
}
