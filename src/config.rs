use geo_types::Coord;
use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{config_error, Error};

pub const DEFAULT_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const DEFAULT_ATTRIBUTION: &str = "© OpenStreetMap contributors";

/// Runtime settings for the map client. Every value can be overridden through
/// `WAYMARK_*` environment variables, including ones loaded from a `.env` file.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub api_base: String,
    pub center: Coord<f64>,
    pub zoom: u8,
    pub fit_padding: u32,
    pub tile_url: String,
    pub attribution: String,
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: "http://127.0.0.1:5000".into(),
            center: Coord {
                x: -74.0060,
                y: 40.7128,
            },
            zoom: 12,
            fit_padding: 50,
            tile_url: DEFAULT_TILE_URL.into(),
            attribution: DEFAULT_ATTRIBUTION.into(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl Config {
    #[tracing::instrument(name = "Config::from_env")]
    pub fn from_env() -> Result<Self, Error> {
        if let Err(err) = dotenv::dotenv() {
            tracing::debug!("no .env file loaded: {}", err);
        }

        let mut config = Self::default();

        if let Some(api_base) = var::<String>("WAYMARK_API_BASE")? {
            config.api_base = api_base;
        }
        if let Some(lat) = var::<f64>("WAYMARK_MAP_LAT")? {
            config.center.y = lat;
        }
        if let Some(lon) = var::<f64>("WAYMARK_MAP_LON")? {
            config.center.x = lon;
        }
        if let Some(zoom) = var::<u8>("WAYMARK_MAP_ZOOM")? {
            config.zoom = zoom;
        }
        if let Some(padding) = var::<u32>("WAYMARK_FIT_PADDING")? {
            config.fit_padding = padding;
        }
        if let Some(tile_url) = var::<String>("WAYMARK_TILE_URL")? {
            config.tile_url = tile_url;
        }
        if let Some(seconds) = var::<u64>("WAYMARK_REQUEST_TIMEOUT_SECS")? {
            config.request_timeout = Duration::from_secs(seconds);
        }

        tracing::info!(api_base = %config.api_base, "configuration loaded");

        Ok(config)
    }
}

fn var<T: FromStr>(name: &str) -> Result<Option<T>, Error> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| config_error(name, &raw)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(err) => Err(err.into()),
    }
}
