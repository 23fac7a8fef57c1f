use geo_types::{Coord, LineString};
use serde::{Deserialize, Serialize};

use crate::entities::{Location, LocationId, Locations};
use crate::error::{empty_route_error, unknown_stop_error, Error};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OptimizeFor {
    Distance,
    Time,
    Other(String),
}

impl OptimizeFor {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Distance => "distance",
            Self::Time => "time",
            Self::Other(other) => other,
        }
    }
}

impl Default for OptimizeFor {
    fn default() -> Self {
        Self::Distance
    }
}

impl From<&str> for OptimizeFor {
    fn from(value: &str) -> Self {
        match value {
            "distance" => Self::Distance,
            "time" => Self::Time,
            other => Self::Other(other.into()),
        }
    }
}

impl From<String> for OptimizeFor {
    fn from(value: String) -> Self {
        value.as_str().into()
    }
}

impl From<OptimizeFor> for String {
    fn from(value: OptimizeFor) -> Self {
        value.as_str().into()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteRequest {
    pub start: LocationId,
    pub end: LocationId,
    pub optimize_for: OptimizeFor,
    pub avoid_highways: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub path: Vec<LocationId>,
    pub locations: Locations,
    /// Kilometres.
    pub total_distance: f64,
    /// Hours.
    pub total_time: f64,
}

/// Body of a route response. A rejection is an ordinary reply from the
/// server, not a transport failure.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RouteResponse {
    Rejected { error: String },
    Found(Route),
}

impl Route {
    /// Looks up every stop of the path in the locations bundled with the route.
    pub fn stops(&self) -> Result<Vec<(&LocationId, &Location)>, Error> {
        if self.path.is_empty() {
            return Err(empty_route_error());
        }

        self.path
            .iter()
            .map(|id| {
                self.locations
                    .get(id)
                    .map(|location| (id, location))
                    .ok_or_else(|| unknown_stop_error(id))
            })
            .collect()
    }

    pub fn line(&self) -> Result<LineString<f64>, Error> {
        let coords: Vec<Coord<f64>> = self
            .stops()?
            .into_iter()
            .map(|(_, location)| location.coordinates())
            .collect();

        Ok(LineString::new(coords))
    }

    pub fn distance_km(&self) -> i64 {
        self.total_distance.round() as i64
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.total_time * 60.0).round() as i64
    }

    pub fn stop_count(&self) -> usize {
        self.path.len()
    }
}
