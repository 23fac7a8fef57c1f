use geo_types::Line;
use serde::{Deserialize, Serialize};

use crate::entities::{Locations, Road};
use crate::error::{missing_reference_error, Error};

/// Everything the map shows before any route is requested.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub locations: Locations,
    pub roads: Vec<Road>,
}

impl Dataset {
    /// Resolves both ends of every road. Fails on the first road that names a
    /// location the dataset does not contain.
    pub fn segments(&self) -> Result<Vec<(&Road, Line<f64>)>, Error> {
        self.roads
            .iter()
            .map(|road| {
                let start = self
                    .locations
                    .get(&road.start)
                    .ok_or_else(|| missing_reference_error(&road.start, &road.describe()))?;
                let end = self
                    .locations
                    .get(&road.end)
                    .ok_or_else(|| missing_reference_error(&road.end, &road.describe()))?;

                Ok((road, Line::new(start.coordinates(), end.coordinates())))
            })
            .collect()
    }

    pub fn amenity_count(&self) -> usize {
        self.locations.values().map(|l| l.amenities.len()).sum()
    }
}
