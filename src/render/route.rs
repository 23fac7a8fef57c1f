use geo_types::Rect;

use crate::entities::Route;
use crate::error::{invalid_state_error, Error};
use crate::map::{bounds, LayerId, MapSurface, Polyline};
use crate::style;
use crate::ui::{Entry, Region, Slot, Ui};

/// The route currently on the map.
#[derive(Clone, Debug, PartialEq)]
pub struct CurrentRoute {
    pub layer: LayerId,
    pub stops: usize,
    pub bounds: Rect<f64>,
}

/// Owns the single displayed route. Showing a route always removes the
/// previous one first; there is never more than one route layer.
#[derive(Debug)]
pub struct RouteDisplay {
    current: Option<CurrentRoute>,
    padding: u32,
}

impl RouteDisplay {
    pub fn new(padding: u32) -> Self {
        Self {
            current: None,
            padding,
        }
    }

    pub fn current(&self) -> Option<&CurrentRoute> {
        self.current.as_ref()
    }

    #[tracing::instrument(skip_all, fields(stops = route.path.len()))]
    pub fn show<M: MapSurface, U: Ui>(
        &mut self,
        map: &mut M,
        ui: &mut U,
        route: &Route,
    ) -> Result<(), Error> {
        let stops = route.stops()?;
        let points = route.line()?;
        let bounds = bounds(&points).ok_or_else(invalid_state_error)?;

        self.remove_layer(map);

        let layer = map.add_polyline(Polyline {
            points,
            style: style::route_style(),
            label: None,
        });
        map.fit_bounds(bounds, (self.padding, self.padding));

        ui.set_text(Slot::TotalDistance, &format!("{} km", route.distance_km()));
        ui.set_text(Slot::TotalTime, &format!("{} min", route.duration_minutes()));
        ui.set_text(Slot::TotalStops, &route.stop_count().to_string());

        ui.clear_region(Region::Steps);
        let len = stops.len();
        for (index, (_, location)) in stops.into_iter().enumerate() {
            ui.append_entry(
                Region::Steps,
                Entry {
                    icon: style::step_icon(index, len),
                    title: location.name.clone(),
                    detail: location.amenity_names(),
                },
            );
        }

        tracing::info!(
            distance_km = route.distance_km(),
            minutes = route.duration_minutes(),
            "route displayed"
        );

        self.current = Some(CurrentRoute {
            layer,
            stops: len,
            bounds,
        });

        Ok(())
    }

    /// Safe to call repeatedly; the summary and steps are reset either way.
    pub fn clear<M: MapSurface, U: Ui>(&mut self, map: &mut M, ui: &mut U) {
        self.remove_layer(map);

        ui.set_text(Slot::TotalDistance, "0 km");
        ui.set_text(Slot::TotalTime, "0 min");
        ui.set_text(Slot::TotalStops, "0");
        ui.clear_region(Region::Steps);
    }

    fn remove_layer<M: MapSurface>(&mut self, map: &mut M) {
        if let Some(current) = self.current.take() {
            if !map.remove_layer(current.layer) {
                tracing::warn!(layer = %current.layer, "route layer was already gone");
            }
        }
    }
}
