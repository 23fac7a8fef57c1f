use geo_types::LineString;
use indexmap::IndexMap;

use crate::entities::{Dataset, Location, LocationId, Locations};
use crate::error::Error;
use crate::map::{LayerId, MapSurface, Marker, Polyline, Popup};
use crate::style;
use crate::ui::{Entry, Region, Ui};

/// Marker handles by location, filled once per render and never mutated.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MarkerTable {
    markers: IndexMap<LocationId, LayerId>,
}

impl MarkerTable {
    pub fn get(&self, id: &str) -> Option<LayerId> {
        self.markers.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&LocationId, &LayerId)> {
        self.markers.iter()
    }
}

#[derive(Debug)]
struct GraphLayers {
    markers: MarkerTable,
    roads: Vec<LayerId>,
}

/// Draws the location/road network and the amenities sidebar.
#[derive(Debug, Default)]
pub struct GraphRenderer {
    rendered: Option<GraphLayers>,
}

impl GraphRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn markers(&self) -> Option<&MarkerTable> {
        self.rendered.as_ref().map(|layers| &layers.markers)
    }

    pub fn road_layers(&self) -> &[LayerId] {
        self.rendered
            .as_ref()
            .map(|layers| layers.roads.as_slice())
            .unwrap_or(&[])
    }

    /// Replaces whatever a previous render placed. Every road is resolved
    /// before the map is touched, so a dataset with a dangling road leaves
    /// the map exactly as it was.
    #[tracing::instrument(
        skip_all,
        fields(locations = dataset.locations.len(), roads = dataset.roads.len())
    )]
    pub fn render<M: MapSurface, U: Ui>(
        &mut self,
        map: &mut M,
        ui: &mut U,
        dataset: &Dataset,
    ) -> Result<&MarkerTable, Error> {
        let segments = dataset.segments()?;

        self.clear(map);

        let markers = dataset
            .locations
            .iter()
            .map(|(id, location)| (id.clone(), map.add_marker(marker(location))))
            .collect();

        let roads = segments
            .into_iter()
            .map(|(road, line)| {
                map.add_polyline(Polyline {
                    points: LineString::new(vec![line.start, line.end]),
                    style: style::road_style(&road.category),
                    label: road.name.clone(),
                })
            })
            .collect();

        render_amenities(ui, &dataset.locations);

        tracing::info!(amenities = dataset.amenity_count(), "rendered location graph");

        let layers = self.rendered.insert(GraphLayers {
            markers: MarkerTable { markers },
            roads,
        });

        Ok(&layers.markers)
    }

    pub fn clear<M: MapSurface>(&mut self, map: &mut M) {
        if let Some(layers) = self.rendered.take() {
            for (_, id) in layers.markers.iter() {
                map.remove_layer(*id);
            }
            for id in layers.roads {
                map.remove_layer(id);
            }
        }
    }
}

fn marker(location: &Location) -> Marker {
    let items = location
        .amenities
        .iter()
        .map(|amenity| format!("{} ({})", amenity.name, amenity.category))
        .collect();

    Marker {
        position: location.coordinates(),
        title: location.name.clone(),
        popup: Popup {
            title: location.name.clone(),
            items,
        },
    }
}

fn render_amenities<U: Ui>(ui: &mut U, locations: &Locations) {
    ui.clear_region(Region::Amenities);

    for amenity in locations.values().flat_map(|l| l.amenities.iter()) {
        ui.append_entry(
            Region::Amenities,
            Entry {
                icon: style::amenity_icon(&amenity.category),
                title: amenity.name.clone(),
                detail: None,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Location, Road};
    use crate::map::memory::{Layer, MemoryMap};
    use crate::test_utils::sample_dataset;
    use crate::ui::memory::MemoryPanel;

    #[test]
    fn one_marker_per_location_and_one_segment_per_road() {
        let dataset = sample_dataset();
        let mut map = MemoryMap::new();
        let mut panel = MemoryPanel::new();
        let mut renderer = GraphRenderer::new();

        let markers = renderer.render(&mut map, &mut panel, &dataset).unwrap();

        assert_eq!(markers.len(), 3);
        assert_eq!(map.markers().len(), 3);
        assert_eq!(map.polylines().len(), 3);
        for (id, layer) in markers.iter() {
            assert!(matches!(map.layer(*layer), Some(Layer::Marker(m)) if m.title == dataset.locations[id].name));
        }
    }

    #[test]
    fn highway_segment_is_dashed() {
        let mut dataset = Dataset::default();
        dataset.locations.insert("A".into(), Location::new("A", 0.0, 0.0));
        dataset.locations.insert("B".into(), Location::new("B", 1.0, 1.0));
        dataset.roads.push(Road::new("A", "B", "highway").named(""));

        let mut map = MemoryMap::new();
        let mut panel = MemoryPanel::new();
        GraphRenderer::new()
            .render(&mut map, &mut panel, &dataset)
            .unwrap();

        let segments = map.polylines();
        assert_eq!(segments.len(), 1);
        let segment = segments[0];
        assert_eq!(segment.style.color, style::road_color("highway"));
        assert_eq!(segment.style.weight, style::road_weight("highway"));
        assert_eq!(segment.style.dash, Some(style::HIGHWAY_DASH));
        assert_eq!(segment.style.opacity, 0.6);
        assert_eq!(segment.label, None);
        assert_eq!(segment.points.0.len(), 2);
    }

    #[test]
    fn popups_list_amenities() {
        let dataset = sample_dataset();
        let mut map = MemoryMap::new();
        let mut panel = MemoryPanel::new();
        let mut renderer = GraphRenderer::new();
        let beta = renderer
            .render(&mut map, &mut panel, &dataset)
            .unwrap()
            .get("B")
            .unwrap();

        match map.layer(beta) {
            Some(Layer::Marker(marker)) => {
                assert_eq!(marker.popup.title, "Beta");
                assert_eq!(
                    marker.popup.items,
                    vec!["Deli (restaurant)".to_string(), "Lot 4 (parking)".to_string()]
                );
            }
            other => panic!("expected a marker, got {:?}", other),
        }
    }

    #[test]
    fn amenities_follow_location_then_amenity_order() {
        let dataset = sample_dataset();
        let mut map = MemoryMap::new();
        let mut panel = MemoryPanel::new();
        GraphRenderer::new()
            .render(&mut map, &mut panel, &dataset)
            .unwrap();

        let listed: Vec<(&str, &str)> = panel
            .entries(Region::Amenities)
            .iter()
            .map(|e| (e.icon, e.title.as_str()))
            .collect();

        assert_eq!(listed.len(), dataset.amenity_count());
        assert_eq!(
            listed,
            vec![
                ("hotel", "Harbor Inn"),
                ("restaurant", "Deli"),
                ("local_parking", "Lot 4"),
                ("place", "Fountain"),
            ]
        );
    }

    #[test]
    fn dangling_road_renders_nothing() {
        let mut dataset = sample_dataset();
        dataset.roads.push(Road::new("C", "Z", "local"));

        let mut map = MemoryMap::new();
        let mut panel = MemoryPanel::new();
        let mut renderer = GraphRenderer::new();

        let err = renderer.render(&mut map, &mut panel, &dataset).unwrap_err();

        assert_eq!(err.code, 103);
        assert!(map.is_empty());
        assert!(panel.entries(Region::Amenities).is_empty());
        assert!(renderer.markers().is_none());
    }

    #[test]
    fn rerender_replaces_previous_layers() {
        let dataset = sample_dataset();
        let mut map = MemoryMap::new();
        let mut panel = MemoryPanel::new();
        let mut renderer = GraphRenderer::new();

        renderer.render(&mut map, &mut panel, &dataset).unwrap();
        renderer.render(&mut map, &mut panel, &dataset).unwrap();

        assert_eq!(map.markers().len(), 3);
        assert_eq!(map.polylines().len(), 3);
        assert_eq!(renderer.road_layers().len(), 3);
        assert_eq!(panel.entries(Region::Amenities).len(), 4);
    }
}
