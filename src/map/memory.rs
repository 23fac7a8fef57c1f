use geo_types::{Coord, Rect};
use indexmap::IndexMap;
use uuid::Uuid;

use super::{LayerId, MapSurface, Marker, Polyline, TileLayer};

#[derive(Clone, Debug, PartialEq)]
pub enum Layer {
    Tiles(TileLayer),
    Marker(Marker),
    Polyline(Polyline),
}

#[derive(Clone, Debug, PartialEq)]
pub enum View {
    Centered { center: Coord<f64>, zoom: u8 },
    Fitted { bounds: Rect<f64>, padding: (u32, u32) },
}

/// Map surface that keeps its layers in memory, in insertion order.
#[derive(Debug, Default)]
pub struct MemoryMap {
    layers: IndexMap<LayerId, Layer>,
    view: Option<View>,
}

impl MemoryMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn layer(&self, id: LayerId) -> Option<&Layer> {
        self.layers.get(&id)
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn view(&self) -> Option<&View> {
        self.view.as_ref()
    }

    pub fn markers(&self) -> Vec<&Marker> {
        self.layers
            .values()
            .filter_map(|layer| match layer {
                Layer::Marker(marker) => Some(marker),
                _ => None,
            })
            .collect()
    }

    pub fn polylines(&self) -> Vec<&Polyline> {
        self.layers
            .values()
            .filter_map(|layer| match layer {
                Layer::Polyline(polyline) => Some(polyline),
                _ => None,
            })
            .collect()
    }

    pub fn tile_layers(&self) -> Vec<&TileLayer> {
        self.layers
            .values()
            .filter_map(|layer| match layer {
                Layer::Tiles(tiles) => Some(tiles),
                _ => None,
            })
            .collect()
    }

    fn insert(&mut self, layer: Layer) -> LayerId {
        let id = Uuid::new_v4();
        self.layers.insert(id, layer);
        id
    }
}

impl MapSurface for MemoryMap {
    fn set_view(&mut self, center: Coord<f64>, zoom: u8) {
        self.view = Some(View::Centered { center, zoom });
    }

    fn add_tile_layer(&mut self, tiles: TileLayer) -> LayerId {
        self.insert(Layer::Tiles(tiles))
    }

    fn add_marker(&mut self, marker: Marker) -> LayerId {
        self.insert(Layer::Marker(marker))
    }

    fn add_polyline(&mut self, polyline: Polyline) -> LayerId {
        self.insert(Layer::Polyline(polyline))
    }

    fn remove_layer(&mut self, id: LayerId) -> bool {
        self.layers.shift_remove(&id).is_some()
    }

    fn fit_bounds(&mut self, bounds: Rect<f64>, padding: (u32, u32)) {
        self.view = Some(View::Fitted { bounds, padding });
    }
}
