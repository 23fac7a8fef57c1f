pub mod memory;

use geo_types::{Coord, LineString, Rect};
use std::fmt;
use uuid::Uuid;

/// Handle for anything placed on the map. Handles are issued by the map
/// surface and stay valid until the layer is removed.
pub type LayerId = Uuid;

#[derive(Clone, Debug, PartialEq)]
pub struct PolylineStyle {
    pub color: &'static str,
    pub weight: u32,
    pub opacity: f64,
    pub dash: Option<&'static str>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Popup {
    pub title: String,
    pub items: Vec<String>,
}

impl fmt::Display for Popup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)?;

        if !self.items.is_empty() {
            write!(f, "\n\nAmenities:")?;
            for item in &self.items {
                write!(f, "\n- {}", item)?;
            }
        }

        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub position: Coord<f64>,
    pub title: String,
    pub popup: Popup,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Polyline {
    pub points: LineString<f64>,
    pub style: PolylineStyle,
    pub label: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TileLayer {
    pub url: String,
    pub attribution: String,
}

/// The map widget as seen by the renderers.
pub trait MapSurface {
    fn set_view(&mut self, center: Coord<f64>, zoom: u8);
    fn add_tile_layer(&mut self, tiles: TileLayer) -> LayerId;
    fn add_marker(&mut self, marker: Marker) -> LayerId;
    fn add_polyline(&mut self, polyline: Polyline) -> LayerId;
    /// Returns false when no layer with this handle is present.
    fn remove_layer(&mut self, id: LayerId) -> bool;
    fn fit_bounds(&mut self, bounds: Rect<f64>, padding: (u32, u32));
}

pub fn bounds(points: &LineString<f64>) -> Option<Rect<f64>> {
    let mut coords = points.coords();
    let first = *coords.next()?;

    let (min, max) = coords.fold((first, first), |(min, max), c| {
        (
            Coord {
                x: min.x.min(c.x),
                y: min.y.min(c.y),
            },
            Coord {
                x: max.x.max(c.x),
                y: max.y.max(c.y),
            },
        )
    });

    Some(Rect::new(min, max))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_cover_every_point() {
        let line = LineString::from(vec![(2.0, 1.5), (0.0, 0.0), (1.0, -3.0)]);
        let rect = bounds(&line).unwrap();

        assert_eq!(rect.min(), Coord { x: 0.0, y: -3.0 });
        assert_eq!(rect.max(), Coord { x: 2.0, y: 1.5 });
    }

    #[test]
    fn single_point_has_degenerate_bounds() {
        let line = LineString::from(vec![(4.0, 5.0)]);
        let rect = bounds(&line).unwrap();

        assert_eq!(rect.min(), rect.max());
    }

    #[test]
    fn empty_line_has_no_bounds() {
        assert_eq!(bounds(&LineString::new(vec![])), None);
    }

    #[test]
    fn popup_lists_amenities_after_title() {
        let popup = Popup {
            title: "Beta".into(),
            items: vec!["Deli (restaurant)".into(), "Lot 4 (parking)".into()],
        };

        assert_eq!(
            popup.to_string(),
            "Beta\n\nAmenities:\n- Deli (restaurant)\n- Lot 4 (parking)"
        );

        let bare = Popup {
            title: "Pier".into(),
            items: vec![],
        };
        assert_eq!(bare.to_string(), "Pier");
    }
}
