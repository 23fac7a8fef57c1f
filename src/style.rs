//! Display attributes for roads, amenities and route steps.

use crate::map::PolylineStyle;

pub const HIGHWAY: &str = "highway";
pub const MAIN_ROAD: &str = "main_road";

pub const ROAD_OPACITY: f64 = 0.6;
pub const HIGHWAY_DASH: &str = "10, 10";

pub const ORIGIN_ICON: &str = "trip_origin";
pub const DESTINATION_ICON: &str = "flag";
pub const PLACE_ICON: &str = "place";

pub fn road_color(category: &str) -> &'static str {
    match category {
        HIGHWAY => "#1976D2",
        MAIN_ROAD => "#388E3C",
        _ => "#666666",
    }
}

pub fn road_weight(category: &str) -> u32 {
    match category {
        HIGHWAY => 4,
        MAIN_ROAD => 3,
        _ => 2,
    }
}

pub fn road_dash(category: &str) -> Option<&'static str> {
    match category {
        HIGHWAY => Some(HIGHWAY_DASH),
        _ => None,
    }
}

pub fn road_style(category: &str) -> PolylineStyle {
    PolylineStyle {
        color: road_color(category),
        weight: road_weight(category),
        opacity: ROAD_OPACITY,
        dash: road_dash(category),
    }
}

/// Highlight for the current route, drawn above the road network.
pub fn route_style() -> PolylineStyle {
    PolylineStyle {
        color: "#F44336",
        weight: 5,
        opacity: 0.8,
        dash: None,
    }
}

pub fn amenity_icon(category: &str) -> &'static str {
    match category {
        "restaurant" => "restaurant",
        "parking" => "local_parking",
        "hotel" => "hotel",
        _ => PLACE_ICON,
    }
}

pub fn step_icon(index: usize, len: usize) -> &'static str {
    if index == 0 {
        ORIGIN_ICON
    } else if index + 1 == len {
        DESTINATION_ICON
    } else {
        PLACE_ICON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATEGORIES: [&str; 7] = ["highway", "main_road", "local", "", "HIGHWAY", "ferry", "🚲"];

    #[test]
    fn road_lookups_are_total_and_deterministic() {
        for category in CATEGORIES {
            assert_eq!(road_color(category), road_color(category));
            assert_eq!(road_weight(category), road_weight(category));
            assert_eq!(road_style(category), road_style(category));
        }
    }

    #[test]
    fn road_categories() {
        assert_eq!(road_color("highway"), "#1976D2");
        assert_eq!(road_color("main_road"), "#388E3C");
        assert_eq!(road_color("gravel"), "#666666");

        assert_eq!(road_weight("highway"), 4);
        assert_eq!(road_weight("main_road"), 3);
        assert_eq!(road_weight("gravel"), 2);
    }

    #[test]
    fn only_highways_are_dashed() {
        assert_eq!(road_style("highway").dash, Some("10, 10"));
        assert_eq!(road_style("main_road").dash, None);
        assert_eq!(road_style("anything").dash, None);
        assert_eq!(road_style("anything").opacity, 0.6);
    }

    #[test]
    fn route_stands_out_from_roads() {
        let route = route_style();

        for category in CATEGORIES {
            let road = road_style(category);
            assert!(route.weight > road.weight);
            assert!(route.opacity > road.opacity);
            assert_ne!(route.color, road.color);
        }
    }

    #[test]
    fn amenity_icons() {
        assert_eq!(amenity_icon("restaurant"), "restaurant");
        assert_eq!(amenity_icon("parking"), "local_parking");
        assert_eq!(amenity_icon("hotel"), "hotel");
        assert_eq!(amenity_icon("museum"), "place");
        assert_eq!(amenity_icon(""), "place");
    }

    #[test]
    fn step_icons_mark_the_ends() {
        let icons: Vec<&str> = (0..4).map(|i| step_icon(i, 4)).collect();
        assert_eq!(icons, vec!["trip_origin", "place", "place", "flag"]);

        assert_eq!(step_icon(0, 1), "trip_origin");
        assert_eq!(step_icon(1, 2), "flag");
    }
}
