use crate::entities::{Dataset, Location, Locations, Road, Route};

pub fn sample_locations() -> Locations {
    let mut locations = Locations::new();
    locations.insert(
        "A".into(),
        Location::new("Alpha", 0.0, 0.0).with_amenity("Harbor Inn", "hotel"),
    );
    locations.insert(
        "B".into(),
        Location::new("Beta", 1.0, 1.0)
            .with_amenity("Deli", "restaurant")
            .with_amenity("Lot 4", "parking"),
    );
    locations.insert(
        "C".into(),
        Location::new("Gamma", 1.5, 2.0).with_amenity("Fountain", "landmark"),
    );
    locations
}

pub fn sample_dataset() -> Dataset {
    Dataset {
        locations: sample_locations(),
        roads: vec![
            Road::new("A", "B", "highway"),
            Road::new("B", "C", "main_road").named("Broadway"),
            Road::new("A", "C", "local"),
        ],
    }
}

pub fn three_stop_route() -> Route {
    Route {
        path: vec!["A".into(), "B".into(), "C".into()],
        locations: sample_locations(),
        total_distance: 12.4,
        total_time: 0.33,
    }
}

pub fn two_stop_route() -> Route {
    Route {
        path: vec!["B".into(), "C".into()],
        locations: sample_locations(),
        total_distance: 3.2,
        total_time: 0.1,
    }
}
