use bithash::{
    BoundingBox, Direction, GeoBitHash, NeighborSet, all_neighbors, decode, east, encode,
    neighbor_of, north, south, west,
};

const CITIES: [(f64, f64); 6] = [
    (40.7128, -74.0060),   // New York
    (51.5074, -0.1278),    // London
    (35.6895, 139.6917),   // Tokyo
    (-33.8688, 151.2093),  // Sydney
    (-22.9068, -43.1729),  // Rio de Janeiro
    (64.1466, -21.9426),   // Reykjavik
];

fn grid() -> impl Iterator<Item = (f64, f64)> {
    (0..23).flat_map(|i| {
        let lat = -80.0 + i as f64 * 7.3;
        (0..32).map(move |j| (lat, -175.0 + j as f64 * 11.1))
    })
}

#[test]
fn test_round_trip_containment() {
    for (lat, lng) in grid().chain(CITIES) {
        for precision in [1, 2, 7, 16, 25, 32, 52, 63, 64] {
            let hash = encode(lat, lng, precision).unwrap();
            let bbox = decode(hash, precision).unwrap();
            assert!(
                bbox.contains(lat, lng),
                "({}, {}) not in {:?} at precision {}",
                lat,
                lng,
                bbox,
                precision
            );
        }
    }
}

#[test]
fn test_cells_shrink_with_precision() {
    for (lat, lng) in CITIES {
        let mut previous = BoundingBox::domain();
        for precision in (2..=52).step_by(2) {
            let bbox = decode(encode(lat, lng, precision).unwrap(), precision).unwrap();
            assert_eq!(bbox.width(), previous.width() / 2.0);
            assert_eq!(bbox.height(), previous.height() / 2.0);
            assert!(previous.contains(bbox.min_lat, bbox.min_lng));
            assert!(previous.contains(bbox.max_lat, bbox.max_lng));
            previous = bbox;
        }
    }
}

#[test]
fn test_north_south_symmetry() {
    for (lat, lng) in grid() {
        for precision in [8, 16, 26, 40, 52] {
            let hash = encode(lat, lng, precision).unwrap();
            let bbox = decode(hash, precision).unwrap();
            if bbox.touches_pole() {
                continue;
            }

            let up = decode(north(&bbox, precision).unwrap(), precision).unwrap();
            assert_eq!(up.min_lat, bbox.max_lat);
            assert_eq!(south(&up, precision).unwrap(), hash);

            let down = decode(south(&bbox, precision).unwrap(), precision).unwrap();
            assert_eq!(down.max_lat, bbox.min_lat);
            assert_eq!(north(&down, precision).unwrap(), hash);
        }
    }
}

#[test]
fn test_east_west_symmetry() {
    for (lat, lng) in grid() {
        for precision in [8, 16, 26, 40, 52] {
            let hash = encode(lat, lng, precision).unwrap();
            let bbox = decode(hash, precision).unwrap();

            let left = decode(west(&bbox, precision).unwrap(), precision).unwrap();
            assert_eq!(east(&left, precision).unwrap(), hash);

            let right = decode(east(&bbox, precision).unwrap(), precision).unwrap();
            assert_eq!(west(&right, precision).unwrap(), hash);
        }
    }
}

#[test]
fn test_interior_neighbors_are_adjacent_and_distinct() {
    for (lat, lng) in CITIES {
        let precision = 52;
        let hash = encode(lat, lng, precision).unwrap();
        let bbox = decode(hash, precision).unwrap();
        let set = all_neighbors(hash, precision).unwrap();

        let mut seen = vec![hash];
        for (direction, neighbor) in set.iter() {
            assert!(!seen.contains(&neighbor), "duplicate {} neighbor", direction);
            seen.push(neighbor);

            let cell = decode(neighbor, precision).unwrap();
            assert!(cell.intersects(&bbox), "{} neighbor not adjacent", direction);
            assert_eq!(cell.width(), bbox.width());
            assert_eq!(cell.height(), bbox.height());
        }
    }
}

#[test]
fn test_diagonals_commute_away_from_edges() {
    let precision = 40;
    for (lat, lng) in CITIES {
        let hash = encode(lat, lng, precision).unwrap();
        let set = all_neighbors(hash, precision).unwrap();

        // North of east equals east of north when nothing wraps.
        let above = decode(set.north, precision).unwrap();
        assert_eq!(east(&above, precision).unwrap(), set.north_east);
        assert_eq!(west(&above, precision).unwrap(), set.north_west);

        let below = decode(set.south, precision).unwrap();
        assert_eq!(east(&below, precision).unwrap(), set.south_east);
        assert_eq!(west(&below, precision).unwrap(), set.south_west);
    }
}

#[test]
fn test_neighbor_of_opposite_returns_home() {
    let precision = 52;
    let hash = encode(48.8566, 2.3522, precision).unwrap();
    for direction in Direction::ALL {
        let away = neighbor_of(hash, direction, precision).unwrap();
        let back = neighbor_of(away, direction.opposite(), precision).unwrap();
        assert_eq!(back, hash, "{} then {}", direction, direction.opposite());
    }
}

#[test]
fn test_codec_facade_matches_free_functions() {
    let codec = GeoBitHash::default();
    for (lat, lng) in CITIES {
        let hash = codec.encode(lat, lng).unwrap();
        assert_eq!(hash, encode(lat, lng, 52).unwrap());
        assert_eq!(codec.decode(hash).unwrap(), decode(hash, 52).unwrap());
        assert_eq!(
            codec.neighbors(hash).unwrap(),
            all_neighbors(hash, 52).unwrap()
        );
    }
}

#[test]
fn test_neighbor_set_serde() {
    let set = all_neighbors(0b1100, 4).unwrap();
    let json = serde_json::to_string(&set).unwrap();
    let back: NeighborSet = serde_json::from_str(&json).unwrap();
    assert_eq!(back, set);
}
