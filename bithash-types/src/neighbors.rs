use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the eight compass directions around a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Direction {
    /// All directions, cardinals first.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    /// True for north, south, east and west.
    pub fn is_cardinal(self) -> bool {
        matches!(
            self,
            Direction::North | Direction::South | Direction::East | Direction::West
        )
    }

    /// The direction pointing the other way.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::NorthEast => Direction::SouthWest,
            Direction::NorthWest => Direction::SouthEast,
            Direction::SouthEast => Direction::NorthWest,
            Direction::SouthWest => Direction::NorthEast,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "N",
            Direction::South => "S",
            Direction::East => "E",
            Direction::West => "W",
            Direction::NorthEast => "NE",
            Direction::NorthWest => "NW",
            Direction::SouthEast => "SE",
            Direction::SouthWest => "SW",
        };
        f.pad(name)
    }
}

/// The eight hashes adjacent to a box, all at the input's precision.
///
/// Equality and hashing are structural over the eight fields.
///
/// # Examples
///
/// ```
/// use bithash_types::neighbors::{Direction, NeighborSet};
///
/// let set = NeighborSet {
///     north: 13,
///     south: 9,
///     east: 14,
///     west: 6,
///     north_east: 15,
///     north_west: 7,
///     south_east: 11,
///     south_west: 3,
/// };
/// assert_eq!(set.get(Direction::East), 14);
/// assert_eq!(set.iter().count(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NeighborSet {
    pub north: u64,
    pub south: u64,
    pub east: u64,
    pub west: u64,
    pub north_east: u64,
    pub north_west: u64,
    pub south_east: u64,
    pub south_west: u64,
}

impl NeighborSet {
    /// Hash of the neighbor in the given direction.
    pub fn get(&self, direction: Direction) -> u64 {
        match direction {
            Direction::North => self.north,
            Direction::South => self.south,
            Direction::East => self.east,
            Direction::West => self.west,
            Direction::NorthEast => self.north_east,
            Direction::NorthWest => self.north_west,
            Direction::SouthEast => self.south_east,
            Direction::SouthWest => self.south_west,
        }
    }

    /// Iterate `(direction, hash)` pairs in `Direction::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, u64)> + '_ {
        Direction::ALL.into_iter().map(move |d| (d, self.get(d)))
    }

    /// Whether any neighbor equals `hash`.
    pub fn contains(&self, hash: u64) -> bool {
        self.iter().any(|(_, h)| h == hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn sample() -> NeighborSet {
        NeighborSet {
            north: 1,
            south: 2,
            east: 3,
            west: 4,
            north_east: 5,
            north_west: 6,
            south_east: 7,
            south_west: 8,
        }
    }

    #[test]
    fn test_get_matches_fields() {
        let set = sample();
        let hashes: Vec<u64> = set.iter().map(|(_, h)| h).collect();
        assert_eq!(hashes, vec![1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(set.get(Direction::SouthWest), 8);
        assert!(set.contains(5));
        assert!(!set.contains(9));
    }

    #[test]
    fn test_structural_equality() {
        let a = sample();
        let mut b = sample();
        assert_eq!(a, b);

        b.south_west = 42;
        assert_ne!(a, b);

        let mut seen = HashSet::new();
        seen.insert(a);
        assert!(seen.contains(&sample()));
        assert!(!seen.contains(&b));
    }

    #[test]
    fn test_opposites() {
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
            assert_ne!(d.opposite(), d);
            assert_eq!(d.is_cardinal(), d.opposite().is_cardinal());
        }
        assert_eq!(Direction::NorthEast.to_string(), "NE");
    }

    #[test]
    fn test_direction_serde() {
        let json = serde_json::to_string(&Direction::NorthWest).unwrap();
        assert_eq!(json, "\"north_west\"");
    }
}
