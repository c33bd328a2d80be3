//! The two parties of a round and per-party data storage.
//!
//! ## Side
//!
//! `Player` is the human at the terminal, `Computer` the automated opponent.
//!
//! ## SideMap
//!
//! Fixed two-slot storage indexed by `Side`, used for scores.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two parties in a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The human player.
    Player,
    /// The automated opponent.
    Computer,
}

impl Side {
    /// Both sides, player first.
    pub const ALL: [Side; 2] = [Side::Player, Side::Computer];

    /// The other party.
    ///
    /// ```
    /// use numstring::core::Side;
    ///
    /// assert_eq!(Side::Player.opponent(), Side::Computer);
    /// assert_eq!(Side::Computer.opponent(), Side::Player);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }

    #[must_use]
    const fn index(self) -> usize {
        match self {
            Side::Player => 0,
            Side::Computer => 1,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => write!(f, "Player"),
            Side::Computer => write!(f, "Computer"),
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use numstring::core::{Side, SideMap};
///
/// let mut scores = SideMap::with_value(100);
/// scores[Side::Computer] += 3;
///
/// assert_eq!(scores[Side::Player], 100);
/// assert_eq!(scores[Side::Computer], 103);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a new SideMap with values from a factory function.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            data: [factory(Side::Player), factory(Side::Computer)],
        }
    }

    /// Create a new SideMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over (Side, &T) pairs, player first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_basics() {
        assert_eq!(Side::Player.opponent().opponent(), Side::Player);
        assert_eq!(format!("{}", Side::Player), "Player");
        assert_eq!(format!("{}", Side::Computer), "Computer");
    }

    #[test]
    fn test_side_map_new() {
        let map = SideMap::new(|s| if s == Side::Player { 1 } else { 2 });

        assert_eq!(map[Side::Player], 1);
        assert_eq!(map[Side::Computer], 2);
    }

    #[test]
    fn test_side_map_mutation() {
        let mut map = SideMap::with_value(100i64);

        map[Side::Player] -= 8;
        map[Side::Computer] += 3;

        assert_eq!(map[Side::Player], 92);
        assert_eq!(map[Side::Computer], 103);
    }

    #[test]
    fn test_side_map_iter() {
        let map = SideMap::new(|s| s.index() as i64);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Side::Player, &0), (Side::Computer, &1)]);
    }

    #[test]
    fn test_side_map_serialization() {
        let map = SideMap::with_value(100i64);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: SideMap<i64> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
