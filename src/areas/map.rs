//! Areas domain: the grid of walkable areas.

use bevy::prelude::*;

/// Distance inside the opposite edge a player lands after crossing.
pub const ENTRY_MARGIN: f32 = 24.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    North,
    East,
    South,
    West,
}

/// Area the player is currently standing in, as an index into `AreaMap`.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CurrentArea(pub usize);

/// Areas laid out row-major in a grid, all sharing one size.
#[derive(Resource, Debug, Clone)]
pub struct AreaMap {
    pub names: Vec<String>,
    pub columns: usize,
    pub half_extent: Vec2,
    pub colors: Vec<Color>,
}

impl Default for AreaMap {
    fn default() -> Self {
        Self {
            names: ["Mountain", "Bus Stop", "Town", "Forest", "Farm", "Beach"]
                .map(String::from)
                .to_vec(),
            columns: 3,
            half_extent: Vec2::new(600.0, 340.0),
            colors: vec![
                Color::srgb(0.45, 0.42, 0.38),
                Color::srgb(0.5, 0.5, 0.45),
                Color::srgb(0.55, 0.5, 0.42),
                Color::srgb(0.2, 0.4, 0.22),
                Color::srgb(0.3, 0.5, 0.28),
                Color::srgb(0.8, 0.75, 0.55),
            ],
        }
    }
}

impl AreaMap {
    pub fn name(&self, area: usize) -> &str {
        self.names.get(area).map(String::as_str).unwrap_or("Unknown")
    }

    pub fn color(&self, area: usize) -> Color {
        self.colors
            .get(area)
            .copied()
            .unwrap_or(Color::srgb(0.3, 0.3, 0.3))
    }

    /// The area across `edge`, if the grid has one there.
    pub fn neighbour(&self, area: usize, edge: Edge) -> Option<usize> {
        let columns = self.columns.max(1);
        let column = area % columns;

        let next = match edge {
            Edge::North => area.checked_sub(columns)?,
            Edge::South => area + columns,
            Edge::West => {
                if column == 0 {
                    return None;
                }
                area - 1
            }
            Edge::East => {
                if column + 1 >= columns {
                    return None;
                }
                area + 1
            }
        };

        (next < self.names.len()).then_some(next)
    }

    /// The edge `position` has stepped past, if any. Horizontal edges win ties.
    pub fn crossed_edge(&self, position: Vec2) -> Option<Edge> {
        if position.x > self.half_extent.x {
            Some(Edge::East)
        } else if position.x < -self.half_extent.x {
            Some(Edge::West)
        } else if position.y > self.half_extent.y {
            Some(Edge::North)
        } else if position.y < -self.half_extent.y {
            Some(Edge::South)
        } else {
            None
        }
    }

    /// Where a player crossing `edge` enters the neighbouring area.
    pub fn entry_point(&self, position: Vec2, edge: Edge) -> Vec2 {
        let half = self.half_extent;
        match edge {
            Edge::East => Vec2::new(-half.x + ENTRY_MARGIN, position.y),
            Edge::West => Vec2::new(half.x - ENTRY_MARGIN, position.y),
            Edge::North => Vec2::new(position.x, -half.y + ENTRY_MARGIN),
            Edge::South => Vec2::new(position.x, half.y - ENTRY_MARGIN),
        }
    }

    pub fn clamp(&self, position: Vec2) -> Vec2 {
        position.clamp(-self.half_extent, self.half_extent)
    }
}
