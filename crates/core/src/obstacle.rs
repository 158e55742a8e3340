//! Obstacle registry - bounding boxes of debris in flight.
//!
//! Each box is owned by the debris behavior that registered it: only that
//! behavior (holding the [`ObstacleId`]) relocates or removes it. Everyone else
//! (the spaceship, projectiles) only queries.
//!
//! # Overlap rule
//!
//! Positions carry sub-cell precision, but collisions are decided on whole
//! cells: the corner is rounded and a box of height `h` covers rows
//! `[r, r + h - 1]` inclusive (same for columns). Two boxes collide when they
//! share at least one cell, so touching a boundary cell counts as a hit.

use std::collections::BTreeSet;

/// Stable identity of a registered obstacle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObstacleId(u64);

impl ObstacleId {
    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// Inclusive rectangle of whole cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    pub top: i64,
    pub left: i64,
    pub bottom: i64,
    pub right: i64,
}

impl CellRect {
    /// Cells covered by a box at `(row, column)` of the given size.
    pub fn from_box(row: f64, column: f64, height: u16, width: u16) -> Self {
        let top = row.round() as i64;
        let left = column.round() as i64;
        Self {
            top,
            left,
            bottom: top + i64::from(height) - 1,
            right: left + i64::from(width) - 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bottom < self.top || self.right < self.left
    }

    pub fn intersects(&self, other: &CellRect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.top <= other.bottom
            && other.top <= self.bottom
            && self.left <= other.right
            && other.left <= self.right
    }

    /// Shared cells, if any.
    pub fn intersection(&self, other: &CellRect) -> Option<CellRect> {
        if !self.intersects(other) {
            return None;
        }
        Some(CellRect {
            top: self.top.max(other.top),
            left: self.left.max(other.left),
            bottom: self.bottom.min(other.bottom),
            right: self.right.min(other.right),
        })
    }

    /// Geometric center `(row, column)`.
    pub fn center(&self) -> (f64, f64) {
        let rows = (self.bottom - self.top + 1) as f64;
        let columns = (self.right - self.left + 1) as f64;
        (self.top as f64 + rows / 2.0, self.left as f64 + columns / 2.0)
    }
}

/// Bounding box of one piece of debris.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub id: ObstacleId,
    pub row: f64,
    pub column: f64,
    pub height: u16,
    pub width: u16,
}

impl Obstacle {
    pub fn cells(&self) -> CellRect {
        CellRect::from_box(self.row, self.column, self.height, self.width)
    }

    /// Does a `height` x `width` box at `(row, column)` touch this obstacle?
    pub fn has_collision(&self, row: f64, column: f64, height: u16, width: u16) -> bool {
        self.cells()
            .intersects(&CellRect::from_box(row, column, height, width))
    }
}

/// Live obstacles in registration order.
#[derive(Debug, Default)]
pub struct ObstacleRegistry {
    obstacles: Vec<Obstacle>,
    next_id: u64,
}

impl ObstacleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, row: f64, column: f64, height: u16, width: u16) -> ObstacleId {
        let id = ObstacleId(self.next_id);
        self.next_id += 1;
        self.obstacles.push(Obstacle {
            id,
            row,
            column,
            height,
            width,
        });
        id
    }

    /// Remove an obstacle. Returns `None` if it was already removed.
    pub fn unregister(&mut self, id: ObstacleId) -> Option<Obstacle> {
        let pos = self.obstacles.iter().position(|o| o.id == id)?;
        Some(self.obstacles.remove(pos))
    }

    /// Move an obstacle's corner. Returns false for unknown ids.
    pub fn relocate(&mut self, id: ObstacleId, row: f64, column: f64) -> bool {
        match self.obstacles.iter_mut().find(|o| o.id == id) {
            Some(obstacle) => {
                obstacle.row = row;
                obstacle.column = column;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: ObstacleId) -> Option<&Obstacle> {
        self.obstacles.iter().find(|o| o.id == id)
    }

    /// Point-in-time view of every live obstacle.
    pub fn all(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Ids of every obstacle touching the given box, in registration order.
    pub fn overlaps(&self, row: f64, column: f64, height: u16, width: u16) -> Vec<ObstacleId> {
        let query = CellRect::from_box(row, column, height, width);
        self.obstacles
            .iter()
            .filter(|o| o.cells().intersects(&query))
            .map(|o| o.id)
            .collect()
    }

    /// First obstacle covering the cell at `(row, column)`.
    pub fn overlaps_point(&self, row: f64, column: f64) -> Option<ObstacleId> {
        let query = CellRect::from_box(row, column, 1, 1);
        self.obstacles
            .iter()
            .find(|o| o.cells().intersects(&query))
            .map(|o| o.id)
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }
}

/// Obstacles hit by a projectile and not yet processed by their owner.
///
/// Set semantics: a second hit on an already-marked obstacle in the same tick
/// is absorbed, so the owner sees exactly one hit.
#[derive(Debug, Default)]
pub struct CollisionMarks {
    marked: BTreeSet<ObstacleId>,
}

impl CollisionMarks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flag an obstacle. Returns false if it was already flagged.
    pub fn mark(&mut self, id: ObstacleId) -> bool {
        self.marked.insert(id)
    }

    /// Consume the flag for `id`, reporting whether it was set.
    pub fn take(&mut self, id: ObstacleId) -> bool {
        self.marked.remove(&id)
    }

    pub fn contains(&self, id: ObstacleId) -> bool {
        self.marked.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.marked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marked.is_empty()
    }

    pub fn clear(&mut self) {
        self.marked.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_boundary_cell_collides() {
        let a = CellRect::from_box(0.0, 0.0, 3, 3);
        let b = CellRect::from_box(2.0, 2.0, 3, 3);
        assert!(a.intersects(&b));
        assert_eq!(
            a.intersection(&b),
            Some(CellRect {
                top: 2,
                left: 2,
                bottom: 2,
                right: 2
            })
        );
    }

    #[test]
    fn gap_does_not_collide() {
        let a = CellRect::from_box(0.0, 0.0, 3, 3);
        assert!(!a.intersects(&CellRect::from_box(4.0, 0.0, 3, 3)));
        assert!(!a.intersects(&CellRect::from_box(0.0, 4.0, 3, 3)));
        assert!(!a.intersects(&CellRect::from_box(0.0, 0.0, 0, 3)));
    }

    #[test]
    fn fractional_positions_round_to_cells() {
        let obstacle = Obstacle {
            id: ObstacleId(0),
            row: 4.6,
            column: 0.0,
            height: 3,
            width: 1,
        };
        // Covers rows 5..=7.
        assert!(!obstacle.has_collision(7.6, 0.0, 1, 1));
        assert!(obstacle.has_collision(7.4, 0.0, 1, 1));
        assert!(obstacle.has_collision(4.5, 0.0, 1, 1));
        assert!(!obstacle.has_collision(4.4, 0.0, 1, 1));
    }

    #[test]
    fn registry_lifecycle() {
        let mut registry = ObstacleRegistry::new();
        let a = registry.register(0.0, 0.0, 2, 2);
        let b = registry.register(0.0, 10.0, 2, 2);
        assert_ne!(a, b);
        assert_eq!(registry.len(), 2);

        assert_eq!(registry.overlaps(1.0, 1.0, 1, 1), vec![a]);
        assert_eq!(registry.overlaps(0.0, 0.0, 1, 20), vec![a, b]);
        assert_eq!(registry.overlaps_point(5.0, 5.0), None);

        assert!(registry.relocate(a, 5.0, 5.0));
        assert_eq!(registry.overlaps_point(5.0, 5.0), Some(a));

        assert!(registry.unregister(a).is_some());
        assert!(registry.unregister(a).is_none());
        assert!(!registry.relocate(a, 0.0, 0.0));
        assert_eq!(registry.all().len(), 1);
        assert_eq!(registry.all()[0].id, b);
    }

    #[test]
    fn ids_are_not_reused() {
        let mut registry = ObstacleRegistry::new();
        let a = registry.register(0.0, 0.0, 1, 1);
        registry.unregister(a);
        let b = registry.register(0.0, 0.0, 1, 1);
        assert!(b > a);
    }

    #[test]
    fn marks_are_deduplicated() {
        let mut marks = CollisionMarks::new();
        let id = ObstacleId(3);
        assert!(marks.mark(id));
        assert!(!marks.mark(id));
        assert_eq!(marks.len(), 1);
        assert!(marks.take(id));
        assert!(!marks.take(id));
        assert!(marks.is_empty());
    }

    #[test]
    fn intersection_center() {
        let a = CellRect::from_box(0.0, 0.0, 4, 4);
        let (row, col) = a.center();
        assert_eq!((row, col), (2.0, 2.0));
    }
}
