use backend::math::Rect;

/// Static board of equally sized square tiles laid out on a fixed pitch.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TileGrid {
    pub columns: u32,
    pub rows: u32,
    pub pitch: u32,
    pub tile_size: u32,
}

impl Default for TileGrid {
    fn default() -> Self {
        Self::new(8, 8, 50, 49)
    }
}

impl TileGrid {
    pub fn new(columns: u32, rows: u32, pitch: u32, tile_size: u32) -> Self {
        debug_assert!(tile_size <= pitch, "tiles would overlap");
        Self {
            columns,
            rows,
            pitch,
            tile_size,
        }
    }

    pub fn len(&self) -> usize {
        (self.columns * self.rows) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn tile(&self, column: u32, row: u32) -> Rect {
        Rect::new(
            (column * self.pitch) as i32,
            (row * self.pitch) as i32,
            self.tile_size,
            self.tile_size,
        )
    }

    /// All tiles, column by column.
    pub fn tiles(&self) -> impl Iterator<Item = Rect> + '_ {
        (0..self.columns).flat_map(move |i| (0..self.rows).map(move |j| self.tile(i, j)))
    }

    pub fn bounds(&self) -> Rect {
        if self.is_empty() {
            return Rect::default();
        }
        self.tile(0, 0)
            .union(&self.tile(self.columns - 1, self.rows - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_grid_is_eight_by_eight() {
        let grid = TileGrid::default();
        let tiles: Vec<Rect> = grid.tiles().collect();
        assert_eq!(tiles.len(), 64);
        assert_eq!(grid.len(), 64);
        assert!(tiles.iter().all(|t| t.w == 49 && t.h == 49));
        assert_eq!(tiles[0], Rect::new(0, 0, 49, 49));
        assert_eq!(tiles[63], Rect::new(350, 350, 49, 49));
    }

    #[test]
    fn tiles_are_visited_column_major() {
        let tiles: Vec<Rect> = TileGrid::default().tiles().take(9).collect();
        assert_eq!(tiles[1], Rect::new(0, 50, 49, 49));
        assert_eq!(tiles[7], Rect::new(0, 350, 49, 49));
        assert_eq!(tiles[8], Rect::new(50, 0, 49, 49));
    }

    #[test]
    fn neighbours_leave_a_one_pixel_gap() {
        let grid = TileGrid::default();
        let a = grid.tile(2, 3);
        let b = grid.tile(3, 3);
        assert_eq!(b.x - a.right(), 1);
        assert!(!a.contains(a.right(), a.y));
        assert!(!b.contains(a.right(), b.y));
    }

    #[test]
    fn bounds_cover_every_tile() {
        let grid = TileGrid::default();
        let bounds = grid.bounds();
        assert_eq!(bounds, Rect::new(0, 0, 399, 399));
        assert!(grid
            .tiles()
            .all(|t| bounds.contains(t.x, t.y) && bounds.contains(t.right() - 1, t.bottom() - 1)));
    }

    #[test]
    fn empty_grid_has_no_tiles() {
        let grid = TileGrid::new(0, 4, 10, 9);
        assert!(grid.is_empty());
        assert_eq!(grid.tiles().count(), 0);
        assert_eq!(grid.bounds(), Rect::default());
    }
}
