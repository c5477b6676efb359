//! Canvas coordinate arithmetic: snapping and clamping

use crate::utils::validation::{DEFAULT_GRID_SIZE, GRID_SIZE_RANGE};

/// Canvas height used until the rendered canvas reports its size
pub const MIN_CANVAS_HEIGHT: f64 = 600.0;
/// Canvas width used until the rendered canvas reports its size
pub const DEFAULT_CANVAS_WIDTH: f64 = 1200.0;

/// Pointer or tile position in canvas pixels
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Rendered canvas extent
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasBounds {
    pub width: f64,
    pub height: f64,
}

impl CanvasBounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(MIN_CANVAS_HEIGHT),
        }
    }
}

impl Default for CanvasBounds {
    fn default() -> Self {
        Self::new(DEFAULT_CANVAS_WIDTH, MIN_CANVAS_HEIGHT)
    }
}

/// Grid size plus the two independent toggles
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridSettings {
    size: i32,
    pub show_grid: bool,
    pub snap_to_grid: bool,
}

impl GridSettings {
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Grid size, kept inside the allowed range
    pub fn set_size(&mut self, size: i32) {
        self.size = size.clamp(*GRID_SIZE_RANGE.start(), *GRID_SIZE_RANGE.end());
    }

    pub fn with_size(mut self, size: i32) -> Self {
        self.set_size(size);
        self
    }

    pub fn with_snap(mut self, snap_to_grid: bool) -> Self {
        self.snap_to_grid = snap_to_grid;
        self
    }
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            show_grid: true,
            snap_to_grid: true,
        }
    }
}

/// Nearest multiple of `grid`
pub fn snap_to_grid(value: f64, grid: i32) -> f64 {
    let grid = f64::from(grid);
    (value / grid).round() * grid
}

/// Keep `value` in `[0, limit - extent]`
///
/// With a grid the upper limit is the last grid line that still fits, so a
/// snapped value stays on the grid after clamping. A tile larger than the
/// canvas pins to 0.
fn clamp_axis(value: f64, extent: f64, limit: f64, grid: Option<i32>) -> f64 {
    let mut max = limit - extent;
    if let Some(grid) = grid {
        let grid = f64::from(grid);
        max = (max / grid).floor() * grid;
    }
    value.min(max).max(0.0)
}

/// Where a tile of `size` lands when dragged to `candidate`
pub fn place_tile(candidate: Point, size: (i32, i32), canvas: CanvasBounds, grid: &GridSettings) -> (i32, i32) {
    let snap = grid.snap_to_grid.then_some(grid.size());
    let (mut x, mut y) = (candidate.x, candidate.y);
    if let Some(g) = snap {
        x = snap_to_grid(x, g);
        y = snap_to_grid(y, g);
    } else {
        x = x.round();
        y = y.round();
    }

    let x = clamp_axis(x, f64::from(size.0), canvas.width, snap);
    let y = clamp_axis(y, f64::from(size.1), canvas.height, snap);
    (x as i32, y as i32)
}
