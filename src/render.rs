//! Turns a finished [`Grid`] into an SVG drawing.
//!
//! The cells are laid out as a uniform lattice of nodes. Live cells are
//! connected to the live cells directly above them, dangling cells get a
//! marker dot, and the rule itself is drawn as a legend of filled and
//! hollow circles beneath the grid.

use crate::Cell;
use crate::grid::Grid;
use crate::rule::RuleTable;
use crate::svg::Canvas;

/// Cells per generation of the rendered run.
pub const GRID_WIDTH: usize = 100;

/// Number of generations of the rendered run.
pub const GRID_HEIGHT: usize = 120;

/// Horizontal margin, in node-grid units. Keeps the lattice off the edges.
const LEFT_RIGHT_PAD: usize = 10;

/// Vertical margin, in node-grid units. Leaves room for the legend.
const TOP_BOTTOM_PAD: usize = 20;

/// Points (pt) between nodes on the same row.
const WIDTH_STEP: f32 = 15.0;

/// Points (pt) between nodes on the same column.
const HEIGHT_STEP: f32 = 15.0;

const MARKER_RADIUS: f32 = 4.0;

/// Node positions for a grid of the given dimensions.
///
/// Canvas size is a direct function of the grid dimensions and the fixed
/// spacing constants. There is no auto-fit pass.
pub struct Layout {
    columns: usize,
    rows: usize,
}

impl Layout {
    pub fn for_grid(grid: &Grid) -> Self {
        Self {
            columns: grid.width(),
            rows: grid.height(),
        }
    }

    pub fn canvas_width(&self) -> f32 {
        (self.columns - 1 + LEFT_RIGHT_PAD * 2) as f32 * WIDTH_STEP
    }

    pub fn canvas_height(&self) -> f32 {
        (self.rows - 1 + TOP_BOTTOM_PAD * 2) as f32 * HEIGHT_STEP
    }

    /// Center of the node for cell `(i, j)`.
    pub fn node(&self, i: usize, j: usize) -> (f32, f32) {
        (
            (j + LEFT_RIGHT_PAD) as f32 * WIDTH_STEP,
            (i + TOP_BOTTOM_PAD) as f32 * HEIGHT_STEP,
        )
    }
}

/// Draw the full image: background, links, markers and legend.
///
/// Pure with respect to I/O; the caller decides where the canvas goes.
pub fn render(grid: &Grid, rules: &RuleTable) -> Canvas {
    let layout = Layout::for_grid(grid);

    let mut canvas = Canvas::new(layout.canvas_width(), layout.canvas_height());
    canvas.fill_background("white");

    draw_links(grid, &layout, &mut canvas);
    draw_markers(grid, &layout, &mut canvas);
    draw_legend(rules, &layout, &mut canvas);

    canvas
}

/// Connect each live cell to the live cells directly above it.
///
/// Unlike the automaton itself, drawing does not wrap: no diagonal is drawn
/// across the left or right edge.
fn draw_links(grid: &Grid, layout: &Layout, canvas: &mut Canvas) {
    for i in 0..grid.height().saturating_sub(1) {
        for j in 0..grid.width() {
            if grid.get(i + 1, j) == 0 {
                continue;
            }

            let to = layout.node(i + 1, j);

            if j > 0 && grid.get(i, j - 1) == 1 {
                canvas.line(layout.node(i, j - 1), to);
            }

            if grid.get(i, j) == 1 {
                canvas.line(layout.node(i, j), to);
            }

            if j + 1 < grid.width() && grid.get(i, j + 1) == 1 {
                canvas.line(layout.node(i, j + 1), to);
            }
        }
    }
}

/// Live cells in the window `[j - 1, j + 2)` of row `i`, clamped to bounds.
fn live_in_window(grid: &Grid, i: usize, j: usize) -> u32 {
    let lo = j.saturating_sub(1);
    let hi = (j + 2).min(grid.width());

    grid.row(i)[lo..hi].iter().map(|&c| u32::from(c)).sum()
}

/// Live cells in the rows adjacent to `(i, j)`, over the clamped 3-column
/// window. Only the rows strictly above and below count; neighbors within
/// the same generation do not.
fn adjacent_row_neighbors(grid: &Grid, i: usize, j: usize) -> u32 {
    let above = if i > 0 { live_in_window(grid, i - 1, j) } else { 0 };
    let below = if i + 1 < grid.height() {
        live_in_window(grid, i + 1, j)
    } else {
        0
    };

    above + below
}

/// Mark live cells with exactly one live neighbor above/below.
///
/// Their single line segment would otherwise read as a dangling stub.
fn draw_markers(grid: &Grid, layout: &Layout, canvas: &mut Canvas) {
    for i in 0..grid.height() {
        for j in 0..grid.width() {
            if grid.get(i, j) == 0 {
                continue;
            }

            if adjacent_row_neighbors(grid, i, j) == 1 {
                canvas.circle(layout.node(i, j), MARKER_RADIUS, true);
            }
        }
    }
}

/// Draw the rule legend: for each of the 8 entries, the three input cells
/// on top and the output cell below, filled circles for live bits. Entries
/// run left to right in decreasing significance, centered under the grid.
fn draw_legend(rules: &RuleTable, layout: &Layout, canvas: &mut Canvas) {
    let radius = 0.85 * WIDTH_STEP;
    let space = 10.0 * radius;
    let circle_pad = 2.5 * radius;

    // Legend width rounded to whole node-grid units, to center it on the
    // same lattice as the cells.
    let width = ((7.0 * space + 2.0 * circle_pad + radius) / WIDTH_STEP).round();
    let x0 = ((layout.columns + 2 * LEFT_RIGHT_PAD) as f32 - width) / 2.0 * WIDTH_STEP;
    let y0 = layout.canvas_height() - TOP_BOTTOM_PAD as f32 * 0.7 * HEIGHT_STEP;

    for (entry, &bit) in rules.entries().iter().enumerate() {
        // Entry 0 encodes configuration 111, entry 7 configuration 000.
        let config = 7 - entry as Cell;
        let x = x0 + entry as f32 * space;

        canvas.circle((x, y0), radius, config & 0b100 != 0);
        canvas.circle((x + circle_pad, y0), radius, config & 0b010 != 0);
        canvas.circle((x + 2.0 * circle_pad, y0), radius, config & 0b001 != 0);

        canvas.circle((x + circle_pad, y0 + circle_pad), radius, bit == 1);
    }
}
