//! Character-grid rendering of a chart, used to show it on the terminal.
//!
//! The grid has a fixed size; the y-axis uses the same bounds as the image,
//! so values outside of them are clamped to the top or bottom row.

use crate::bounds::AxisBounds;
use crate::table::SeriesSlice;

pub const DEFAULT_WIDTH: usize = 72;
pub const DEFAULT_HEIGHT: usize = 20;

const LINE: char = '*';

/// Render the slice as a line on a `width` x `height` grid, below a one-line header.
pub fn render_ascii(
    title: &str,
    slice: &SeriesSlice,
    bounds: &AxisBounds,
    width: usize,
    height: usize,
) -> String {
    let width = width.max(10);
    let height = height.max(5);
    let mut grid = vec![vec![' '; width]; height];

    let x_min = slice.years.first().copied().unwrap_or_default();
    let x_max = slice.years.last().copied().unwrap_or_default();

    for run in slice.runs() {
        let mut prev: Option<(usize, usize)> = None;
        for (year, value) in run {
            let x = map_x(year, x_min, x_max, width);
            let y = map_y(value, bounds, height);
            match prev {
                Some((x0, y0)) => draw_line(&mut grid, x0, y0, x, y),
                None => grid[y][x] = LINE,
            }
            prev = Some((x, y));
        }
    }

    let mut out = format!(
        "{title} | years=[{x_min}, {x_max}] | y=[{:.2}, {:.2}]\n",
        bounds.y_min, bounds.y_max
    );
    for row in grid {
        out.push_str(row.into_iter().collect::<String>().trim_end());
        out.push('\n');
    }
    out
}

fn map_x(year: i32, x_min: i32, x_max: i32, width: usize) -> usize {
    if x_max <= x_min {
        return 0;
    }
    let u = (year - x_min) as f64 / (x_max - x_min) as f64;
    (u.clamp(0.0, 1.0) * (width as f64 - 1.0)).round() as usize
}

fn map_y(value: f64, bounds: &AxisBounds, height: usize) -> usize {
    let u = ((value - bounds.y_min) / (bounds.y_max - bounds.y_min)).clamp(0.0, 1.0);
    // row 0 is the top
    (height as f64 - 1.0 - u * (height as f64 - 1.0)).round() as usize
}

/// Bresenham line between two grid cells
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize) {
    let (mut x0, mut y0) = (x0 as isize, y0 as isize);
    let (x1, y1) = (x1 as isize, y1 as isize);
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        grid[y0 as usize][x0 as usize] = LINE;
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}
