use std::fmt::Write;

use noisemap_core::Grid2D;

// One text line per grid row, every cell followed by a space
fn render_rows<T>(grid: &Grid2D<T>, mut cell: impl FnMut(&mut String, &T)) -> String {
    let mut out = String::with_capacity(grid.len() * 6 + grid.height());
    for row in grid.rows() {
        for v in row {
            cell(&mut out, v);
        }
        out.push('\n');
    }
    out
}

// Static noise as right-aligned 3 wide integers
pub fn render_static(grid: &Grid2D<u8>) -> String {
    render_rows(grid, |out, v| {
        let _ = write!(out, "{v:>3} ");
    })
}

// Perlin values with two decimals in 5 wide columns
pub fn render_field(grid: &Grid2D<f64>) -> String {
    render_rows(grid, |out, v| {
        let _ = write!(out, "{v:>5.2} ");
    })
}
