//! Per-cell data handed to a renderer, plus a plain-text renderer
//!
//! A renderer sees, for every cell, either the collapsed tile identity or
//! the size of the cell's current option set.

use crate::algorithm::option_set::OptionSet;
use crate::algorithm::propagation::OptionSets;
use crate::io::configuration::OVERFLOW_OPTIONS_GLYPH;
use crate::spatial::{Grid, Tileset};

/// What a renderer should draw for one cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellView {
    /// Draw this tile
    Tile(usize),
    /// Draw a numeric placeholder with this many remaining options
    Options(usize),
}

/// Renderer view of every cell in index order
pub fn cell_views(grid: &Grid, options: &OptionSets) -> Vec<CellView> {
    grid.cells()
        .iter()
        .enumerate()
        .map(|(index, cell)| match *cell {
            Some(tile) => CellView::Tile(tile),
            None => CellView::Options(options.get(index).map_or(0, OptionSet::count)),
        })
        .collect()
}

/// Render the grid as text, one line per row
///
/// Collapsed cells show their tile glyph, falling back to the last digit of
/// the identity. Uncollapsed cells show their option count, or
/// `OVERFLOW_OPTIONS_GLYPH` above nine.
pub fn render_text(grid: &Grid, options: &OptionSets, tileset: &Tileset) -> String {
    let views = cell_views(grid, options);
    let mut output = String::with_capacity(views.len() + grid.rows());

    for row in views.chunks(grid.cols()) {
        output.extend(row.iter().map(|view| view_glyph(*view, tileset)));
        output.push('\n');
    }

    output
}

/// Render the option count of every cell, collapsed cells shown as `.`
pub fn render_option_counts(grid: &Grid, options: &OptionSets) -> String {
    let views = cell_views(grid, options);
    let mut output = String::with_capacity(views.len() + grid.rows());

    for row in views.chunks(grid.cols()) {
        output.extend(row.iter().map(|view| match *view {
            CellView::Tile(_) => '.',
            CellView::Options(count) => count_glyph(count),
        }));
        output.push('\n');
    }

    output
}

fn view_glyph(view: CellView, tileset: &Tileset) -> char {
    match view {
        CellView::Tile(id) => tileset
            .get(id)
            .and_then(|tile| tile.glyph())
            .unwrap_or_else(|| count_glyph(id % 10)),
        CellView::Options(count) => count_glyph(count),
    }
}

fn count_glyph(count: usize) -> char {
    u32::try_from(count)
        .ok()
        .and_then(|value| char::from_digit(value, 10))
        .unwrap_or(OVERFLOW_OPTIONS_GLYPH)
}
