//! Plain-text view of the pen.

use coop_agent::AgentStore;
use coop_world::{ResourceKind, ResourceLayout};

/// One line per grid row, cells separated by a space.
///
/// `.` is an empty cell, `F`/`W`/`B` a food, water or bath node, `C` a hen.
/// Hens are drawn last and hide whatever they stand on.
pub fn render_ascii(agents: &AgentStore, resources: &ResourceLayout) -> String {
    let grid = agents.grid();
    let mut cells = vec!['.'; grid.cell_count()];

    for kind in ResourceKind::ALL {
        let glyph = match kind {
            ResourceKind::Food  => 'F',
            ResourceKind::Water => 'W',
            ResourceKind::Bath  => 'B',
        };
        for node in resources.of_kind(kind) {
            if let Some(i) = grid.cell_index(node.position) {
                cells[i] = glyph;
            }
        }
    }
    for &pos in &agents.positions {
        if let Some(i) = grid.cell_index(pos) {
            cells[i] = 'C';
        }
    }

    let mut out = String::with_capacity(cells.len() * 2);
    for row in cells.chunks(grid.width.max(1) as usize) {
        for (x, c) in row.iter().enumerate() {
            if x > 0 {
                out.push(' ');
            }
            out.push(*c);
        }
        out.push('\n');
    }
    out
}
