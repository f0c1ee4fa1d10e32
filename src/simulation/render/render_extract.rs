use crate::domain::color::BG_COLOR;
use crate::domain::materials::MAT_EMPTY;

use super::Simulation;

/// Copy every cell into the packed color and material-id buffers.
/// Empty cells get the background color and id 0.
pub(super) fn extract_colors(sim: &mut Simulation) {
    let cells = sim.grid.cells();
    let render = &mut sim.render;

    for (i, cell) in cells.iter().enumerate() {
        match cell {
            Some(p) => {
                render.colors[i] = p.color.to_abgr();
                render.materials[i] = p.material.id();
            }
            None => {
                render.colors[i] = BG_COLOR;
                render.materials[i] = MAT_EMPTY;
            }
        }
    }
}
