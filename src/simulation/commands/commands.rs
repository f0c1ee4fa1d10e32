use crate::domain::materials::{Material, Phase};
use crate::domain::particle::{Particle, ParticleSnapshot};
use crate::util::{SimError, SimResult};

use super::Simulation;

/// Outcome of a successful spawn stroke
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SpawnReport {
    pub placed: u32,
    /// Cells on the stroke that were occupied or outside the grid
    pub skipped: u32,
}

/// Cells of the Bresenham line from `from` to `to`, both ends included.
/// Error terms are kept in `i64` so any pair of `i32` endpoints is safe.
pub(crate) fn line_points(from: (i32, i32), to: (i32, i32)) -> Vec<(i32, i32)> {
    let (mut x, mut y) = from;
    let (x1, y1) = to;

    let dx = i64::from(x.abs_diff(x1));
    let sx = if x < x1 { 1 } else { -1 };
    let dy = -i64::from(y.abs_diff(y1));
    let sy = if y < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    let mut points = Vec::with_capacity(usize::try_from(dx - dy + 1).unwrap_or(0).min(1024));
    loop {
        points.push((x, y));
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
    points
}

pub(super) fn spawn(
    sim: &mut Simulation,
    material: Material,
    from: (i32, i32),
    to: (i32, i32),
) -> SimResult<SpawnReport> {
    let radius = if sim.table.phase(material) == Phase::SolidStuck {
        sim.config.stuck_brush_radius
    } else {
        0
    };

    // Endpoints far outside the grid only lengthen the walk
    let (w, h) = (sim.grid.width(), sim.grid.height());
    let pad = radius + 1;
    let clip = |(x, y): (i32, i32)| (x.clamp(-pad, w.saturating_add(pad)), y.clamp(-pad, h.saturating_add(pad)));
    let points = line_points(clip(from), clip(to));

    let limit = sim.config.limit_for(sim.grid.size());
    let mut report = SpawnReport::default();
    let r2 = radius * radius;

    for (cx, cy) in points {
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy > r2 {
                    continue;
                }
                let (x, y) = (cx + dx, cy + dy);
                if !sim.grid.is_empty(x, y) {
                    report.skipped += 1;
                    continue;
                }
                if sim.grid.particle_count() >= limit {
                    log::warn!("particle limit {} reached after placing {}", limit, report.placed);
                    return Err(SimError::ParticleLimit {
                        limit,
                        spawned: report.placed as usize,
                    });
                }
                let particle = Particle::new(material, sim.table.get(material), &mut *sim.rng);
                if sim.grid.insert(x, y, particle).is_ok() {
                    report.placed += 1;
                }
            }
        }
    }

    log::debug!("spawned {} {:?} ({} skipped)", report.placed, material, report.skipped);
    Ok(report)
}

pub(super) fn query(sim: &Simulation, x: i32, y: i32) -> Option<ParticleSnapshot> {
    let p = sim.grid.get(x, y)?;
    Some(ParticleSnapshot {
        material: p.material,
        color: p.color,
        phase: sim.table.phase(p.material),
    })
}

pub(super) fn remove_particle(sim: &mut Simulation, x: i32, y: i32) -> bool {
    sim.grid.take(x, y).is_some()
}

pub(super) fn clear(sim: &mut Simulation) {
    log::info!("clearing {} particles", sim.grid.particle_count());
    sim.grid.clear();
    sim.frame = 0;
}
