use super::*;
use crate::domain::materials::{Material, MaterialTable};
use crate::domain::vec2::Vec2;
use crate::util::random::seeded;

fn particle(material: Material) -> Particle {
    let table = MaterialTable::builtin();
    Particle::new(material, table.get(material), &mut seeded(1))
}

#[test]
fn out_of_bounds_reads_are_empty_and_writes_rejected() {
    let mut grid = Grid::new(4, 3).unwrap();
    assert!(grid.get(-1, 0).is_none());
    assert!(grid.get(4, 0).is_none());
    assert!(grid.get(0, 3).is_none());
    assert!(!grid.is_empty(-1, 0));
    assert!(!grid.set(4, 0, Some(particle(Material::Sand))));
    assert!(grid.insert(0, -1, particle(Material::Sand)).is_err());
    assert!(grid.take(9, 9).is_none());
    assert_eq!(grid.particle_count(), 0);
}

#[test]
fn linear_index_is_row_major() {
    let grid = Grid::new(5, 4).unwrap();
    assert_eq!(grid.index(0, 0), Some(0));
    assert_eq!(grid.index(4, 0), Some(4));
    assert_eq!(grid.index(0, 1), Some(5));
    assert_eq!(grid.index(3, 2), Some(13));
    assert_eq!(grid.coords(13), (3, 2));
    assert_eq!(grid.index(5, 0), None);
}

#[test]
fn insert_refuses_occupied_cells() {
    let mut grid = Grid::new(3, 3).unwrap();
    assert!(grid.insert(1, 1, particle(Material::Sand)).is_ok());
    let back = grid.insert(1, 1, particle(Material::Water)).unwrap_err();
    assert_eq!(back.material, Material::Water);
    assert_eq!(grid.material_at(1, 1), Some(Material::Sand));
    assert_eq!(grid.particle_count(), 1);
}

#[test]
fn move_transfers_ownership() {
    let mut grid = Grid::new(3, 3).unwrap();
    grid.set(0, 0, Some(particle(Material::Sand)));
    assert!(grid.move_particle(0, 0, 2, 2));
    assert!(grid.get(0, 0).is_none());
    assert_eq!(grid.material_at(2, 2), Some(Material::Sand));
    assert!(grid.column_is_empty(0));
    assert!(!grid.column_is_empty(2));

    // destination occupied
    grid.set(1, 1, Some(particle(Material::Stone)));
    assert!(!grid.move_particle(1, 1, 2, 2));
    assert_eq!(grid.particle_count(), 2);
    assert_eq!(grid.count_occupied(), 2);
}

#[test]
fn swap_keeps_count_and_column_tallies() {
    let mut grid = Grid::new(3, 3).unwrap();
    grid.set(0, 2, Some(particle(Material::Sand)));
    grid.set(1, 2, Some(particle(Material::Water)));
    assert!(grid.swap(0, 2, 1, 2));
    assert_eq!(grid.material_at(0, 2), Some(Material::Water));
    assert_eq!(grid.material_at(1, 2), Some(Material::Sand));

    assert!(grid.swap(1, 2, 2, 0));
    assert!(grid.column_is_empty(1));
    assert!(!grid.column_is_empty(2));
    assert_eq!(grid.particle_count(), 2);

    assert!(!grid.swap(0, 0, 3, 0));
}

#[test]
fn reset_updated_clears_every_flag() {
    let mut grid = Grid::new(2, 2).unwrap();
    for (x, y) in [(0, 0), (1, 1)] {
        let mut p = particle(Material::Sand);
        p.updated = true;
        grid.set(x, y, Some(p));
    }
    grid.reset_updated();
    assert!(grid.cells().iter().flatten().all(|p| !p.updated));
}

#[test]
fn surrounding_flow_sums_matching_neighbors() {
    let mut grid = Grid::new(3, 3).unwrap();
    let mut right = particle(Material::Water);
    right.velocity = Vec2::new(2.5, 0.0);
    let mut left = particle(Material::Water);
    left.velocity = Vec2::new(-1.0, 0.0);
    let mut oil = particle(Material::Oil);
    oil.velocity = Vec2::new(9.0, 0.0);

    grid.set(0, 0, Some(right));
    grid.set(2, 2, Some(left));
    grid.set(1, 0, Some(oil));
    // the center itself is not a neighbor
    grid.set(1, 1, Some(particle(Material::Water)));

    assert!((grid.surrounding_flow(1, 1, Material::Water) - 1.5).abs() < 1e-6);
    assert!((grid.surrounding_flow(1, 1, Material::Oil) - 9.0).abs() < 1e-6);
    assert_eq!(grid.surrounding_flow(0, 0, Material::Sand), 0.0);
}

#[test]
fn clear_drops_everything() {
    let mut grid = Grid::new(4, 4).unwrap();
    grid.set(0, 0, Some(particle(Material::Sand)));
    grid.set(3, 3, Some(particle(Material::Stone)));
    grid.clear();
    assert_eq!(grid.particle_count(), 0);
    assert_eq!(grid.count_occupied(), 0);
    assert!((0..4).all(|x| grid.column_is_empty(x)));
}

#[test]
fn oversized_grids_are_rejected() {
    assert!(matches!(
        Grid::new(u32::MAX, 1),
        Err(SimError::GridTooLarge { width: u32::MAX, height: 1 })
    ));
    // Fits in i32 per axis, but the cell buffer does not fit in memory
    let side = i32::MAX as u32;
    assert!(matches!(Grid::new(side, side), Err(SimError::GridTooLarge { .. })));

    let empty = Grid::new(0, 0).unwrap();
    assert_eq!(empty.size(), 0);
    assert!(empty.get(0, 0).is_none());
}
