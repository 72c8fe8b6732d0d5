use flotilla::{AvailabilityGrid, Chain, Coord};

fn chain_of(coords: &[(i32, i32)]) -> Chain {
    let mut chain = Chain::new();
    for &(x, y) in coords {
        chain.push(Coord::new(x, y)).unwrap();
    }
    chain
}

#[test]
fn test_new_grid_is_fully_available() {
    let grid = AvailabilityGrid::new(6, 4);
    for y in 0..4 {
        for x in 0..6 {
            assert!(grid.is_available(Coord::new(x, y)));
        }
    }
}

#[test]
fn test_out_of_bounds_is_never_available() {
    let grid = AvailabilityGrid::new(6, 4);
    assert!(!grid.is_available(Coord::new(-1, 0)));
    assert!(!grid.is_available(Coord::new(0, -1)));
    assert!(!grid.is_available(Coord::new(6, 0)));
    assert!(!grid.is_available(Coord::new(0, 4)));
    assert!(!grid.in_bounds(Coord::new(6, 4)));
}

#[test]
fn test_mark_unavailable_is_idempotent() {
    let mut grid = AvailabilityGrid::new(6, 4);
    grid.mark_unavailable(Coord::new(2, 2));
    grid.mark_unavailable(Coord::new(2, 2));
    assert!(!grid.is_available(Coord::new(2, 2)));
    // Out-of-bounds marks are silently ignored.
    grid.mark_unavailable(Coord::new(-5, 99));
}

#[test]
fn test_mark_ship_with_sticking_marks_only_chain_cells() {
    let mut grid = AvailabilityGrid::new(10, 10);
    let chain = chain_of(&[(3, 3), (4, 3)]);
    grid.mark_ship_unavailable(&chain, true);

    assert!(!grid.is_available(Coord::new(3, 3)));
    assert!(!grid.is_available(Coord::new(4, 3)));
    assert!(grid.is_available(Coord::new(2, 2)));
    assert!(grid.is_available(Coord::new(5, 3)));
    assert!(grid.is_available(Coord::new(3, 4)));
}

#[test]
fn test_mark_ship_without_sticking_blocks_neighborhood() {
    let mut grid = AvailabilityGrid::new(10, 10);
    let chain = chain_of(&[(3, 3), (4, 3)]);
    grid.mark_ship_unavailable(&chain, false);

    // The ship and its full 8-neighborhood are gone.
    for x in 2..=5 {
        for y in 2..=4 {
            assert!(!grid.is_available(Coord::new(x, y)), "({}, {})", x, y);
        }
    }
    // One cell further out is still free.
    assert!(grid.is_available(Coord::new(1, 3)));
    assert!(grid.is_available(Coord::new(6, 3)));
    assert!(grid.is_available(Coord::new(3, 5)));
}

#[test]
fn test_neighborhood_clips_at_grid_edge() {
    let mut grid = AvailabilityGrid::new(5, 5);
    let chain = chain_of(&[(0, 0)]);
    grid.mark_ship_unavailable(&chain, false);

    assert!(!grid.is_available(Coord::new(0, 0)));
    assert!(!grid.is_available(Coord::new(1, 1)));
    assert!(grid.is_available(Coord::new(2, 2)));
}
