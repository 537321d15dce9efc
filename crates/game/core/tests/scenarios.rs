use tactics_core::{
    EntityId, GridMap, MapDimensions, MapId, MapRegistry, MovementRules, Pathfinder, Position,
    TerrainKind,
};

fn plain(width: u32, height: u32) -> GridMap {
    GridMap::new(
        MapId(1),
        "plain",
        MapDimensions::new(width, height),
        TerrainKind::Plain,
    )
    .expect("valid dimensions")
}

fn positions(points: &[(i32, i32)]) -> Vec<Position> {
    points.iter().copied().map(Position::from).collect()
}

/// Open 5x5 field: the shortest route is the straight diagonal.
#[test]
fn open_field_diagonal() {
    let map = plain(5, 5);
    let pathfinder = Pathfinder::new(&map, MovementRules::DEFAULT);

    let result = pathfinder.find_path(Position::new(0, 0), Position::new(4, 4), false);

    assert_eq!(
        result.positions(),
        positions(&[(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]).as_slice()
    );
    assert_eq!(result.cost(), 4);
}

/// Same field with a wall in the middle: the diagonal is broken, so the
/// cheapest route takes one extra step around the wall.
#[test]
fn wall_in_the_middle_forces_detour() {
    let mut map = plain(5, 5);
    map.set_terrain(Position::new(2, 2), TerrainKind::Wall)
        .expect("in bounds");
    let pathfinder = Pathfinder::new(&map, MovementRules::DEFAULT);

    let result = pathfinder.find_path(Position::new(0, 0), Position::new(4, 4), false);

    assert_eq!(result.len(), 6);
    assert_eq!(result.cost(), 5);
    assert_eq!(result.start(), Some(Position::new(0, 0)));
    assert_eq!(result.goal(), Some(Position::new(4, 4)));
    assert!(!result.positions().contains(&Position::new(2, 2)));
    assert!(result.positions().windows(2).all(|w| w[0].is_adjacent(w[1])));
}

/// A full-height wall with no gap separates the halves of the map.
#[test]
fn sealed_wall_means_no_path() {
    let map = GridMap::from_glyph_rows(
        MapId(2),
        "sealed",
        &["..#..", "..#..", "..#..", "..#..", "..#.."],
    )
    .expect("valid layout");
    let pathfinder = Pathfinder::new(&map, MovementRules::DEFAULT);

    let result = pathfinder.find_path(Position::new(0, 2), Position::new(4, 2), false);

    assert!(result.is_empty());
    assert_eq!(result.cost(), 0);
}

/// Corner start, budget 2, 8-directional movement: the reachable area is the
/// 3x3 square clipped by the map edge, each cost equal to the Chebyshev
/// distance.
#[test]
fn corner_reachable_square() {
    let map = plain(5, 5);
    let pathfinder = Pathfinder::new(&map, MovementRules::DEFAULT);

    let reach = pathfinder
        .find_reachable(EntityId(1), Position::new(0, 0), 2)
        .expect("valid start");

    assert_eq!(reach.len(), 9);
    for (position, cost) in reach.iter() {
        assert_eq!(cost, position.chebyshev_distance(Position::new(0, 0)));
        assert!(cost <= 2);
    }
}

/// Interior start, budget 2: 8-directional movement covers the full 5x5
/// square, 4-directional movement covers the 13-cell diamond.
#[test]
fn interior_reachable_square_and_diamond() {
    let map = plain(5, 5);
    let center = Position::new(2, 2);

    let square = Pathfinder::new(&map, MovementRules::DEFAULT)
        .find_reachable(EntityId(1), center, 2)
        .expect("valid start");
    assert_eq!(square.len(), 25);

    let diamond = Pathfinder::new(&map, MovementRules::ORTHOGONAL)
        .find_reachable(EntityId(1), center, 2)
        .expect("valid start");
    assert_eq!(diamond.len(), 13);
    for (position, cost) in diamond.iter() {
        assert_eq!(cost, position.manhattan_distance(center));
    }
}

/// Lines always start and end at their endpoints; a degenerate line is one
/// point.
#[test]
fn line_endpoints() {
    let map = plain(8, 8);
    let pathfinder = Pathfinder::new(&map, MovementRules::DEFAULT);

    let same: Vec<_> = pathfinder
        .line_points(Position::new(3, 3), Position::new(3, 3))
        .collect();
    assert_eq!(same, vec![Position::new(3, 3)]);

    let points: Vec<_> = pathfinder
        .line_points(Position::new(1, 6), Position::new(7, 2))
        .collect();
    assert_eq!(points.first(), Some(&Position::new(1, 6)));
    assert_eq!(points.last(), Some(&Position::new(7, 2)));
}

/// Forest screens an archer's line across the field; moving one row down
/// clears it.
#[test]
fn forest_blocks_line_of_sight() {
    let map = GridMap::from_glyph_rows(
        MapId(3),
        "glade",
        &[
            ".......", //
            "...T...",
            ".......",
        ],
    )
    .expect("valid layout");
    let pathfinder = Pathfinder::new(&map, MovementRules::DEFAULT);

    assert_eq!(
        pathfinder.has_line_of_sight(Position::new(0, 1), Position::new(6, 1)),
        Ok(false)
    );
    assert_eq!(
        pathfinder.has_line_of_sight(Position::new(0, 2), Position::new(6, 2)),
        Ok(true)
    );
}

/// Full turn: preview the move range, walk the chosen path, then the old
/// cell is free and the new one is held.
#[test]
fn move_along_found_path() {
    let mut registry = MapRegistry::new();
    let mut map = GridMap::from_glyph_rows(
        MapId(7),
        "bridge",
        &[
            "..~..", //
            "..H..",
            "..~..",
        ],
    )
    .expect("valid layout");
    let knight = EntityId(1);
    map.place_occupant(Position::new(0, 1), knight)
        .expect("plain is passable");
    registry.load(map);

    let (path, reach) = {
        let pathfinder = registry
            .pathfinder(MapId(7), MovementRules::DEFAULT)
            .expect("map loaded");
        let path = pathfinder.find_path(Position::new(0, 1), Position::new(4, 1), false);
        let reach = pathfinder
            .find_reachable(knight, Position::new(0, 1), 4)
            .expect("knight stands on start");
        (path, reach)
    };

    assert_eq!(
        path.positions(),
        positions(&[(0, 1), (1, 1), (2, 1), (3, 1), (4, 1)]).as_slice()
    );
    assert_eq!(reach.cost_to(Position::new(4, 1)), Some(path.cost()));

    let map = registry.get_mut(MapId(7)).expect("map loaded");
    for step in path.positions().windows(2) {
        map.move_occupant(knight, step[0], step[1])
            .expect("path cells are free");
    }

    assert_eq!(map.occupant_position(knight), Some(Position::new(4, 1)));
    assert_eq!(map.occupants().count(), 1);
}
