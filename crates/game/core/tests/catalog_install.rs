//! Installing a custom terrain catalog.
//!
//! Lives in its own test binary: the catalog is process-wide and can be
//! installed only once, before the first terrain lookup.
use tactics_core::{
    GridError, GridMap, MapId, MovementRules, Pathfinder, Position, TerrainCatalog, TerrainKind,
    TerrainProfile,
};

/// A catalog where forests are cheap and transparent but roads are pricey.
/// Every rule that reads terrain must follow the installed table.
#[test]
fn installed_catalog_drives_every_query() {
    let catalog = TerrainCatalog::standard()
        .with_profile(TerrainKind::Forest, TerrainProfile::passable(1, 10, 20))
        .with_profile(TerrainKind::Road, TerrainProfile::passable(4, 0, 0))
        .with_profile(TerrainKind::Ice, TerrainProfile::impassable(0, 0).blocking_sight());

    TerrainCatalog::install(catalog).expect("first install succeeds");
    assert_eq!(
        TerrainCatalog::install(TerrainCatalog::standard()),
        Err(GridError::CatalogAlreadyInstalled)
    );
    assert_eq!(TerrainKind::Forest.entry_cost(), Some(1));
    assert!(!TerrainKind::Forest.blocks_sight());
    assert!(!TerrainKind::Ice.is_passable());

    let map = GridMap::from_glyph_rows(
        MapId(1),
        "custom",
        &[
            "=====", //
            ".TTT.",
            "*****",
        ],
    )
    .expect("valid layout");
    let pathfinder = Pathfinder::new(&map, MovementRules::DEFAULT);

    let path = pathfinder.find_path(Position::new(0, 1), Position::new(4, 1), false);
    assert_eq!(path.cost(), 4);
    assert!(path.positions()[1..4].iter().all(|p| p.y == 1));

    assert_eq!(
        pathfinder.has_line_of_sight(Position::new(0, 1), Position::new(4, 1)),
        Ok(true)
    );
    assert_eq!(
        pathfinder.has_line_of_sight(Position::new(0, 2), Position::new(4, 2)),
        Ok(false)
    );
}
