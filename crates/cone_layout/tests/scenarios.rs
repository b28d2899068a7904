//! End-to-end layouts built through the public API

use cone_core::{EdgeInsets, Rect, Size};
use cone_layout::{
    compute_layout, query, ContainerBounds, ElementKind, IndexPath, LayoutConfig, LayoutError,
    MasonryLayout, PlacementPolicy, SectionConfig, SectionOverrides,
};

#[test]
fn two_column_shortest_first() {
    let heights = [100.0, 50.0, 80.0, 30.0];
    let section = SectionConfig::new()
        .with_column_count(2)
        .with_column_spacing(0.0)
        .with_item_spacing(10.0);
    let mut sizes = |path: IndexPath| Size::new(100.0, heights[path.item]);

    let layout = compute_layout(
        &[heights.len()],
        &section,
        &mut sizes,
        &LayoutConfig::default(),
        &ContainerBounds::new(200.0),
    )
    .unwrap();

    let placed: Vec<_> = layout
        .section_items(0)
        .iter()
        .map(|p| (p.frame.x(), p.frame.y(), p.frame.height()))
        .collect();
    assert_eq!(
        placed,
        vec![
            (0.0, 0.0, 100.0),
            (100.0, 0.0, 50.0),
            (100.0, 60.0, 80.0),
            (0.0, 110.0, 30.0),
        ]
    );
    assert_eq!(layout.section(0).unwrap().height(), 140.0);
    assert_eq!(layout.content_size().height, 140.0);

    let first_screen = query(&layout, &Rect::new(0.0, 0.0, 200.0, 55.0));
    let visible: Vec<_> = first_screen.iter().filter_map(|p| p.index_path()).collect();
    assert_eq!(visible, vec![IndexPath::new(0, 0), IndexPath::new(0, 1)]);
}

#[test]
fn header_without_footer() {
    let section = SectionConfig::new()
        .with_column_count(1)
        .with_item_spacing(10.0)
        .with_header_height(40.0)
        .with_inset(EdgeInsets::new(0.0, 0.0, 5.0, 0.0));
    let mut sizes = |_: IndexPath| Size::new(100.0, 60.0);

    let layout = compute_layout(
        &[1],
        &section,
        &mut sizes,
        &LayoutConfig::default(),
        &ContainerBounds::new(100.0),
    )
    .unwrap();

    let header = layout.header(0).unwrap().frame;
    assert_eq!((header.y(), header.max_y()), (0.0, 40.0));
    let item = layout.item_frame(IndexPath::new(0, 0)).unwrap();
    assert_eq!((item.y(), item.max_y()), (40.0, 100.0));
    assert_eq!(layout.section(0).unwrap().height(), 105.0);
    assert_eq!(layout.content_size().height, 105.0);
}

#[test]
fn feed_driven_by_toml_config() {
    let config = LayoutConfig::from_toml_str(
        r#"
        chunk_size = 4

        [defaults]
        column_count = 3
        column_spacing = 8.0
        item_spacing = 8.0
        placement = "left_to_right"

        [defaults.inset]
        left = 12.0
        right = 12.0
        "#,
    )
    .unwrap();
    let layout = MasonryLayout::new(config).unwrap();

    // Featured banner section with one column, then the grid
    let overrides = SectionOverrides::new()
        .with_column_count(|section| if section == 0 { 1 } else { 3 })
        .with_header_height(|section| if section == 1 { 32.0 } else { 0.0 });
    let mut sizes = |path: IndexPath| match path.section {
        0 => Size::new(16.0, 9.0),
        _ => Size::new(1.0, 1.0 + (path.item % 3) as f32 * 0.5),
    };

    let result = layout
        .compute(&ContainerBounds::new(390.0), &[1, 30], &overrides, &mut sizes)
        .unwrap();

    // (390 - 24) = 366 wide banner, 16:9
    let banner = result.item_frame(IndexPath::new(0, 0)).unwrap();
    assert_eq!(banner.width(), 366.0);
    assert!((banner.height() - 366.0 * 9.0 / 16.0).abs() < 1e-3);

    // (366 - 16) / 3 = 116.67, floored
    let grid = result.section(1).unwrap();
    assert_eq!(grid.column_width, 116.0);
    assert_eq!(grid.item_count(), 30);

    let header = result.header(1).unwrap();
    assert_eq!(header.frame.y(), result.section(0).unwrap().bottom);

    // Left-to-right keeps item i in column i % 3
    for (index, placed) in result.section_items(1).iter().enumerate() {
        let column = (index % 3) as f32;
        assert_eq!(placed.frame.x(), 12.0 + column * (116.0 + 8.0));
    }

    // Scrolling down only ever reveals grid items past the banner
    let viewport = Rect::new(0.0, banner.max_y() + 200.0, 390.0, 300.0);
    let hits = result.query(&viewport);
    assert!(!hits.is_empty());
    assert!(hits.iter().all(|p| p.section == 1 && p.kind != ElementKind::Header));
}

#[test]
fn placements_serialize_for_host_snapshots() {
    let section = SectionConfig::new()
        .with_column_count(2)
        .with_footer_height(20.0)
        .with_placement(PlacementPolicy::RightToLeft);
    let mut sizes = |_: IndexPath| Size::new(0.0, 50.0);
    let layout = MasonryLayout::default()
        .compute(&ContainerBounds::new(210.0), &[2], &section, &mut sizes)
        .unwrap();

    let json = serde_json::to_value(layout.placed_items()).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            {
                "section": 0,
                "kind": { "item": 0 },
                "frame": { "origin": { "x": 110.0, "y": 0.0 }, "size": { "width": 100.0, "height": 50.0 } }
            },
            {
                "section": 0,
                "kind": { "item": 1 },
                "frame": { "origin": { "x": 0.0, "y": 0.0 }, "size": { "width": 100.0, "height": 50.0 } }
            },
            {
                "section": 0,
                "kind": "footer",
                "frame": { "origin": { "x": 0.0, "y": 50.0 }, "size": { "width": 210.0, "height": 20.0 } }
            }
        ])
    );
}

#[test]
fn bad_configuration_is_reported_with_its_section() {
    let overrides = SectionOverrides::new().with_item_spacing(|section| {
        if section == 2 {
            -4.0
        } else {
            10.0
        }
    });
    let mut sizes = |_: IndexPath| Size::new(1.0, 1.0);
    let err = MasonryLayout::default()
        .compute(&ContainerBounds::new(320.0), &[3, 3, 3], &overrides, &mut sizes)
        .unwrap_err();

    assert!(matches!(err, LayoutError::NegativeSpacing { .. }));
    assert_eq!(err.section(), Some(2));
}
