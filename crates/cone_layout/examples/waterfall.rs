//! Waterfall Feed Demo
//!
//! Lays out a photo feed with a featured row and prints which tiles are
//! visible as the viewport scrolls.
//!
//! Run with: RUST_LOG=cone_layout=trace cargo run -p cone_layout --example waterfall

use anyhow::Result;
use cone_core::{EdgeInsets, Rect, Size};
use cone_layout::{
    ContainerBounds, ElementKind, IndexPath, LayoutConfig, MasonryLayout, PlacementPolicy,
    SectionConfig, SectionOverrides,
};

const PHOTOS: [(f32, f32); 8] = [
    (1080.0, 1350.0),
    (1080.0, 1080.0),
    (1920.0, 1080.0),
    (1080.0, 1920.0),
    (1200.0, 900.0),
    (900.0, 1200.0),
    (1080.0, 1350.0),
    (1600.0, 1600.0),
];

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = LayoutConfig::default()
        .with_scale(3.0)
        .with_defaults(
            SectionConfig::new()
                .with_column_spacing(6.0)
                .with_item_spacing(6.0)
                .with_inset(EdgeInsets::symmetric(8.0, 8.0)),
        );
    let layout = MasonryLayout::new(config)?;

    let overrides = SectionOverrides::new()
        .with_column_count(|section| if section == 0 { 1 } else { 2 })
        .with_header_height(|_| 36.0)
        .with_footer_height(|section| if section == 1 { 48.0 } else { 0.0 })
        .with_placement(|section| {
            if section == 0 {
                PlacementPolicy::LeftToRight
            } else {
                PlacementPolicy::ShortestFirst
            }
        });

    let mut sizes = |path: IndexPath| {
        let (width, height) = PHOTOS[(path.section * 3 + path.item) % PHOTOS.len()];
        Size::new(width, height)
    };

    let bounds = ContainerBounds::new(390.0).with_safe_area(EdgeInsets::new(47.0, 0.0, 34.0, 0.0));
    let result = layout.compute(&bounds, &[1, 24], &overrides, &mut sizes)?;

    let content = result.content_size();
    println!(
        "{} elements, content {}x{}, {} chunks",
        result.len(),
        content.width,
        content.height,
        result.chunk_index().len()
    );

    let screen = 844.0 - 47.0 - 34.0;
    let mut offset = 0.0;
    while offset < content.height {
        let viewport = Rect::new(0.0, offset, bounds.width, screen);
        let visible: Vec<String> = result
            .query(&viewport)
            .iter()
            .map(|placed| match placed.kind {
                ElementKind::Header => format!("H{}", placed.section),
                ElementKind::Footer => format!("F{}", placed.section),
                ElementKind::Item(item) => format!("{}.{}", placed.section, item),
            })
            .collect();
        println!("y={:>6.1}: {}", offset, visible.join(" "));
        offset += screen / 2.0;
    }

    Ok(())
}
