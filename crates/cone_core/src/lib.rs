//! Cone Core
//!
//! Foundational value types shared by the Cone layout crates:
//!
//! - **Geometry**: `Point`, `Size`, `Rect` with union and overlap tests
//! - **Insets**: `EdgeInsets` for section and container margins
//!
//! # Example
//!
//! ```rust
//! use cone_core::Rect;
//!
//! let left = Rect::new(0.0, 0.0, 100.0, 40.0);
//! let right = Rect::new(110.0, 20.0, 100.0, 60.0);
//! let bounds = left.union(&right);
//! assert_eq!(bounds, Rect::new(0.0, 0.0, 210.0, 80.0));
//!
//! let viewport = Rect::new(0.0, 50.0, 320.0, 480.0);
//! assert!(bounds.intersects(&viewport));
//! assert!(!left.intersects(&viewport));
//! ```

pub mod geometry;

pub use geometry::{EdgeInsets, Point, Rect, Size};
