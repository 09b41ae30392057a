// ドメイン層 - ビジネスロジックの中核

pub mod board;
pub mod grid;
pub mod shape;

pub use board::{Board, CountGrid, FixedMask};
pub use grid::BinaryGrid;
pub use shape::{extract_shapes, extract_variant_sets, Shape, VariantSet};
