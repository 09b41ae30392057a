// 形状関連のドメイン層 - ポリオミノ形状

pub mod extract;
pub mod matrix;
pub mod variants;

pub use extract::{extract_shapes, extract_variant_sets};
pub use matrix::Shape;
pub use variants::VariantSet;
