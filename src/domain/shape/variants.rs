// VariantSet型 - 形状の90度回転バリアント集合

use serde::{Deserialize, Serialize};

use super::matrix::Shape;

/// 1つの形状から得られる幾何的に異なる回転バリアントの集合
///
/// 不変条件: 1 ≤ 要素数 ≤ 4。完全な回転対称形（正方形など）は1個、
/// 180度対称形（S字など）は2個、非対称形は4個になる。
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantSet {
    variants: Vec<Shape>,
}

impl VariantSet {
    /// 形状を90度ずつ4回回転し、構造的に同一の行列を除いて集める
    pub fn of(shape: &Shape) -> Self {
        let mut variants: Vec<Shape> = Vec::with_capacity(4);
        let mut current = shape.clone();
        for _ in 0..4 {
            current = current.rotate90();
            if !variants.contains(&current) {
                variants.push(current.clone());
            }
        }
        Self { variants }
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.variants.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Shape> {
        self.variants.get(index)
    }

    /// どの向きでもマーク数は変わらない
    pub fn area(&self) -> usize {
        self.variants.first().map(|s| s.area()).unwrap_or(0)
    }
}
