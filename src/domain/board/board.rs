// Board型 - B×Bの占有状態

use crate::constants::B;
use crate::domain::shape::Shape;

use super::fixed::FixedMask;

/// 配置先盤面の占有状態（探索の再帰中にのみ変異する）
///
/// 不変条件: placeとunplaceは必ず対で呼ばれ、探索から戻った時点で
/// 盤面は呼び出し前とビット単位で一致する。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [bool; B * B],
}

impl Board {
    /// 新しい空の盤面を作成
    pub fn new() -> Self {
        Self {
            cells: [false; B * B],
        }
    }

    /// セルが占有済みかチェック（範囲外はfalse）
    pub fn occupied(&self, x: usize, y: usize) -> bool {
        if x >= B || y >= B {
            return false;
        }
        self.cells[y * B + x]
    }

    /// 全セルが空かチェック
    pub fn is_clear(&self) -> bool {
        self.cells.iter().all(|&c| !c)
    }

    /// 形状を(top, left)に置けるかチェック
    ///
    /// 全マークセルが盤面内に収まり、占有済みセルとも固定セルとも
    /// 重ならないときのみtrue。
    pub fn can_place(&self, fixed: &FixedMask, shape: &Shape, top: usize, left: usize) -> bool {
        let (h, w) = shape.dims();
        if top + h > B || left + w > B {
            return false;
        }
        for y in 0..h {
            for x in 0..w {
                if !shape.is_filled(x, y) {
                    continue;
                }
                let (bx, by) = (left + x, top + y);
                if self.cells[by * B + bx] || fixed.is_fixed(bx, by) {
                    return false;
                }
            }
        }
        true
    }

    /// 形状のマークセルを占有済みにする
    pub fn place(&mut self, shape: &Shape, top: usize, left: usize) {
        let (h, w) = shape.dims();
        debug_assert!(top + h <= B && left + w <= B, "配置が盤面外");
        for y in 0..h {
            for x in 0..w {
                if shape.is_filled(x, y) {
                    let idx = (top + y) * B + (left + x);
                    debug_assert!(!self.cells[idx], "占有済みセルへの配置");
                    self.cells[idx] = true;
                }
            }
        }
    }

    /// placeで占有したセルを正確に元に戻す
    pub fn unplace(&mut self, shape: &Shape, top: usize, left: usize) {
        let (h, w) = shape.dims();
        debug_assert!(top + h <= B && left + w <= B, "解除が盤面外");
        for y in 0..h {
            for x in 0..w {
                if shape.is_filled(x, y) {
                    let idx = (top + y) * B + (left + x);
                    debug_assert!(self.cells[idx], "未占有セルの解除");
                    self.cells[idx] = false;
                }
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
