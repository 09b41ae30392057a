// CountGrid型 - セル被覆回数の集計

use num_bigint::BigUint;
use num_traits::Zero;

use crate::constants::B;

use super::board::Board;
use super::fixed::FixedMask;

/// 完成配置ごとに、被覆された自由セルへ+1を積み上げる集計行列
///
/// 多数の小形状の完成配置数はu64を超えうるため、厳密な整数のまま数える。
/// 1回の探索が排他的に所有し、探索間で共有されない。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountGrid {
    cells: [BigUint; B * B],
}

impl CountGrid {
    /// 全セル0で初期化
    pub fn new() -> Self {
        Self {
            cells: std::array::from_fn(|_| BigUint::zero()),
        }
    }

    /// セルの集計値を取得（範囲外はNone）
    pub fn get(&self, x: usize, y: usize) -> Option<&BigUint> {
        if x >= B || y >= B {
            return None;
        }
        Some(&self.cells[y * B + x])
    }

    /// 完成配置を1件反映する: 占有済みかつ非固定のセルに+1
    pub fn tally(&mut self, board: &Board, fixed: &FixedMask) {
        for y in 0..B {
            for x in 0..B {
                if board.occupied(x, y) && !fixed.is_fixed(x, y) {
                    self.cells[y * B + x] += 1u32;
                }
            }
        }
    }

    /// 全セルの集計値の総和
    pub fn sum(&self) -> BigUint {
        let mut total = BigUint::zero();
        for c in &self.cells {
            total += c;
        }
        total
    }

    /// 全セルが0かチェック
    pub fn is_all_zero(&self) -> bool {
        self.cells.iter().all(|c| c.is_zero())
    }
}

impl Default for CountGrid {
    fn default() -> Self {
        Self::new()
    }
}
