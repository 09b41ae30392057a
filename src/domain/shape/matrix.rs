// Shape型 - 最小バウンディングボックスの0/1行列

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// 1つのポリオミノの1つの向きを表す行列（行優先の平坦配列）
///
/// 不変条件: 1セル以上がマークされ、外周に全0の行・列を持たない。
/// 等価性は構造比較（寸法と全セル値の一致）。
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shape {
    height: usize,
    width: usize,
    cells: Vec<u8>,
}

impl Shape {
    /// 抽出処理用の内部コンストラクタ（タイトな行列を前提とする）
    pub(crate) fn from_cells(height: usize, width: usize, cells: Vec<u8>) -> Self {
        debug_assert_eq!(cells.len(), height * width);
        debug_assert!(cells.iter().any(|&c| c == 1));
        Self {
            height,
            width,
            cells,
        }
    }

    /// 行の並びから構築（外周の全0行・列は切り詰める）
    pub fn from_rows(rows: &[&[u8]]) -> Result<Self> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(anyhow!("形状行列が空です"));
        }
        let width = rows[0].len();
        if rows.iter().any(|r| r.len() != width) {
            return Err(anyhow!("形状行列の行の長さが揃っていません"));
        }

        let mut cells = Vec::with_capacity(rows.len() * width);
        for row in rows {
            for &v in *row {
                if v > 1 {
                    return Err(anyhow!("セル値は0か1: {}", v));
                }
                cells.push(v);
            }
        }

        if !cells.iter().any(|&c| c == 1) {
            return Err(anyhow!("形状にマークされたセルがありません"));
        }

        Ok(Self {
            height: rows.len(),
            width,
            cells,
        }
        .trimmed())
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// (高さ, 幅)
    pub fn dims(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// マーク済みセルの個数
    pub fn area(&self) -> usize {
        self.cells.iter().filter(|&&c| c == 1).count()
    }

    /// 形状内の相対座標がマーク済みかチェック（範囲外はfalse）
    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.cells[y * self.width + x] == 1
    }

    /// 90度回転した形状を返す（(r, c) → (c, rows-1-r)）
    pub fn rotate90(&self) -> Self {
        let (h, w) = (self.height, self.width);
        let mut cells = vec![0u8; w * h];
        for r in 0..h {
            for c in 0..w {
                if self.cells[r * w + c] == 1 {
                    cells[c * h + (h - 1 - r)] = 1;
                }
            }
        }
        Self {
            height: w,
            width: h,
            cells,
        }
        .trimmed()
    }

    /// 外周の全0行・列を切り詰めた形状を返す
    pub fn trimmed(&self) -> Self {
        let (h, w) = (self.height, self.width);
        let row_has_mark = |r: usize| (0..w).any(|c| self.cells[r * w + c] == 1);
        let col_has_mark = |c: usize| (0..h).any(|r| self.cells[r * w + c] == 1);

        let top = match (0..h).find(|&r| row_has_mark(r)) {
            Some(r) => r,
            None => return self.clone(),
        };
        let bottom = (0..h).rev().find(|&r| row_has_mark(r)).unwrap();
        let left = (0..w).find(|&c| col_has_mark(c)).unwrap();
        let right = (0..w).rev().find(|&c| col_has_mark(c)).unwrap();

        let height = bottom - top + 1;
        let width = right - left + 1;
        let mut cells = Vec::with_capacity(height * width);
        for r in top..=bottom {
            for c in left..=right {
                cells.push(self.cells[r * w + c]);
            }
        }

        Self {
            height,
            width,
            cells,
        }
    }
}
