// 確率還元 - 被覆回数を表示用パーセントに変換

use num_traits::{ToPrimitive, Zero};
use serde::{Deserialize, Serialize};

use crate::constants::B;
use crate::domain::board::FixedMask;

use super::engine::SearchOutcome;

/// 1セルの確率表示値
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProbabilityCell {
    /// 固定セル（確率の対象外、中立値）
    Fixed,
    /// 全形状を置ける組み合わせが1つも存在しない
    Impossible,
    /// 被覆確率を四捨五入した整数パーセント（0〜100）
    Chance(u8),
}

/// 探索結果から還元した確率行列
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbabilityGrid {
    cells: Vec<ProbabilityCell>,
    max_percent: u8,
    solvable: bool,
}

impl ProbabilityGrid {
    /// 被覆回数と総数から各自由セルの確率を計算する
    ///
    /// total == 0 のときは自由セルを全てImpossibleにする（エラーではなく
    /// 正当な結果）。それ以外は count/total を最近接整数パーセントへ丸め、
    /// 自由セル全体の最大値も記録する（強調表示用）。
    pub fn reduce(outcome: &SearchOutcome, fixed: &FixedMask) -> Self {
        let mut cells = vec![ProbabilityCell::Fixed; B * B];
        let solvable = !outcome.total.is_zero();
        let mut max_percent: u8 = 0;

        let total = outcome.total.to_f64().unwrap_or(0.0);
        for y in 0..B {
            for x in 0..B {
                if fixed.is_fixed(x, y) {
                    continue;
                }
                cells[y * B + x] = if !solvable {
                    ProbabilityCell::Impossible
                } else {
                    let count = outcome
                        .counts
                        .get(x, y)
                        .and_then(|c| c.to_f64())
                        .unwrap_or(0.0);
                    let percent = (count / total * 100.0).round() as u8;
                    if percent > max_percent {
                        max_percent = percent;
                    }
                    ProbabilityCell::Chance(percent)
                };
            }
        }

        Self {
            cells,
            max_percent,
            solvable,
        }
    }

    /// セルの確率値を取得（範囲外はNone）
    pub fn get(&self, x: usize, y: usize) -> Option<ProbabilityCell> {
        if x >= B || y >= B {
            return None;
        }
        Some(self.cells[y * B + x])
    }

    /// 自由セル全体の最大パーセント
    pub fn max_percent(&self) -> u8 {
        self.max_percent
    }

    /// 完成配置が1件以上あったかチェック
    pub fn is_solvable(&self) -> bool {
        self.solvable
    }
}
