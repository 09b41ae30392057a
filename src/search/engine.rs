// 配置列挙エンジン - バックトラッキングによる全数探索

use std::sync::atomic::{AtomicBool, Ordering};

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::constants::B;
use crate::domain::board::{Board, CountGrid, FixedMask};
use crate::domain::shape::VariantSet;
use crate::vlog;

/// 1回の探索の最終出力
#[derive(Clone, Debug)]
pub struct SearchOutcome {
    /// 自由セルごとの被覆回数
    pub counts: CountGrid,
    /// 完成配置の総数
    pub total: BigUint,
    /// 訪問した探索ノード数
    pub nodes: u64,
}

/// 全形状の配置の全組み合わせを数え上げる
///
/// 中断フラグが立てられずに完走した場合のみ結果を返す。中断された
/// 探索の途中集計は未定義として破棄する（Noneを返す）。
pub fn run_search(
    blocks: &[VariantSet],
    fixed: &FixedMask,
    abort: &AtomicBool,
) -> Option<SearchOutcome> {
    let mut board = Board::new();
    let mut counts = CountGrid::new();
    let mut nodes: u64 = 0;

    let total = enumerate(blocks, 0, &mut board, fixed, &mut counts, abort, &mut nodes);
    debug_assert!(board.is_clear(), "探索後に盤面へマークが残った");

    if abort.load(Ordering::Relaxed) {
        vlog!("探索を中断: nodes={}", nodes);
        return None;
    }

    vlog!("探索完了: total={} / nodes={}", total, nodes);
    Some(SearchOutcome {
        counts,
        total,
        nodes,
    })
}

/// index番目以降の形状を置く組み合わせ数を返す再帰本体
///
/// 列挙順はバリアント順→top昇順→left昇順。最終集計は順序に依存しない。
/// placeとunplaceはどの経路でも対になり、戻り時に盤面は復元される。
fn enumerate(
    blocks: &[VariantSet],
    index: usize,
    board: &mut Board,
    fixed: &FixedMask,
    counts: &mut CountGrid,
    abort: &AtomicBool,
    nodes: &mut u64,
) -> BigUint {
    if abort.load(Ordering::Relaxed) {
        return BigUint::zero();
    }
    *nodes += 1;

    if index == blocks.len() {
        // 全形状を置けた: 被覆された自由セルを集計して1件と数える
        counts.tally(board, fixed);
        return BigUint::one();
    }

    let mut total = BigUint::zero();
    for shape in blocks[index].iter() {
        let (h, w) = shape.dims();
        if h > B || w > B {
            // この向きでは盤面に収まらない
            continue;
        }
        for top in 0..=(B - h) {
            for left in 0..=(B - w) {
                if board.can_place(fixed, shape, top, left) {
                    board.place(shape, top, left);
                    let sub = enumerate(blocks, index + 1, board, fixed, counts, abort, nodes);
                    board.unplace(shape, top, left);
                    total += sub;
                }
            }
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::INPUT_N;
    use crate::domain::grid::BinaryGrid;
    use crate::domain::shape::{extract_variant_sets, Shape, VariantSet};

    fn no_abort() -> AtomicBool {
        AtomicBool::new(false)
    }

    fn variant_sets_of(rows_list: &[&[&[u8]]]) -> Vec<VariantSet> {
        rows_list
            .iter()
            .map(|rows| VariantSet::of(&Shape::from_rows(rows).unwrap()))
            .collect()
    }

    #[test]
    fn empty_sequence_has_one_empty_placement() {
        let abort = no_abort();
        let outcome = run_search(&[], &FixedMask::empty(), &abort).unwrap();
        assert_eq!(outcome.total, BigUint::from(1u32));
        assert!(outcome.counts.is_all_zero());
    }

    #[test]
    fn single_monomino_covers_every_cell_once() {
        let blocks = variant_sets_of(&[&[&[1]]]);
        let abort = no_abort();
        let outcome = run_search(&blocks, &FixedMask::empty(), &abort).unwrap();
        assert_eq!(outcome.total, BigUint::from(36u32));
        for y in 0..B {
            for x in 0..B {
                assert_eq!(outcome.counts.get(x, y), Some(&BigUint::from(1u32)));
            }
        }
    }

    #[test]
    fn single_domino_on_empty_board() {
        // 2方向 × 各30オフセット = 60通り
        let blocks = variant_sets_of(&[&[&[1, 1]]]);
        let abort = no_abort();
        let outcome = run_search(&blocks, &FixedMask::empty(), &abort).unwrap();
        assert_eq!(outcome.total, BigUint::from(60u32));

        // 角は2通り、辺は3通り、内部は4通りの配置に被覆される
        assert_eq!(outcome.counts.get(0, 0), Some(&BigUint::from(2u32)));
        assert_eq!(outcome.counts.get(2, 0), Some(&BigUint::from(3u32)));
        assert_eq!(outcome.counts.get(0, 3), Some(&BigUint::from(3u32)));
        assert_eq!(outcome.counts.get(2, 3), Some(&BigUint::from(4u32)));
    }

    #[test]
    fn conservation_law_holds() {
        // Σ counts = total × Σ 形状面積
        let blocks = variant_sets_of(&[&[&[1]], &[&[1]]]);
        let abort = no_abort();
        let outcome = run_search(&blocks, &FixedMask::empty(), &abort).unwrap();
        assert_eq!(outcome.total, BigUint::from(36u32 * 35));
        let area_sum: usize = blocks.iter().map(|b| b.area()).sum();
        assert_eq!(
            outcome.counts.sum(),
            outcome.total.clone() * BigUint::from(area_sum)
        );
    }

    #[test]
    fn oversized_shape_yields_zero_total() {
        // 1×7はどの向きでも6×6に収まらない
        let blocks = variant_sets_of(&[&[&[1, 1, 1, 1, 1, 1, 1]]]);
        let abort = no_abort();
        let outcome = run_search(&blocks, &FixedMask::empty(), &abort).unwrap();
        assert_eq!(outcome.total, BigUint::zero());
        assert!(outcome.counts.is_all_zero());
    }

    #[test]
    fn fixed_cells_never_increase_total() {
        let blocks = variant_sets_of(&[&[&[1, 1]]]);
        let abort = no_abort();
        let base = run_search(&blocks, &FixedMask::empty(), &abort).unwrap();

        let mut grid = BinaryGrid::new(B).unwrap();
        grid.set(0, 0, 1).unwrap();
        let fixed = FixedMask::from_grid(&grid).unwrap();
        let reduced = run_search(&blocks, &fixed, &abort).unwrap();

        // (0,0)を覆う2通りが消える
        assert_eq!(reduced.total, BigUint::from(58u32));
        assert!(reduced.total <= base.total);
        assert_eq!(reduced.counts.get(0, 0), Some(&BigUint::zero()));
    }

    #[test]
    fn extraction_feeds_search() {
        let mut grid = BinaryGrid::new(INPUT_N).unwrap();
        grid.set(0, 0, 1).unwrap();
        grid.set(1, 0, 1).unwrap();
        let blocks = extract_variant_sets(&grid);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].len(), 2);

        let abort = no_abort();
        let outcome = run_search(&blocks, &FixedMask::empty(), &abort).unwrap();
        assert_eq!(outcome.total, BigUint::from(60u32));
    }

    #[test]
    fn enumerate_restores_caller_board_bit_identical() {
        // 既にマークのある盤面から呼んでも、戻り時に完全に復元される
        let blocks = variant_sets_of(&[&[&[1, 1]], &[&[1]]]);
        let fixed = FixedMask::empty();
        let mut board = Board::new();
        let square = Shape::from_rows(&[&[1, 1], &[1, 1]]).unwrap();
        board.place(&square, 2, 2);
        let before = board.clone();

        let mut counts = CountGrid::new();
        let mut nodes = 0u64;
        let abort = no_abort();
        let _ = enumerate(&blocks, 0, &mut board, &fixed, &mut counts, &abort, &mut nodes);
        assert_eq!(board, before);
    }

    #[test]
    fn preset_abort_returns_none() {
        let blocks = variant_sets_of(&[&[&[1]]]);
        let abort = AtomicBool::new(true);
        assert!(run_search(&blocks, &FixedMask::empty(), &abort).is_none());
    }

    #[test]
    fn exact_tiling_of_small_region() {
        // 2×2正方形2個と固定セルで6×6を狭めた完全被覆の検算:
        // 左上の2×4だけを自由に残すと、正方形2個の置き方は
        // (順序付きで) 2通りになる
        let mut grid = BinaryGrid::new(B).unwrap();
        for y in 0..B {
            for x in 0..B {
                let free = y < 2 && x < 4;
                if !free {
                    grid.set(x, y, 1).unwrap();
                }
            }
        }
        let fixed = FixedMask::from_grid(&grid).unwrap();
        let blocks = variant_sets_of(&[&[&[1, 1], &[1, 1]], &[&[1, 1], &[1, 1]]]);
        let abort = no_abort();
        let outcome = run_search(&blocks, &fixed, &abort).unwrap();
        assert_eq!(outcome.total, BigUint::from(2u32));
        // 完全被覆なので自由セルは全てtotal回覆われる
        for y in 0..2 {
            for x in 0..4 {
                assert_eq!(outcome.counts.get(x, y), Some(&BigUint::from(2u32)));
            }
        }
    }
}
