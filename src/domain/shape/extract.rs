// 連結成分の抽出 - 入力グリッドから形状を切り出す

use std::collections::VecDeque;

use crate::domain::grid::BinaryGrid;
use crate::vlog;

use super::matrix::Shape;
use super::variants::VariantSet;

/// 4方向の隣接オフセット（斜めは連結とみなさない）
const NEIGHBORS: [(i64, i64); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// 入力グリッドをスキャンし、マーク済みセルの4連結成分ごとに
/// 最小バウンディングボックスの形状を発見順（行優先）で返す
pub fn extract_shapes(grid: &BinaryGrid) -> Vec<Shape> {
    let n = grid.size();
    let mut visited = vec![false; n * n];
    let mut shapes = Vec::new();

    for y in 0..n {
        for x in 0..n {
            if !grid.is_marked(x, y) || visited[y * n + x] {
                continue;
            }

            // 幅優先で連結成分を収集
            let mut queue = VecDeque::new();
            let mut cells: Vec<(usize, usize)> = Vec::new();
            visited[y * n + x] = true;
            queue.push_back((x, y));
            while let Some((cx, cy)) = queue.pop_front() {
                cells.push((cx, cy));
                for (dx, dy) in NEIGHBORS {
                    let nx = cx as i64 + dx;
                    let ny = cy as i64 + dy;
                    if nx < 0 || ny < 0 || nx >= n as i64 || ny >= n as i64 {
                        continue;
                    }
                    let (nx, ny) = (nx as usize, ny as usize);
                    if grid.is_marked(nx, ny) && !visited[ny * n + nx] {
                        visited[ny * n + nx] = true;
                        queue.push_back((nx, ny));
                    }
                }
            }

            // タイトなバウンディングボックスに写す
            let min_x = cells.iter().map(|c| c.0).min().unwrap();
            let min_y = cells.iter().map(|c| c.1).min().unwrap();
            let max_x = cells.iter().map(|c| c.0).max().unwrap();
            let max_y = cells.iter().map(|c| c.1).max().unwrap();
            let height = max_y - min_y + 1;
            let width = max_x - min_x + 1;
            let mut matrix = vec![0u8; height * width];
            for (cx, cy) in cells {
                matrix[(cy - min_y) * width + (cx - min_x)] = 1;
            }
            shapes.push(Shape::from_cells(height, width, matrix));
        }
    }

    vlog!(
        "形状抽出: マーク数={} / 連結成分={}",
        grid.marked_count(),
        shapes.len()
    );
    shapes
}

/// 抽出と回転バリアント展開をまとめて行う（発見順を保つ）
pub fn extract_variant_sets(grid: &BinaryGrid) -> Vec<VariantSet> {
    extract_shapes(grid).iter().map(VariantSet::of).collect()
}
