// 計算サービス - ワーカースレッドの起動・中断・合流

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::thread::{self, JoinHandle};
use std::time::Instant;

use anyhow::{Context, Result};
use crossbeam_channel::Sender;

use crate::domain::board::FixedMask;
use crate::domain::grid::BinaryGrid;
use crate::domain::shape::extract_variant_sets;
use crate::search::engine::run_search;
use crate::search::probability::ProbabilityGrid;
use crate::vlog;

use super::event::{ComputeEvent, ComputeOutput};

/// 計算リクエストを1本のワーカースレッドで実行するサービス
///
/// 同時に走る探索は常に最大1本。新しいリクエストは先行する探索へ
/// 中断を通知し、その終了を待ってから開始する。盤面と集計行列は
/// ワーカーが排他的に所有する。
pub struct ComputeService {
    abort: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
}

impl ComputeService {
    pub fn new() -> Self {
        Self {
            abort: Arc::new(AtomicBool::new(false)),
            worker: None,
        }
    }

    /// 新しい計算を開始する
    ///
    /// 両グリッドはこの時点でスナップショットされ、以後の編集は
    /// この計算に影響しない。先行の計算が実行中なら中断して合流する。
    pub fn request(
        &mut self,
        input: &BinaryGrid,
        board: &BinaryGrid,
        tx: Sender<ComputeEvent>,
    ) -> Result<()> {
        let fixed = FixedMask::from_grid(board).context("盤面グリッドが不正です")?;
        let blocks = extract_variant_sets(input);
        vlog!(
            "計算リクエスト: 形状={} / 固定セル={}",
            blocks.len(),
            fixed.fixed_count()
        );

        self.shutdown_worker();

        let abort = Arc::new(AtomicBool::new(false));
        self.abort = Arc::clone(&abort);
        let handle = thread::spawn(move || {
            let t0 = Instant::now();
            let _ = tx.send(ComputeEvent::Log(format!(
                "探索開始: 形状={} / 固定セル={}",
                blocks.len(),
                fixed.fixed_count()
            )));

            match run_search(&blocks, &fixed, &abort) {
                Some(outcome) => {
                    let probabilities = ProbabilityGrid::reduce(&outcome, &fixed);
                    let output = ComputeOutput {
                        probabilities,
                        total_placements: outcome.total,
                        nodes_searched: outcome.nodes,
                        elapsed_seconds: t0.elapsed().as_secs_f64(),
                    };
                    let _ = tx.send(ComputeEvent::Finished(output));
                }
                None => {
                    // 中断された探索の途中集計は配送しない
                }
            }
        });
        self.worker = Some(handle);
        Ok(())
    }

    /// 実行中の計算を中断し、ワーカーの終了を待つ
    pub fn abort(&mut self) {
        self.shutdown_worker();
    }

    /// ワーカーが実行中かチェック
    pub fn is_running(&self) -> bool {
        self.worker
            .as_ref()
            .map(|h| !h.is_finished())
            .unwrap_or(false)
    }

    fn shutdown_worker(&mut self) {
        if let Some(handle) = self.worker.take() {
            self.abort.store(true, Ordering::Relaxed);
            let _ = handle.join();
        }
    }
}

impl Default for ComputeService {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ComputeService {
    fn drop(&mut self) {
        self.shutdown_worker();
    }
}
