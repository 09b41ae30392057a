// 確率計算のUI状態管理

use crate::application::event::{ComputeEvent, ComputeOutput};
use crate::constants::{B, INPUT_N};
use crate::domain::grid::BinaryGrid;
use anyhow::Result;

/// 計算の実行状態
#[derive(Clone, Debug, PartialEq)]
pub enum ComputeStatus {
    /// 待機中
    Idle,
    /// 実行中
    Running,
    /// 完了
    Completed,
    /// エラー
    Error(String),
}

impl Default for ComputeStatus {
    fn default() -> Self {
        Self::Idle
    }
}

/// 確率計算のUI状態
///
/// 描画面はこの状態を読み取って入力グリッド・盤面グリッド・
/// 確率オーバーレイを表示する。グリッドの編集は古いオーバーレイを
/// ただちに無効化する。
#[derive(Clone, Debug)]
pub struct ComputeState {
    /// 形状の抽出元グリッド
    pub input: BinaryGrid,
    /// 固定セルの指定元グリッド
    pub board: BinaryGrid,
    /// 計算状態
    pub status: ComputeStatus,
    /// 直近の完了結果（確率オーバーレイ）
    pub result: Option<ComputeOutput>,
    /// ワーカーから届いたログ行
    pub log_lines: Vec<String>,
    /// 開始時刻（秒）
    pub started_at: Option<f64>,
    /// 完了時刻（秒）
    pub completed_at: Option<f64>,
}

impl ComputeState {
    pub fn new() -> Self {
        Self {
            input: BinaryGrid::new(INPUT_N).unwrap(),
            board: BinaryGrid::new(B).unwrap(),
            status: ComputeStatus::Idle,
            result: None,
            log_lines: Vec::new(),
            started_at: None,
            completed_at: None,
        }
    }

    /// 入力グリッドのセルを反転（オーバーレイは無効化）
    pub fn toggle_input(&mut self, x: usize, y: usize) -> Result<()> {
        self.input.toggle(x, y)?;
        self.clear_overlay();
        Ok(())
    }

    /// 盤面グリッドのセルを反転（オーバーレイは無効化）
    pub fn toggle_board(&mut self, x: usize, y: usize) -> Result<()> {
        self.board.toggle(x, y)?;
        self.clear_overlay();
        Ok(())
    }

    /// 計算を開始
    pub fn start_compute(&mut self) {
        self.status = ComputeStatus::Running;
        self.result = None;
        self.started_at = Some(current_time_secs());
        self.completed_at = None;
    }

    /// ワーカーからのイベントを反映
    pub fn apply_event(&mut self, event: ComputeEvent) {
        match event {
            ComputeEvent::Log(line) => {
                self.log_lines.push(line);
            }
            ComputeEvent::Finished(output) => {
                self.status = ComputeStatus::Completed;
                self.result = Some(output);
                self.completed_at = Some(current_time_secs());
            }
        }
    }

    /// エラー発生
    pub fn set_error(&mut self, message: String) {
        self.status = ComputeStatus::Error(message);
        self.completed_at = Some(current_time_secs());
    }

    /// 確率オーバーレイを破棄
    pub fn clear_overlay(&mut self) {
        self.result = None;
        if self.status == ComputeStatus::Completed {
            self.status = ComputeStatus::Idle;
        }
    }

    /// リセット
    pub fn reset(&mut self) {
        self.status = ComputeStatus::Idle;
        self.result = None;
        self.log_lines.clear();
        self.started_at = None;
        self.completed_at = None;
    }

    /// 強調表示に使う最大パーセント
    pub fn max_percent(&self) -> u8 {
        self.result
            .as_ref()
            .map(|r| r.probabilities.max_percent())
            .unwrap_or(0)
    }

    /// 実行中かチェック
    pub fn is_running(&self) -> bool {
        matches!(self.status, ComputeStatus::Running)
    }

    /// 完了したかチェック
    pub fn is_completed(&self) -> bool {
        matches!(self.status, ComputeStatus::Completed)
    }

    /// エラーかチェック
    pub fn is_error(&self) -> bool {
        matches!(self.status, ComputeStatus::Error(_))
    }

    /// 経過時間（秒）を取得
    pub fn elapsed_time(&self) -> Option<f64> {
        self.started_at.map(|start| {
            let end = self.completed_at.unwrap_or_else(current_time_secs);
            end - start
        })
    }
}

impl Default for ComputeState {
    fn default() -> Self {
        Self::new()
    }
}

/// 現在時刻を秒で取得
fn current_time_secs() -> f64 {
    use std::time::SystemTime;
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0)
}
