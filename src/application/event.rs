// 計算イベント定義（UI層に依存しない）

use num_bigint::BigUint;

use crate::search::probability::ProbabilityGrid;

/// 1回の計算リクエストの成果物
///
/// 中断されずに完走したリクエストに対してのみ、ちょうど1回配送される。
#[derive(Clone, Debug)]
pub struct ComputeOutput {
    /// 自由セルごとの確率行列
    pub probabilities: ProbabilityGrid,
    /// 完成配置の総数
    pub total_placements: BigUint,
    /// 訪問した探索ノード数
    pub nodes_searched: u64,
    /// 探索の経過時間（秒）
    pub elapsed_seconds: f64,
}

/// ワーカースレッドからコントローラへのイベント
#[derive(Clone, Debug)]
pub enum ComputeEvent {
    /// ログメッセージ
    Log(String),
    /// 計算完了（中断された計算からは送られない）
    Finished(ComputeOutput),
}
