// プレゼンテーション層 - UI非依存の状態管理

pub mod state;

pub use state::{ComputeState, ComputeStatus};
