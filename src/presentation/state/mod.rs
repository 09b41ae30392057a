// 状態管理モジュール

pub mod compute;

pub use compute::{ComputeState, ComputeStatus};
