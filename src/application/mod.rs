// アプリケーション層 - 計算リクエストの実行管理

pub mod event;
pub mod service;

pub use event::{ComputeEvent, ComputeOutput};
pub use service::ComputeService;
