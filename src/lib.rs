// テトリス配置確率総当たり - ライブラリモジュール

pub mod constants;
pub mod domain;         // ドメイン層
pub mod search;         // 探索層
pub mod application;    // アプリケーション層
pub mod presentation;   // プレゼンテーション層
pub mod logging;

// 外部クレートの再エクスポート
pub use anyhow::{anyhow, Context, Result};
pub use num_bigint::BigUint;
pub use num_traits::{One, ToPrimitive, Zero};

// 主要な型を再エクスポート
pub use application::{ComputeEvent, ComputeOutput, ComputeService};
pub use constants::{B, INPUT_N};
pub use domain::board::{Board, CountGrid, FixedMask};
pub use domain::grid::BinaryGrid;
pub use domain::shape::{extract_shapes, extract_variant_sets, Shape, VariantSet};
pub use search::engine::{run_search, SearchOutcome};
pub use search::probability::{ProbabilityCell, ProbabilityGrid};
