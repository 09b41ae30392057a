// 盤面定数

/// ====== 盤面定数 ======
/// 配置先盤面の一辺（B×B）
pub const B: usize = 6;

/// 入力グリッドの既定の一辺
pub const INPUT_N: usize = 10;
