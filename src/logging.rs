use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::Instant;

/// グローバルな詳細ログフラグ
pub static VERBOSE_LOGGING: AtomicBool = AtomicBool::new(false);

struct LogSink {
    file: File,
    opened_at: Instant,
}

/// ログファイルのグローバルハンドル
static LOG_SINK: Mutex<Option<LogSink>> = Mutex::new(None);

/// ログファイルを初期化する（既存の内容は破棄）
pub fn init_log_file(path: &str) -> std::io::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;

    let mut sink = LOG_SINK.lock().unwrap();
    *sink = Some(LogSink {
        file,
        opened_at: Instant::now(),
    });
    Ok(())
}

/// ログを経過秒数つきでファイルに書き込む
pub fn write_log(message: String) {
    if let Ok(mut sink) = LOG_SINK.lock() {
        if let Some(ref mut sink) = *sink {
            let elapsed = sink.opened_at.elapsed().as_secs_f64();
            let _ = writeln!(sink.file, "[{:9.3}] {}", elapsed, message);
            let _ = sink.file.flush();
        }
    }
}

/// 詳細ログを有効にする
pub fn enable_verbose_logging() {
    VERBOSE_LOGGING.store(true, Ordering::Relaxed);
}

/// 詳細ログを無効にする
pub fn disable_verbose_logging() {
    VERBOSE_LOGGING.store(false, Ordering::Relaxed);
}

/// 詳細ログが有効かチェック
pub fn is_verbose() -> bool {
    VERBOSE_LOGGING.load(Ordering::Relaxed)
}

/// 詳細ログ出力マクロ（ファイル出力）
#[macro_export]
macro_rules! vlog {
    ($($arg:tt)*) => {
        if $crate::logging::is_verbose() {
            let message = format!($($arg)*);
            $crate::logging::write_log(message);
        }
    };
}
