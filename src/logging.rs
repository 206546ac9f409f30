use tracing_subscriber::EnvFilter;

/// ログ出力を初期化する
///
/// 標準出力はJSON出力に使うため、ログは標準エラーに出す。
/// `RUST_LOG` が設定されていればそれを優先する。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    // テストなどで二重に初期化された場合は無視する
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
