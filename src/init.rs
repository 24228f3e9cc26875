use std::sync::OnceLock;

static INIT: OnceLock<()> = OnceLock::new();

/// 初始化日誌；預設等級 info，可用 `RUST_LOG` 覆寫
pub fn init() {
    INIT.get_or_init(|| {
        let env = env_logger::Env::default().default_filter_or("info");
        // 測試或其他呼叫者已設定 logger 時忽略
        let _ = env_logger::Builder::from_env(env)
            .format_timestamp_secs()
            .try_init();
    });
}
