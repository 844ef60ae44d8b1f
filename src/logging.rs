use tracing_subscriber::EnvFilter;

/// `-v` 횟수에 따른 기본 로그 레벨.
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// stderr로 출력하는 fmt 구독자를 설치한다. RUST_LOG가 있으면 그것을 따른다.
/// 이미 설치되어 있으면 조용히 넘어간다.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbose)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
