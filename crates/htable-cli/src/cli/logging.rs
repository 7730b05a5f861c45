use log::LevelFilter;

/// Install the env_logger backend. Call once, before any logging.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` raises the level to debug.
pub fn init(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(default_level);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.format_timestamp(None).target(env_logger::Target::Stderr);
    builder.init();
}
