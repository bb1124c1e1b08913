use std::sync::Once;

static INIT: Once = Once::new();

pub fn init_logging() {
    INIT.call_once(|| {
        let level = std::env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string())
            .parse::<log::LevelFilter>()
            .unwrap_or(log::LevelFilter::Info);

        let _ = fern::Dispatch::new()
            .level(level)
            .format(|out, message, record| {
                out.finish(format_args!(
                    "{} | {:<5} | {} | {}",
                    chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                    record.level(),
                    record.target(),
                    message
                ))
            })
            .chain(std::io::stdout())
            .apply();
    });
}
