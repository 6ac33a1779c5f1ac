use std::env;

static LOGGER: SimpleLogger = SimpleLogger;

/// Installs the stderr logger, level taken from `ICON_LOG` (defaults to `warn`)
pub fn init() {
    let level = env::var("ICON_LOG")
        .ok()
        .and_then(|value| value.parse::<log::LevelFilter>().ok())
        .unwrap_or(log::LevelFilter::Warn);

    if let Ok(()) = log::set_logger(&LOGGER) {
        log::set_max_level(level);
    }
}

struct SimpleLogger;

impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record<'_>) {
        if self.enabled(record.metadata()) {
            let target = if record.target().is_empty() {
                record.module_path().unwrap_or_default()
            } else {
                record.target()
            };

            eprintln!("[{}] {}: {}", record.level(), target, record.args());
        }
    }

    fn flush(&self) {}
}
