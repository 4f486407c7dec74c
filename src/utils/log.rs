use env_logger::Builder;
use log::LevelFilter;

pub struct Logger;

impl Logger {
    /// colog formatting on top of env_logger; `RUST_LOG` still refines
    /// per-module levels on top of the CLI level.
    pub fn init(level: LevelFilter) {
        let mut builder: Builder = colog::default_builder();
        builder.filter_level(level);
        if let Ok(filters) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filters);
        }
        builder.init();
    }
}
