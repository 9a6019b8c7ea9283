//! Log setup. The terminal is in raw mode while the demo runs, so records go
//! to a file instead of stderr.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use log::LevelFilter;

/// Logger builder writing debug records to `file`. `RUST_LOG` is not
/// consulted here.
pub fn builder(file: File) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(LevelFilter::Debug)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {} - {}",
                record.level(),
                record.target(),
                record.args()
            )
        });
    builder
}

/// Install the global logger, writing to `path`. `RUST_LOG` overrides the
/// default debug level.
pub fn init(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    builder(file)
        .parse_env(env_logger::Env::default())
        .try_init()
        .map_err(io::Error::other)
}
