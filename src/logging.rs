//! File-backed logging. The terminal belongs to the UI, so log lines never go
//! to stdout or stderr.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Whether logging should be switched on for this run.
pub fn wanted(explicit_file: bool) -> bool {
    explicit_file || std::env::var_os("RUST_LOG").is_some()
}

/// Route `log` records to `path`, appending. The filter comes from `RUST_LOG`
/// and defaults to `info`.
pub fn init(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    builder
        .format(|fmt, record| {
            writeln!(
                fmt,
                "{} [{}] {}: {}",
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .target(env_logger::Target::Pipe(Box::new(file)));

    builder
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::AlreadyExists, e))
}
