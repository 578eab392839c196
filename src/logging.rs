/* ************************************************************************ **
** This file is part of hgmatch, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use ::failure::Error;
use ::std::fmt;
use ::std::path::Path;
use ::log::{Level, LevelFilter};

/// Installs the global logger.
///
/// Records go to stdout, and additionally to `path` if one is given.
/// `level` applies to this workspace's crates; everything else is capped at `Info`.
///
/// Only one logger can ever be installed per process; later calls return an error.
pub fn setup_global_logger(level: LevelFilter, path: Option<&Path>) -> Result<(), Error>
{Ok({
    use ::std::time::Instant;

    let start = Instant::now();
    let mut fern = ::fern::Dispatch::new();
    fern = fern.format(move |out, message, record| {
            let t = start.elapsed();
            out.finish(format_args!("[{:>4}.{:03}s][{}][{}] {}",
                t.as_secs(),
                t.subsec_millis(),
                record.target(),
                ColorizedLevel(record.level()),
                message))
        })
        .level(LevelFilter::Info.min(level))
        .level_for("hgmatch", level)
        .level_for("hgmatch_matrix", level)
        .chain(::std::io::stdout());

    if let Some(path) = path {
        fern = fern.chain(::fern::log_file(path)?);
    }

    fern.apply()?;
    debug!("logger initialized at level {}", level);
})}

#[derive(Debug, Copy, Clone)]
pub struct ColorizedLevel(pub Level);
impl fmt::Display for ColorizedLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let style = match self.0 {
            Level::Error => ::ansi_term::Colour::Red.bold(),
            Level::Warn  => ::ansi_term::Colour::Red.normal(),
            Level::Info  => ::ansi_term::Colour::Cyan.bold(),
            Level::Debug => ::ansi_term::Colour::Yellow.dimmed(),
            Level::Trace => ::ansi_term::Colour::Cyan.normal(),
        };
        write!(f, "{}", style.paint(self.0.to_string()))
    }
}
