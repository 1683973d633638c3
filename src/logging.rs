// 📝 Logging - colog-backed `log` setup shared by both binaries
// Reports go to stdout; logs go to stderr.

use log::LevelFilter;

/// Level for `-v` count and `-q`
///
/// default Warn, -v Info, -vv Debug, -vvv Trace, -q Error
pub fn level_for(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global logger
pub fn init(verbose: u8, quiet: bool) {
    let mut clog = colog::default_builder();
    clog.filter(None, level_for(verbose, quiet));
    // A logger may already be installed (tests)
    let _ = clog.try_init();
}
