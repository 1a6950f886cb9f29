//! Process-wide output settings for the `mary` binary.
//!
//! Server output (audio, MaryXML, listings) is written to stdout so it can be
//! piped. Everything else goes to stderr: status lines, the spinner, log
//! events and errors. `--quiet` hides status lines and the spinner only;
//! warnings and errors are still printed. `--no-color` or `NO_COLOR`
//! disables styling.

use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;

/// Settings installed by [`init`].
static OUTPUT_CONFIG: OnceLock<OutputConfig> = OnceLock::new();

/// Flags that shape what reaches the terminal.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Hide status lines and the spinner.
    pub quiet: bool,
    /// Print without ANSI styling.
    pub no_color: bool,
    /// Log library events down to `debug` level.
    pub verbose: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            quiet: false,
            // https://no-color.org/
            no_color: std::env::var("NO_COLOR").is_ok(),
            verbose: false,
        }
    }
}

/// Installs the output settings and the `tracing` subscriber.
///
/// Only the first call has any effect.
pub fn init(config: OutputConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(log_filter(config.verbose))
        .with_writer(std::io::stderr)
        .with_ansi(!config.no_color)
        .with_target(false)
        .try_init();
    let _ = OUTPUT_CONFIG.set(config);
}

/// Builds the log filter: `RUST_LOG` wins, otherwise `warn` or `debug`.
fn log_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "marytts_client=debug,warn"
        } else {
            "warn"
        })
    })
}

/// Returns the installed settings, or the defaults before [`init`].
pub fn config() -> &'static OutputConfig {
    OUTPUT_CONFIG.get_or_init(OutputConfig::default)
}

/// Whether `--quiet` was given.
pub fn is_quiet() -> bool {
    config().quiet
}

/// Whether styling is turned off.
pub fn is_no_color() -> bool {
    config().no_color
}

/// Prints a progress or confirmation line to stderr unless quiet.
#[macro_export]
macro_rules! status {
    ($($arg:tt)*) => {
        if !$crate::output::is_quiet() {
            eprintln!($($arg)*);
        }
    };
}

/// Prints a user-facing warning to stderr, also in quiet mode.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        eprintln!($($arg)*);
    };
}
