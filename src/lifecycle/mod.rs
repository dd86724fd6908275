//! Process lifecycle: signal handling for graceful shutdown.
//!
//! ```text
//! 1. Configuration loading
//! 2. Pool creation and table bootstrap
//! 3. Server start
//!    [running...]
//! 4. Shutdown signal (SIGTERM/SIGINT)
//! 5. In-flight requests drain
//! 6. Pool close
//! ```

mod shutdown;

pub use shutdown::shutdown_signal;
