//! Platform-specific console setup, run once at startup.
//!
//! Rust writes to the Windows console through the wide-character API, so no
//! code page switching is needed for UTF-8 output. Legacy consoles can still
//! lack ANSI support, in which case styling is turned off.

/// Prepare the terminal for styled output.
#[cfg(windows)]
pub fn init_console() {
    use console::Term;

    if !Term::stdout().features().colors_supported() {
        console::set_colors_enabled(false);
    }
    if !Term::stderr().features().colors_supported() {
        console::set_colors_enabled_stderr(false);
    }
}

/// Prepare the terminal for styled output. Nothing to do on this platform.
#[cfg(not(windows))]
pub fn init_console() {}
