//! Report assembly and console rendering.

pub mod assembler;
pub mod console;

pub use assembler::{
    assemble, build_report, compare_snapshots, no_current_report, no_previous_report, summarize,
    NO_CURRENT_ERROR, NO_PREVIOUS_MESSAGE,
};
pub use console::render_console_summary;
