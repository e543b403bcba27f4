//! Command implementations.
//!
//! Each command writes its report to the given writer so tests can capture it.

pub mod check;
pub mod print;
pub mod settings;

pub use check::execute as check_execute;
pub use print::execute as print_execute;
pub use settings::execute as settings_execute;
