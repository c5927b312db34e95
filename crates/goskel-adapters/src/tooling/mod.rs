//! External program runners.

mod process;

pub use process::ProcessRunner;
