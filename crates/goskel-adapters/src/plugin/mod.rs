//! Plugin module loaders.

mod dylib;

pub use dylib::DylibLoader;
