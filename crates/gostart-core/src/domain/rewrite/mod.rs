//! Pure text rewrites for the three kinds of file the initializer touches.
//!
//! Nothing here reads or writes files; the application layer feeds contents
//! in through the `Filesystem` port and writes the results back.

pub mod build_file;
pub mod manifest;
pub mod unit_file;

pub use build_file::{BuildKey, BuildVars, rewrite_build_file};
pub use manifest::{parse_module_path, replace_module};
pub use unit_file::{renamed_file_name, substitute_placeholder};
