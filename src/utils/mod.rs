pub mod paths;

pub use paths::resolve_output_dir;
