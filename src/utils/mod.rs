pub mod environment;
pub mod paths;
pub mod terminal;

pub use environment::{default_snapshot_dir, get_root_dir};
pub use paths::{abbreviate_path, format_path_with_tilde};
pub use terminal::sanitize_name;
