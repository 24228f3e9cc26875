mod data_url;
mod file_namer;
mod file_scanner;
mod path_validator;

pub use data_url::DataUrl;
pub use file_namer::screenshot_file_name;
pub use file_scanner::{ListedFile, list_directory_files};
pub use path_validator::{DirectoryStatus, ensure_directory_exists, inspect_directory};
