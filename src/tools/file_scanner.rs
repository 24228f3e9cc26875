use std::path::Path;
use walkdir::WalkDir;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedFile {
    pub name: String,
    pub size: u64,
}

/// 列出資料夾下一層的所有項目，依名稱排序
#[must_use]
pub fn list_directory_files(dir: &Path) -> Vec<ListedFile> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .map(|entry| ListedFile {
            name: entry.file_name().to_string_lossy().into_owned(),
            size: entry.metadata().map_or(0, |m| m.len()),
        })
        .collect()
}
