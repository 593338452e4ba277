//! Source path → output path and cross-link URL mapping.
//!
//! Source paths are kept relative to the scan root with `/` separators, e.g.
//! `sub/dir/File.CS`. Its page lives at `<output>/sub/dir/file.html` and links
//! back up to the output root with `../../`.

use std::path::{Component, Path, PathBuf};

/// Extension of generated pages.
pub const PAGE_EXTENSION: &str = "html";

/// Express `path` relative to `root` with forward slashes.
/// Returns `None` if `path` is not under `root`.
pub fn relative_source(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let parts: Vec<String> = rel
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("/"))
    }
}

/// Page path for a source, relative to the output root: lower-cased, `.html`.
/// "sub/dir/File.CS" → "sub/dir/file.html"
pub fn page_name(source: &str) -> String {
    let lower = source.to_lowercase();
    Path::new(&lower)
        .with_extension(PAGE_EXTENSION)
        .to_string_lossy()
        .replace('\\', "/")
}

/// Where the page for `source` is written.
pub fn destination(output_root: &Path, source: &str) -> PathBuf {
    page_name(source)
        .split('/')
        .fold(output_root.to_path_buf(), |path, part| path.join(part))
}

/// Number of directories between the output root and the page.
pub fn depth(source: &str) -> usize {
    source.matches('/').count()
}

/// `../` once per directory level.
pub fn path_to_root(depth: usize) -> String {
    "../".repeat(depth)
}

/// URL of the page for `source`, as seen from a page `path_to_root` below the root.
pub fn source_url(path_to_root: &str, source: &str) -> String {
    format!("{}{}", path_to_root, page_name(source))
}

/// File name of the source, used as the page title.
pub fn title(source: &str) -> &str {
    source.rsplit('/').next().unwrap_or(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_name_lowercases_and_swaps_extension() {
        assert_eq!(page_name("sub/dir/File.CS"), "sub/dir/file.html");
        assert_eq!(page_name("Nocco.cs"), "nocco.html");
        assert_eq!(page_name("jquery.ui.js"), "jquery.ui.html");
    }

    #[test]
    fn destination_under_output_root() {
        assert_eq!(
            destination(Path::new("docs"), "sub/dir/File.CS"),
            Path::new("docs").join("sub").join("dir").join("file.html")
        );
        assert_eq!(
            destination(Path::new("docs"), "Nocco.cs"),
            Path::new("docs").join("nocco.html")
        );
    }

    #[test]
    fn depth_counts_directories() {
        assert_eq!(depth("Nocco.cs"), 0);
        assert_eq!(depth("sub/dir/File.CS"), 2);
    }

    #[test]
    fn path_to_root_repeats_parent() {
        assert_eq!(path_to_root(0), "");
        assert_eq!(path_to_root(2), "../../");
    }

    #[test]
    fn cross_links_from_nested_page() {
        let prefix = path_to_root(depth("sub/dir/File.CS"));
        assert_eq!(source_url(&prefix, "Other.cs"), "../../other.html");
        assert_eq!(source_url(&prefix, "sub/dir/File.CS"), "../../sub/dir/file.html");
    }

    #[test]
    fn relative_source_strips_root() {
        assert_eq!(
            relative_source(Path::new("."), Path::new("./sub/A.cs")).as_deref(),
            Some("sub/A.cs")
        );
        assert_eq!(
            relative_source(Path::new("/proj"), Path::new("/proj/a/b/C.js")).as_deref(),
            Some("a/b/C.js")
        );
        assert_eq!(relative_source(Path::new("/proj"), Path::new("/other/C.js")), None);
    }

    #[test]
    fn title_is_file_name() {
        assert_eq!(title("sub/dir/File.CS"), "File.CS");
        assert_eq!(title("Nocco.cs"), "Nocco.cs");
    }
}
