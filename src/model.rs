//! Data model for generated documentation — format-agnostic.

use crate::language::Language;

/// One documentation block paired with the code that follows it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Section {
    /// Normalized Markdown after segmentation, HTML after highlighting.
    pub docs_html: String,
    /// Code text, passed through unchanged (highlighting happens client-side).
    pub code_html: String,
}

/// Everything the page template needs to render one source file.
#[derive(Debug)]
pub struct DocumentationPage<'a> {
    /// File name of the source, e.g. `Nocco.cs`
    pub title: String,
    /// `../` repeated once per directory level below the output root
    pub path_to_root: String,
    pub path_to_stylesheet: String,
    pub path_to_script: String,
    pub sections: Vec<Section>,
    /// Every processed source path, relative to the scan root
    pub sources: &'a [String],
}

/// A discovered source file: its path relative to the scan root and its language.
#[derive(Debug)]
pub struct SourceFile<'l> {
    /// Forward-slash separated, e.g. `sub/dir/File.cs`
    pub path: String,
    pub language: &'l Language,
}
