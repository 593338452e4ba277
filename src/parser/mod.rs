//! Parser module — comment/code segmentation and doc normalization.

pub mod normalize;
pub mod segment;

use crate::language::Language;
use crate::model::Section;
use crate::render::markdown;

/// Split a source file into sections and render each section's docs to HTML.
///
/// Code is passed through untouched; highlighting happens in the browser.
pub fn parse_and_highlight(source: &str, lang: &Language) -> Vec<Section> {
    segment::segment(source, lang)
        .into_iter()
        .map(highlight)
        .collect()
}

fn highlight(section: Section) -> Section {
    Section {
        docs_html: markdown::to_html(&section.docs_html),
        code_html: section.code_html,
    }
}
