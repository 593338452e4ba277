//! Segmenter — splits a source file into comment/code sections.
//!
//! A new section starts whenever a comment line follows code. Consecutive
//! comment lines, and any code that follows them, belong to one section.
//! Leading code (before any comment) gets a section with empty docs.

use crate::language::Language;
use crate::model::Section;
use crate::parser::normalize::normalize;

/// The original lines of one section, before any stripping or rewriting.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Chunk<'a> {
    pub comments: Vec<&'a str>,
    pub code: Vec<&'a str>,
}

impl Chunk<'_> {
    /// Turn the raw lines into a section: strip comment markers, apply the
    /// language's rewrite rules, and keep the code verbatim.
    pub fn to_section(&self, lang: &Language) -> Section {
        let mut docs = String::new();
        for line in &self.comments {
            docs.push_str(&lang.strip_comment(line));
            docs.push('\n');
        }

        let mut code = String::new();
        for line in &self.code {
            code.push_str(line);
            code.push('\n');
        }

        Section {
            docs_html: normalize(&docs, &lang.rewrite_rules).into_owned(),
            code_html: code,
        }
    }
}

/// Partition lines into chunks. Always returns at least one chunk.
pub fn split<'a>(lines: &[&'a str], lang: &Language) -> Vec<Chunk<'a>> {
    let (mut chunks, last) = lines.iter().fold(
        (Vec::new(), Chunk::default()),
        |(mut chunks, mut current), &line| {
            if lang.is_comment(line) {
                if !current.code.is_empty() {
                    chunks.push(std::mem::take(&mut current));
                }
                current.comments.push(line);
            } else {
                current.code.push(line);
            }
            (chunks, current)
        },
    );
    chunks.push(last);
    chunks
}

/// Segment a source text into normalized sections. A leading byte-order mark is dropped.
pub fn segment(source: &str, lang: &Language) -> Vec<Section> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let lines: Vec<&str> = source.lines().collect();
    split(&lines, lang)
        .iter()
        .map(|chunk| chunk.to_section(lang))
        .collect()
}
