//! Language table — maps file extensions to comment syntax and doc rewrite rules.
//!
//! The table is plain data: each entry names a comment symbol, the filename
//! suffixes that disqualify a file, and an ordered list of regex rewrites that
//! turn structured doc-comment markup into Markdown. Patterns are compiled
//! once by [`Languages::builtin`]; a bad pattern fails the whole table.

use regex::{Regex, RegexBuilder};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Errors raised while compiling the language table.
#[derive(Error, Debug)]
pub enum LanguageError {
    #[error("invalid comment pattern for {ext}: {source}")]
    CommentPattern {
        ext: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid rewrite rule {pattern:?} for {ext}: {source}")]
    RewriteRule {
        ext: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Static description of one language, before compilation.
pub struct LanguageSpec {
    pub ext: &'static str,
    pub name: &'static str,
    /// Regex fragment for the comment marker, e.g. `//` or `///?`
    pub symbol: &'static str,
    pub ignores: &'static [&'static str],
    pub rewrites: &'static [(&'static str, &'static str)],
}

/// Lines that look like `#` comments but must stay code: shebangs and `#{}` interpolation.
const HASH_FILTER: &str = r"(^#![/]|^\s*#\{)";

// XML documentation comments → Markdown. Order matters: inline tags first,
// the bare wrapper tags are stripped last.
const CSHARP_REWRITES: &[(&str, &str)] = &[
    (r"<c>([^<]*)</c>", "`${1}`"),
    (
        r#"<param[^>]*name="([^"]*)"[^>]*>([^<]*)</param>"#,
        "**argument** *${1}*: ${2}\n",
    ),
    (r"<returns>([^<]*)</returns>", "**returns**: ${1}\n"),
    (r#"<see\s*cref="([^"]*)"\s*/>"#, "see `${1}`"),
    (r"(</?example>|</?summary>|</?remarks>)", ""),
];

const VB_REWRITES: &[(&str, &str)] = &[
    (r"<c>([^<]*)</c>", "`${1}`"),
    (r"<param[^>]*>([^<]*)</param>", ""),
    (r"<returns>([^<]*)</returns>", ""),
    (r#"<see\s*cref="([^"]*)"\s*/>"#, "see `${1}`"),
    (r"(</?example>|</?summary>|</?remarks>)", ""),
];

/// Every language nocco knows how to document. To add a language, add it here.
pub const BUILTIN: &[LanguageSpec] = &[
    LanguageSpec {
        ext: ".sql",
        name: "sql",
        symbol: "--",
        ignores: &[],
        rewrites: &[],
    },
    LanguageSpec {
        ext: ".js",
        name: "javascript",
        symbol: "//",
        ignores: &["min.js"],
        rewrites: &[],
    },
    LanguageSpec {
        ext: ".ts",
        name: "typescript",
        symbol: "//",
        ignores: &[".d.ts"],
        rewrites: &[],
    },
    LanguageSpec {
        ext: ".cs",
        name: "csharp",
        symbol: "///?",
        ignores: &["Designer.cs"],
        rewrites: CSHARP_REWRITES,
    },
    LanguageSpec {
        ext: ".vb",
        name: "vb.net",
        symbol: "'+",
        ignores: &["Designer.vb"],
        rewrites: VB_REWRITES,
    },
    LanguageSpec {
        ext: ".rs",
        name: "rust",
        symbol: "//[/!]?",
        ignores: &[],
        rewrites: &[],
    },
    LanguageSpec {
        ext: ".py",
        name: "python",
        symbol: "#",
        ignores: &[],
        rewrites: &[],
    },
    LanguageSpec {
        ext: ".rb",
        name: "ruby",
        symbol: "#",
        ignores: &[],
        rewrites: &[],
    },
    LanguageSpec {
        ext: ".sh",
        name: "shell",
        symbol: "#",
        ignores: &[],
        rewrites: &[],
    },
    LanguageSpec {
        ext: ".coffee",
        name: "coffeescript",
        symbol: "#",
        ignores: &[],
        rewrites: &[],
    },
];

/// An ordered `pattern → replacement` rewrite over documentation text.
#[derive(Debug)]
pub struct RewriteRule {
    pub pattern: Regex,
    /// Replacement template; `${n}` refers to capture groups.
    pub replacement: String,
}

/// A compiled language descriptor.
#[derive(Debug)]
pub struct Language {
    pub name: String,
    pub comment_matcher: Regex,
    pub comment_filter: Option<Regex>,
    pub rewrite_rules: Vec<RewriteRule>,
    pub ignore_suffixes: Vec<String>,
}

impl Language {
    /// Compile a language from its static description.
    pub fn compile(spec: &LanguageSpec) -> Result<Self, LanguageError> {
        let comment_matcher = Regex::new(&format!(r"^\s*{}\s?", spec.symbol)).map_err(|source| {
            LanguageError::CommentPattern {
                ext: spec.ext.to_string(),
                source,
            }
        })?;

        let comment_filter = if spec.symbol == "#" {
            let filter = Regex::new(HASH_FILTER).map_err(|source| LanguageError::CommentPattern {
                ext: spec.ext.to_string(),
                source,
            })?;
            Some(filter)
        } else {
            None
        };

        let rewrite_rules = spec
            .rewrites
            .iter()
            .map(|&(pattern, replacement)| RewriteRule::new(spec.ext, pattern, replacement))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Language {
            name: spec.name.to_string(),
            comment_matcher,
            comment_filter,
            rewrite_rules,
            ignore_suffixes: spec.ignores.iter().map(|s| s.to_string()).collect(),
        })
    }

    /// True if the line is documentation rather than code.
    pub fn is_comment(&self, line: &str) -> bool {
        self.comment_matcher.is_match(line)
            && !self
                .comment_filter
                .as_ref()
                .is_some_and(|filter| filter.is_match(line))
    }

    /// Remove the comment marker (and one following space) from a comment line.
    pub fn strip_comment<'l>(&self, line: &'l str) -> std::borrow::Cow<'l, str> {
        self.comment_matcher.replace(line, "")
    }

    /// True if the file name ends with one of this language's ignore suffixes.
    pub fn is_ignored(&self, file_name: &str) -> bool {
        self.ignore_suffixes
            .iter()
            .any(|suffix| file_name.ends_with(suffix.as_str()))
    }
}

impl RewriteRule {
    fn new(ext: &str, pattern: &str, replacement: &str) -> Result<Self, LanguageError> {
        let compiled = RegexBuilder::new(pattern)
            .multi_line(true)
            .build()
            .map_err(|source| LanguageError::RewriteRule {
                ext: ext.to_string(),
                pattern: pattern.to_string(),
                source,
            })?;
        Ok(RewriteRule {
            pattern: compiled,
            replacement: replacement.to_string(),
        })
    }
}

/// Extension-keyed lookup table of compiled languages.
#[derive(Debug)]
pub struct Languages {
    by_ext: HashMap<String, Language>,
}

impl Languages {
    /// Compile the built-in language table.
    pub fn builtin() -> Result<Self, LanguageError> {
        Self::from_specs(BUILTIN)
    }

    pub fn from_specs(specs: &[LanguageSpec]) -> Result<Self, LanguageError> {
        let mut by_ext = HashMap::with_capacity(specs.len());
        for spec in specs {
            by_ext.insert(spec.ext.to_lowercase(), Language::compile(spec)?);
        }
        Ok(Languages { by_ext })
    }

    /// Look up the language for a file by its final extension, ignoring case.
    pub fn for_path(&self, path: &Path) -> Option<&Language> {
        let ext = path.extension()?.to_str()?;
        self.by_ext.get(&format!(".{}", ext.to_lowercase()))
    }
}
