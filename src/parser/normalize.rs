//! Doc normalizer — rewrites structured doc-comment markup into Markdown.

use crate::language::RewriteRule;
use std::borrow::Cow;

/// Apply each rule in order; every rule sees the previous rule's output.
pub fn normalize<'t>(docs: &'t str, rules: &[RewriteRule]) -> Cow<'t, str> {
    rules.iter().fold(Cow::Borrowed(docs), |text, rule| {
        let rewritten = match rule.pattern.replace_all(&text, rule.replacement.as_str()) {
            Cow::Borrowed(_) => None,
            Cow::Owned(rewritten) => Some(rewritten),
        };
        rewritten.map_or(text, Cow::Owned)
    })
}
