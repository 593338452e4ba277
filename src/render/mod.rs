//! Renderer module — prose rendering and page templating.

pub mod html;
pub mod markdown;

use crate::model::DocumentationPage;
use anyhow::Result;

/// Trait for rendering a documentation page into a complete output document.
pub trait Renderer {
    fn render(&self, page: &DocumentationPage) -> Result<String>;
}
