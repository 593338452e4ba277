//! HTML renderer — two-column page with docs on the left and code on the right.

use crate::model::*;
use crate::paths;
use crate::render::Renderer;
use anyhow::Result;

pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render(&self, page: &DocumentationPage) -> Result<String> {
        let mut out = String::new();

        out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        out.push_str(&format!("<title>{}</title>\n", html_escape(&page.title)));
        out.push_str("<meta http-equiv=\"content-type\" content=\"text/html; charset=UTF-8\" />\n");
        out.push_str(&format!(
            "<link href=\"{}\" rel=\"stylesheet\" media=\"all\" type=\"text/css\" />\n",
            html_escape(&page.path_to_stylesheet)
        ));
        out.push_str(&format!(
            "<script src=\"{}\" type=\"text/javascript\"></script>\n",
            html_escape(&page.path_to_script)
        ));
        out.push_str("</head>\n<body onload=\"prettyPrint()\">\n");
        out.push_str("<div id=\"container\">\n  <div id=\"background\"></div>\n");

        // Jump-to menu, only useful with more than one page
        if page.sources.len() > 1 {
            out.push_str(&render_jump_to(page));
        }

        out.push_str("  <table cellpadding=\"0\" cellspacing=\"0\">\n");
        out.push_str("    <thead>\n      <tr>\n");
        out.push_str(&format!(
            "        <th class=\"docs\"><h1>{}</h1></th>\n",
            html_escape(&page.title)
        ));
        out.push_str("        <th class=\"code\"></th>\n      </tr>\n    </thead>\n");
        out.push_str("    <tbody>\n");
        for (i, section) in page.sections.iter().enumerate() {
            out.push_str(&render_section(i + 1, section));
        }
        out.push_str("    </tbody>\n  </table>\n</div>\n</body>\n</html>\n");

        Ok(out)
    }
}

fn render_jump_to(page: &DocumentationPage) -> String {
    let mut out = String::new();
    out.push_str("  <div id=\"jump_to\">\n    Jump To &hellip;\n");
    out.push_str("    <div id=\"jump_wrapper\">\n      <div id=\"jump_page\">\n");
    for source in page.sources {
        out.push_str(&format!(
            "        <a class=\"source\" href=\"{}\">{}</a>\n",
            html_escape(&paths::source_url(&page.path_to_root, source)),
            html_escape(source)
        ));
    }
    out.push_str("      </div>\n    </div>\n  </div>\n");
    out
}

fn render_section(number: usize, section: &Section) -> String {
    let mut out = String::new();
    out.push_str(&format!("      <tr id=\"section_{}\">\n", number));
    out.push_str("        <td class=\"docs\">\n");
    out.push_str(&format!(
        "          <div class=\"pilwrap\"><a class=\"pilcrow\" href=\"#section_{}\">&#182;</a></div>\n",
        number
    ));
    // Docs are already HTML
    out.push_str(&section.docs_html);
    out.push_str("        </td>\n");
    out.push_str(&format!(
        "        <td class=\"code\"><pre><code class=\"prettyprint\">{}</code></pre></td>\n",
        html_escape(&section.code_html)
    ));
    out.push_str("      </tr>\n");
    out
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
