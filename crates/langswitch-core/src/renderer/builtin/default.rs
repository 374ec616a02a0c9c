use std::fmt;

use crate::renderer::traits::{RenderArgs, Renderer};
use crate::utils::html::escape_html;

/// Minimal switcher: a list of language links. Also the fallback renderer.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultRenderer;

impl DefaultRenderer {
    pub const KIND: &'static str = "default";
}

impl Renderer for DefaultRenderer {
    fn name(&self) -> &str {
        Self::KIND
    }

    fn render(&self, args: &RenderArgs<'_>, out: &mut dyn fmt::Write) -> fmt::Result {
        writeln!(out, r#"<ul class="tr_list" id="tr_list{}">"#, args.draw_id)?;
        for entry in args.entries {
            let class = if entry.active { " class=\"tr_active\"" } else { "" };
            writeln!(
                out,
                r#"<li{}><a href="{}" hreflang="{}">{}</a></li>"#,
                class,
                entry.url,
                escape_html(&entry.iso_code),
                escape_html(&entry.native_label),
            )?;
        }
        writeln!(out, "</ul>")
    }
}
