use std::fmt;

use crate::renderer::traits::{RenderArgs, Renderer};
use crate::utils::html::escape_html;

/// Row of flag links, labelled through `title` and `aria-label`
#[derive(Debug, Default, Clone, Copy)]
pub struct FlagsRenderer;

impl FlagsRenderer {
    pub const KIND: &'static str = "flags";
}

impl Renderer for FlagsRenderer {
    fn name(&self) -> &str {
        Self::KIND
    }

    fn render(&self, args: &RenderArgs<'_>, out: &mut dyn fmt::Write) -> fmt::Result {
        writeln!(out, r#"<div class="tr_flags" id="tr_flags{}">"#, args.draw_id)?;
        for entry in args.entries {
            let label = format!("{} - {}", entry.label, entry.native_label);
            let class = if entry.active { "tr_flag tr_active" } else { "tr_flag" };
            writeln!(
                out,
                concat!(
                    r#"<a href="{}" class="{}" title="{}" aria-label="{}">"#,
                    r#"<span class="tr_flag_{}"></span></a>"#,
                ),
                entry.url,
                class,
                escape_html(&label),
                escape_html(&label),
                escape_html(&entry.flag),
            )?;
        }
        writeln!(out, "</div>")
    }
}
