use std::fmt;

use crate::renderer::traits::{RenderArgs, Renderer};
use crate::utils::html::escape_html;

/// Language picker drawn as a `<select>` that navigates on change
#[derive(Debug, Default, Clone, Copy)]
pub struct DropdownRenderer;

impl DropdownRenderer {
    pub const KIND: &'static str = "dropdown";
}

impl Renderer for DropdownRenderer {
    fn name(&self) -> &str {
        Self::KIND
    }

    fn render(&self, args: &RenderArgs<'_>, out: &mut dyn fmt::Write) -> fmt::Result {
        writeln!(
            out,
            concat!(
                r#"<span class="tr_dropdown"><select name="lang" id="tr_select{}" "#,
                r#"onchange="document.location.href=this.options[this.selectedIndex].value;">"#,
            ),
            args.draw_id
        )?;
        for entry in args.entries {
            let selected = if entry.active { r#" selected="selected""# } else { "" };
            writeln!(
                out,
                r#"<option value="{}"{}>{}</option>"#,
                entry.url,
                selected,
                escape_html(&entry.native_label),
            )?;
        }
        writeln!(out, "</select></span>")
    }
}
