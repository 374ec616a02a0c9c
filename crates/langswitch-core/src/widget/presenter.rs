use std::fmt::Write;

use log::debug;

use crate::kernel::constants::{EDIT_PARAM, SPAN_PREFIX};
use crate::kernel::error::Result;
use crate::links::LanguageLinkBuilder;
use crate::render_pass::RenderPass;
use crate::renderer::loader::RendererLoader;
use crate::renderer::traits::RenderArgs;
use crate::utils::html::{encode_script_url, escape_html};
use crate::widget::instance::WidgetInstanceConfig;

/// How a placement is embedded in the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Regular sidebar widget with the default-language and edit controls
    Sidebar,
    /// Inline placement (e.g. a shortcode); registers its own assets and
    /// shows only the switcher
    Embedded,
}

/// Markup the host wraps around a widget
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetChrome {
    pub before_widget: String,
    pub after_widget: String,
    pub before_title: String,
    pub after_title: String,
}

/// Facts about the page request being rendered
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageState {
    /// Current URL with any language selector removed
    pub clean_url: String,
    /// Raw request URI, used for the edit toggle
    pub request_uri: String,
    /// The page is a not-found page
    pub not_found: bool,
    /// Visitor's stored default-language preference, if any
    pub default_language_cookie: Option<String>,
    /// The visitor may edit translations of the current language
    pub editing_permitted: bool,
}

/// Site-wide presentation switches
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresenterOptions {
    /// Offer a "set as default language" link
    pub allow_set_default_language: bool,
    /// Endpoint that stores the default-language preference
    pub preference_endpoint: String,
}

/// Draws widget placements: chrome, renderer output and controls
pub struct WidgetPresenter<'a> {
    loader: &'a RendererLoader,
    links: &'a LanguageLinkBuilder<'a>,
    options: PresenterOptions,
}

impl<'a> WidgetPresenter<'a> {
    pub fn new(
        loader: &'a RendererLoader,
        links: &'a LanguageLinkBuilder<'a>,
        options: PresenterOptions,
    ) -> Self {
        Self {
            loader,
            links,
            options,
        }
    }

    /// Write one placement of `instance` into `out`
    pub fn display(
        &self,
        pass: &mut RenderPass,
        instance: &WidgetInstanceConfig,
        chrome: &WidgetChrome,
        page: &PageState,
        mode: DisplayMode,
        out: &mut dyn Write,
    ) -> Result<()> {
        let draw_id = pass.next_draw_id();
        let resolved = pass.load(self.loader, &instance.renderer)?;
        let entries = self.links.build_for_page(pass, &page.clean_url, page.not_found);
        let settings = self.links.settings();
        debug!(
            "Displaying widget {} with renderer '{}' ({} links)",
            draw_id,
            resolved.short_name,
            entries.len()
        );

        out.write_str(&chrome.before_widget)?;
        if !instance.title.is_empty() {
            write!(
                out,
                "{}{}{}",
                chrome.before_title,
                escape_html(&instance.title),
                chrome.after_title
            )?;
        }

        let args = RenderArgs {
            entries: &entries,
            target_language: &settings.target_language,
            draw_id,
        };
        resolved.renderer.render(&args, out)?;

        if mode == DisplayMode::Embedded {
            if !pass.has_registered_assets(&resolved.id) {
                let root = self.loader.roots().for_id(&resolved.id);
                let raw_id = resolved.id.path();
                resolved.renderer.provide_css(raw_id, root, pass.assets_mut());
                resolved.renderer.provide_js(raw_id, root, pass.assets_mut());
                pass.mark_assets_registered(resolved.id.clone());
            }
            out.write_str(&chrome.after_widget)?;
            return Ok(());
        }

        if entries.is_empty() {
            out.write_str(
                "<p>No languages available for display. Check the language settings.</p>",
            )?;
        } else {
            if self.options.allow_set_default_language && self.offers_default_language(page) {
                write!(
                    out,
                    concat!(
                        r#"<a id="{p}setdeflang{id}" class="{p}setdeflang" "#,
                        r#"onClick="return false;" href="{href}">Set as default language</a><br/>"#,
                    ),
                    p = SPAN_PREFIX,
                    id = draw_id,
                    href = escape_html(&self.options.preference_endpoint),
                )?;
            }
            if page.editing_permitted {
                self.write_edit_toggle(page, out)?;
            }
        }

        write!(out, r#"<div id="{}credit{}"></div>"#, SPAN_PREFIX, draw_id)?;
        out.write_str(&chrome.after_widget)?;
        Ok(())
    }

    /// The link is offered when the stored preference differs from the page
    /// language, or when nothing is stored and the page is not in the
    /// default language
    fn offers_default_language(&self, page: &PageState) -> bool {
        let target = &self.links.settings().target_language;
        match &page.default_language_cookie {
            Some(preferred) => preferred != target,
            None => !self.links.table().is_default(target),
        }
    }

    fn write_edit_toggle(&self, page: &PageState, out: &mut dyn Write) -> Result<()> {
        let settings = self.links.settings();
        let lang = if self.links.table().is_default(&settings.target_language) {
            ""
        } else {
            settings.target_language.as_str()
        };
        let toggled = self.links.rewriter().rewrite(
            &page.request_uri,
            &settings.home_url,
            settings.enable_permalinks_rewrite,
            lang,
            !settings.edit_mode,
        );
        let checked = if settings.edit_mode { r#"checked="checked" "# } else { "" };
        write!(
            out,
            concat!(
                r#"<input type="checkbox" name="{name}" value="1" {checked}"#,
                r#"onclick="document.location.href='{href}';"/>&nbsp;Edit Translation"#,
            ),
            name = EDIT_PARAM,
            checked = checked,
            href = escape_html(&encode_script_url(&toggled)),
        )?;
        Ok(())
    }
}
