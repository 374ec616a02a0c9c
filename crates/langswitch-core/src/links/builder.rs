use std::sync::Arc;

use log::debug;

use crate::links::capability::{UrlRewriter, UrlTranslator};
use crate::links::language::LanguageTable;
use crate::render_pass::RenderPass;
use crate::utils::html::escape_html;

/// One selectable language in the switcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageLinkEntry {
    /// Language code, unique within one build
    pub iso_code: String,
    /// Name in the site's language
    pub label: String,
    /// Name in the language itself
    pub native_label: String,
    /// Flag identifier
    pub flag: String,
    /// Absolute target URL, HTML-escaped
    pub url: String,
    /// True for the language the page is being shown in
    pub active: bool,
}

/// Per-request inputs of the link computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkSettings {
    pub home_url: String,
    /// Language the page is rendered in
    pub target_language: String,
    /// Translate URLs for non-default languages
    pub enable_url_translate: bool,
    /// Encode the language as a path prefix instead of a query parameter
    pub enable_permalinks_rewrite: bool,
    /// Whether the visitor is in translation edit mode
    pub edit_mode: bool,
}

/// Derives the language links shown by every switcher on a page
pub struct LanguageLinkBuilder<'a> {
    table: &'a LanguageTable,
    settings: &'a LinkSettings,
    translator: &'a dyn UrlTranslator,
    rewriter: &'a dyn UrlRewriter,
}

impl<'a> LanguageLinkBuilder<'a> {
    pub fn new(
        table: &'a LanguageTable,
        settings: &'a LinkSettings,
        translator: &'a dyn UrlTranslator,
        rewriter: &'a dyn UrlRewriter,
    ) -> Self {
        Self {
            table,
            settings,
            translator,
            rewriter,
        }
    }

    pub fn table(&self) -> &'a LanguageTable {
        self.table
    }

    pub fn settings(&self) -> &'a LinkSettings {
        self.settings
    }

    pub fn rewriter(&self) -> &'a dyn UrlRewriter {
        self.rewriter
    }

    /// Links for the page at `current_clean_url`, computed on the first call
    /// of the pass. Later calls in the same pass return that first result
    /// unchanged, whatever arguments or table they are given.
    pub fn build(
        &self,
        pass: &mut RenderPass,
        current_clean_url: &str,
    ) -> Arc<[LanguageLinkEntry]> {
        pass.links_or_insert_with(|| self.compute(current_clean_url))
    }

    /// Like [`build`](Self::build), using the home URL for not-found pages
    pub fn build_for_page(
        &self,
        pass: &mut RenderPass,
        clean_url: &str,
        not_found: bool,
    ) -> Arc<[LanguageLinkEntry]> {
        let url = if not_found {
            self.settings.home_url.as_str()
        } else {
            clean_url
        };
        self.build(pass, url)
    }

    /// Compute the links without consulting or filling any cache
    pub fn compute(&self, current_clean_url: &str) -> Vec<LanguageLinkEntry> {
        debug!("Computing language links for {}", current_clean_url);
        let settings = self.settings;

        self.table
            .listed()
            .map(|language| {
                let is_default = self.table.is_default(&language.code);
                let page_url = if settings.enable_url_translate && !is_default {
                    self.translator.translate(current_clean_url, "", &language.code)
                } else {
                    current_clean_url.to_string()
                };
                let page_url = self.rewriter.rewrite(
                    &page_url,
                    &settings.home_url,
                    settings.enable_permalinks_rewrite,
                    if is_default { "" } else { &language.code },
                    settings.edit_mode,
                );

                LanguageLinkEntry {
                    iso_code: language.code.clone(),
                    label: language.label.clone(),
                    native_label: language.display_native_label().to_string(),
                    flag: language.flag.clone(),
                    url: escape_html(&page_url),
                    active: settings.target_language == language.code,
                }
            })
            .collect()
    }
}
