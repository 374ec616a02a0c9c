use std::sync::{Arc, Mutex};

use crate::links::builder::{LanguageLinkBuilder, LanguageLinkEntry};
use crate::links::capability::{DictionaryTranslator, IdentityTranslator, LangParamRewriter};
use crate::links::language::{LanguageRecord, LanguageTable};
use crate::render_pass::RenderPass;
use crate::tests::integration::common::{en_fr_table, settings};

fn rewriter_for(table: &LanguageTable) -> LangParamRewriter {
    LangParamRewriter::new(table.codes())
}

fn entry<'e>(entries: &'e [LanguageLinkEntry], code: &str) -> &'e LanguageLinkEntry {
    entries
        .iter()
        .find(|e| e.iso_code == code)
        .unwrap_or_else(|| panic!("no entry for {}", code))
}

#[test]
fn test_en_fr_query_mode() {
    let table = en_fr_table();
    let settings = settings("fr", false);
    let rewriter = rewriter_for(&table);
    let builder = LanguageLinkBuilder::new(&table, &settings, &IdentityTranslator, &rewriter);

    let mut pass = RenderPass::new();
    let entries = builder.build(&mut pass, "https://site.test/about/");

    assert_eq!(entries.len(), 2);
    let en = entry(&entries, "en");
    let fr = entry(&entries, "fr");
    assert!(!en.active);
    assert!(fr.active);
    assert_eq!(en.url, "https://site.test/about/");
    assert_eq!(fr.url, "https://site.test/about/?lang=fr");
    assert_eq!(fr.native_label, "Français");
    assert_eq!(fr.flag, "fr");
}

#[test]
fn test_en_fr_permalink_mode() {
    let table = en_fr_table();
    let settings = settings("fr", true);
    let rewriter = rewriter_for(&table);
    let builder = LanguageLinkBuilder::new(&table, &settings, &IdentityTranslator, &rewriter);

    let entries = builder.compute("https://site.test/fr/about/");

    assert_eq!(entry(&entries, "en").url, "https://site.test/about/");
    assert_eq!(entry(&entries, "fr").url, "https://site.test/fr/about/");
}

#[test]
fn test_order_follows_table_and_skips_inactive() {
    let table = LanguageTable::new(
        "en",
        vec![
            LanguageRecord::new("de", "German", "Deutsch", "de", true),
            LanguageRecord::new("en", "English", "", "us", false),
            LanguageRecord::new("es", "Spanish", "Español", "es", false),
            LanguageRecord::new("fr", "French", "Français", "fr", true),
        ],
    )
    .unwrap();
    let settings = settings("en", false);
    let rewriter = rewriter_for(&table);
    let builder = LanguageLinkBuilder::new(&table, &settings, &IdentityTranslator, &rewriter);

    let codes: Vec<String> = builder
        .compute("https://site.test/")
        .into_iter()
        .map(|e| e.iso_code)
        .collect();
    assert_eq!(codes, vec!["de", "en", "fr"]);
}

#[test]
fn test_unlisted_target_marks_nothing_active() {
    let table = LanguageTable::new(
        "en",
        vec![
            LanguageRecord::new("en", "English", "English", "us", true),
            LanguageRecord::new("fr", "French", "Français", "fr", true),
            LanguageRecord::new("de", "German", "Deutsch", "de", false),
        ],
    )
    .unwrap();
    let settings = settings("de", false);
    let rewriter = rewriter_for(&table);
    let builder = LanguageLinkBuilder::new(&table, &settings, &IdentityTranslator, &rewriter);

    let entries = builder.compute("https://site.test/about/");

    assert_eq!(entries.len(), 2);
    assert!(entries.iter().all(|e| !e.active));
    assert!(entries.iter().all(|e| e.iso_code != "de"));
}

#[test]
fn test_links_are_memoized_per_pass() {
    let table = en_fr_table();
    let settings = settings("en", false);
    let rewriter = rewriter_for(&table);
    let builder = LanguageLinkBuilder::new(&table, &settings, &IdentityTranslator, &rewriter);

    let mut pass = RenderPass::new();
    let first = builder.build(&mut pass, "https://site.test/about/");

    // The table changes mid-request; the pass keeps its first answer
    let mut shrunk = table.clone();
    shrunk.set_active("fr", false);
    let later_builder =
        LanguageLinkBuilder::new(&shrunk, &settings, &IdentityTranslator, &rewriter);
    let second = later_builder.build(&mut pass, "https://site.test/elsewhere/");

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(second.len(), 2);
    assert!(pass.cached_links().is_some());

    let mut next_request = RenderPass::new();
    assert_eq!(later_builder.build(&mut next_request, "https://site.test/").len(), 1);
}

#[test]
fn test_not_found_pages_link_home() {
    let table = en_fr_table();
    let settings = settings("fr", false);
    let rewriter = rewriter_for(&table);
    let builder = LanguageLinkBuilder::new(&table, &settings, &IdentityTranslator, &rewriter);

    let mut pass = RenderPass::new();
    let entries = builder.build_for_page(&mut pass, "https://site.test/missing/page/", true);

    assert_eq!(entry(&entries, "en").url, "https://site.test/");
    assert_eq!(entry(&entries, "fr").url, "https://site.test/?lang=fr");
}

#[test]
fn test_url_translation_skips_default_language() {
    let table = en_fr_table();
    let mut settings = settings("en", true);
    settings.enable_url_translate = true;
    let mut translator = DictionaryTranslator::new();
    translator.insert("fr", "about", "a-propos");
    translator.insert("en", "about", "should-not-apply");
    let rewriter = rewriter_for(&table);
    let builder = LanguageLinkBuilder::new(&table, &settings, &translator, &rewriter);

    let entries = builder.compute("https://site.test/about/");

    assert_eq!(entry(&entries, "en").url, "https://site.test/about/");
    assert_eq!(entry(&entries, "fr").url, "https://site.test/fr/a-propos/");
}

#[test]
fn test_translator_sees_source_language_as_empty() {
    let table = en_fr_table();
    let mut settings = settings("fr", false);
    settings.enable_url_translate = true;
    let calls = Mutex::new(Vec::new());
    let recorder = |url: &str, from: &str, to: &str| -> String {
        calls.lock().unwrap().push((from.to_string(), to.to_string()));
        url.to_string()
    };
    let rewriter = rewriter_for(&table);
    let builder = LanguageLinkBuilder::new(&table, &settings, &recorder, &rewriter);

    builder.compute("https://site.test/about/");

    let calls = calls.into_inner().unwrap();
    assert_eq!(calls, vec![(String::new(), "fr".to_string())]);
}

#[test]
fn test_urls_are_escaped_and_carry_edit_flag() {
    let table = en_fr_table();
    let mut settings = settings("fr", false);
    settings.edit_mode = true;
    let rewriter = rewriter_for(&table);
    let builder = LanguageLinkBuilder::new(&table, &settings, &IdentityTranslator, &rewriter);

    let entries = builder.compute("https://site.test/search/?q=a&page=2");

    assert_eq!(
        entry(&entries, "fr").url,
        "https://site.test/search/?q=a&amp;page=2&amp;lang=fr&amp;edit=1"
    );
    assert_eq!(
        entry(&entries, "en").url,
        "https://site.test/search/?q=a&amp;page=2&amp;edit=1"
    );
}
