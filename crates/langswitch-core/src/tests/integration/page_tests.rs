#![cfg(test)]

use std::fs;
use std::sync::Arc;

use tempfile::tempdir;

use crate::kernel::error::Result;
use crate::links::LanguageLinkBuilder;
use crate::render_pass::RenderPass;
use crate::renderer::assets::ActiveAssetAggregator;
use crate::renderer::loader::RendererLoader;
use crate::renderer::registry::RendererFactoryRegistry;
use crate::storage::SwitcherConfig;
use crate::tests::integration::common::populated_roots;
use crate::widget::{DisplayMode, PageState, PresenterOptions, WidgetChrome, WidgetPresenter};

const SITE_TOML: &str = r#"
home_url = "https://site.test"
default_language = "en"
widget_allow_set_default_language = true
preference_endpoint = "/langswitch/default"

[storage]
bundled_dir = "bundled"
bundled_url = "https://cdn.test/bundled"
override_dir = "uploads"
override_url = "https://site.test/uploads/langswitch"

[[languages]]
code = "en"
label = "English"
active = true

[[languages]]
code = "fr"
label = "French"
native_label = "Français"
active = true

[[languages]]
code = "de"
label = "German"
active = false

[[widgets]]
key = "sidebar"
title = "Languages"
renderer = "dropdown/tpw_dropdown.widget"

[[widgets]]
key = "footer"
renderer = "flags/tpw_flags.widget"

[[widgets]]
key = "retired"
renderer = "flags/tpw_flags.widget"
active = false
"#;

/// Write a site configuration next to the populated renderer roots
fn site(base: &std::path::Path) -> Result<SwitcherConfig> {
    populated_roots(base);
    let path = base.join("langswitch.toml");
    fs::write(&path, SITE_TOML).unwrap();
    SwitcherConfig::load(&path)
}

/// Render every active widget of `config` for one request
fn render_page(
    config: &SwitcherConfig,
    loader: &RendererLoader,
    url: &str,
    target: &str,
) -> Result<(String, RenderPass)> {
    let table = config.language_table()?;
    let settings = config.link_settings(target, false);
    let translator = config.translator();
    let rewriter = config.rewriter();
    let links = LanguageLinkBuilder::new(&table, &settings, &translator, &rewriter);
    let presenter = WidgetPresenter::new(
        loader,
        &links,
        PresenterOptions {
            allow_set_default_language: config.widget_allow_set_default_language,
            preference_endpoint: config.preference_endpoint.clone(),
        },
    );

    let mut pass = RenderPass::new();
    ActiveAssetAggregator::new(loader).collect_and_register(
        &mut pass,
        config.widgets.iter().map(|w| (w.key.as_str(), &w.config)),
        |key: &str| config.is_widget_active(key),
    )?;

    let page = PageState {
        clean_url: url.to_string(),
        request_uri: url.to_string(),
        ..PageState::default()
    };
    let mut html = String::new();
    for widget in config.widgets.iter().filter(|w| w.active) {
        presenter.display(
            &mut pass,
            &widget.config,
            &WidgetChrome::default(),
            &page,
            DisplayMode::Sidebar,
            &mut html,
        )?;
    }
    Ok((html, pass))
}

#[test]
fn test_full_page_render() -> Result<()> {
    let temp_dir = tempdir().unwrap();
    let config = site(temp_dir.path())?;
    let loader =
        RendererLoader::new(config.storage_roots(), RendererFactoryRegistry::with_builtins());

    let (html, pass) = render_page(&config, &loader, "https://site.test/news/", "fr")?;

    assert!(html.contains("Languages"));
    assert!(html.contains(r#"id="tr_select0""#));
    assert!(html.contains(r#"id="tr_flags1""#));
    assert!(html.contains(r#"href="https://site.test/news/?lang=fr""#));
    assert!(!html.contains("lang=de"));
    assert!(html.contains(r#"href="/langswitch/default""#));
    assert_eq!(pass.draw_count(), 2);

    let handles: Vec<&str> = pass.assets().iter().map(|r| r.handle.as_str()).collect();
    assert_eq!(
        handles,
        vec!["dropdown_tpw_dropdown", "dropdown_tpw_dropdown_js", "flags_tpw_flags"]
    );
    Ok(())
}

#[tokio::test]
async fn test_concurrent_passes_are_independent() -> Result<()> {
    let temp_dir = tempdir().unwrap();
    let config = Arc::new(site(temp_dir.path())?);
    let loader = Arc::new(RendererLoader::new(
        config.storage_roots(),
        RendererFactoryRegistry::with_builtins(),
    ));

    let requests = [
        ("https://site.test/a/", "en"),
        ("https://site.test/b/", "fr"),
        ("https://site.test/c/", "en"),
        ("https://site.test/d/", "fr"),
    ];
    let mut handles = Vec::new();
    for (url, target) in requests {
        let config = Arc::clone(&config);
        let loader = Arc::clone(&loader);
        handles.push(tokio::task::spawn_blocking(move || {
            render_page(&config, &loader, url, target)
                .map(|(html, pass)| (url, target, html, pass.draw_count()))
        }));
    }

    for handle in handles {
        let (url, target, html, draws) = handle.await.expect("render task panicked")?;
        assert_eq!(draws, 2, "each request numbers its own placements");
        assert!(html.contains(r#"id="tr_select0""#));
        let fr_link = format!(r#"href="{}?lang=fr""#, url);
        assert!(html.contains(&fr_link), "{} missing its own links", url);
        let active_option = if target == "fr" {
            format!(r#"<option value="{}?lang=fr" selected="selected">"#, url)
        } else {
            format!(r#"<option value="{}" selected="selected">"#, url)
        };
        assert!(html.contains(&active_option));
    }
    Ok(())
}
