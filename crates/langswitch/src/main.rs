mod cli;
mod logging;

use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use log::{debug, error, info, warn};

use langswitch_core::kernel::constants::WIDGETS_DIR;
use langswitch_core::links::UrlRewriter;
use langswitch_core::renderer::{AssetKind, RendererFactoryRegistry};
use langswitch_core::utils::escape_html;
use langswitch_core::widget::{DisplayMode, PageState, PresenterOptions, WidgetChrome};
use langswitch_core::{
    ActiveAssetAggregator, KernelError, LanguageLinkBuilder, RenderPass, RendererCatalog,
    RendererLoader, Result, SwitcherConfig, WidgetPresenter,
};

use crate::cli::{CliArgs, Commands};

/// Options shared by every page of one `render` invocation
#[derive(Debug, Clone)]
struct PageRequest {
    url: String,
    lang: String,
    edit: bool,
    not_found: bool,
    preferred: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    if let Err(e) = logging::init(args.verbose) {
        eprintln!("Warning: {}", e);
    }

    match run(args.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            if e.is_fatal_configuration() {
                // Nothing can be drawn without the fallback renderer
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

async fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Catalog { root } => list_catalog(&root),
        Commands::Links { config, url, lang } => {
            let config = SwitcherConfig::load(&config)?;
            let lang = lang.unwrap_or_else(|| config.default_language.clone());
            print_links(&config, &url, &lang)
        }
        Commands::Render {
            config,
            urls,
            lang,
            edit,
            not_found,
            preferred,
        } => {
            let config = SwitcherConfig::load(&config)?;
            let lang = lang.unwrap_or_else(|| config.default_language.clone());
            let requests = urls
                .into_iter()
                .map(|url| PageRequest {
                    url,
                    lang: lang.clone(),
                    edit,
                    not_found,
                    preferred: preferred.clone(),
                })
                .collect();
            render_pages(Arc::new(config), requests).await
        }
    }
}

fn list_catalog(root: &Path) -> Result<()> {
    let widgets_dir = root.join(WIDGETS_DIR);
    let catalog = RendererCatalog::discover(&widgets_dir);
    if catalog.is_empty() {
        println!("No renderers found in {}", widgets_dir.display());
        return Ok(());
    }

    for descriptor in catalog.iter() {
        println!(
            "{}\t{}\t{}\t{}",
            descriptor.id,
            descriptor.name,
            descriptor.version().unwrap_or("-"),
            descriptor.kind()
        );
    }
    Ok(())
}

fn print_links(config: &SwitcherConfig, url: &str, lang: &str) -> Result<()> {
    let table = config.language_table()?;
    if table.get(lang).is_none() {
        warn!("Language '{}' is not configured; no link will be active", lang);
    }
    let settings = config.link_settings(lang, false);
    let translator = config.translator();
    let rewriter = config.rewriter();
    let links = LanguageLinkBuilder::new(&table, &settings, &translator, &rewriter);

    let mut pass = RenderPass::new();
    for entry in links.build(&mut pass, url).iter() {
        let marker = if entry.active { "*" } else { " " };
        println!("{} {}\t{}\t{}", marker, entry.iso_code, entry.native_label, entry.url);
    }
    Ok(())
}

/// Render each page on its own blocking task with its own [`RenderPass`]
async fn render_pages(config: Arc<SwitcherConfig>, requests: Vec<PageRequest>) -> Result<()> {
    let loader = Arc::new(RendererLoader::new(
        config.storage_roots(),
        RendererFactoryRegistry::with_builtins(),
    ));
    info!(
        "Rendering {} page(s) with {} bundled and {} override renderer(s)",
        requests.len(),
        loader.bundled_catalog().len(),
        loader.override_catalog().len()
    );

    let handles: Vec<_> = requests
        .into_iter()
        .map(|request| {
            let config = Arc::clone(&config);
            let loader = Arc::clone(&loader);
            tokio::task::spawn_blocking(move || {
                let html = render_page(&config, &loader, &request)?;
                Ok::<_, KernelError>((request.url, html))
            })
        })
        .collect();

    for handle in handles {
        let (url, html) = handle
            .await
            .map_err(|e| KernelError::Other(format!("Render task failed: {}", e)))??;
        println!("<!-- {} -->", url);
        print!("{}", html);
    }
    Ok(())
}

fn render_page(
    config: &SwitcherConfig,
    loader: &RendererLoader,
    request: &PageRequest,
) -> Result<String> {
    let table = config.language_table()?;
    let settings = config.link_settings(&request.lang, request.edit);
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

    let clean_url = rewriter.rewrite(
        &request.url,
        &config.home_url,
        config.enable_permalinks_rewrite,
        "",
        false,
    );
    let page = PageState {
        clean_url,
        request_uri: request.url.clone(),
        not_found: request.not_found,
        default_language_cookie: request.preferred.clone(),
        editing_permitted: request.edit,
    };

    let mut body = String::new();
    for widget in config.widgets.iter().filter(|w| w.active) {
        let chrome = WidgetChrome {
            before_widget: format!(
                r#"<div class="widget langswitch" id="{}">"#,
                escape_html(&widget.key)
            ),
            after_widget: "</div>\n".to_string(),
            before_title: "<h3>".to_string(),
            after_title: "</h3>\n".to_string(),
        };
        presenter.display(
            &mut pass,
            &widget.config,
            &chrome,
            &page,
            DisplayMode::Sidebar,
            &mut body,
        )?;
    }
    debug!("Rendered {} placement(s) for {}", pass.draw_count(), request.url);

    // Asset tags go first, as a page head would carry them
    let mut html = String::new();
    for asset in pass.assets().iter() {
        let tag = match asset.kind {
            AssetKind::Stylesheet => format!(
                r#"<link rel="stylesheet" id="{}-css" href="{}?ver={}"/>"#,
                asset.handle, asset.url, asset.version
            ),
            AssetKind::Script => format!(
                r#"<script id="{}" src="{}?ver={}"></script>"#,
                asset.handle, asset.url, asset.version
            ),
        };
        html.push_str(&tag);
        html.push('\n');
    }
    html.push_str(&body);
    Ok(html)
}
