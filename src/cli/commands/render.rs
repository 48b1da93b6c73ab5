//! Render command handler
//!
//! Loads a JSON tree, converts it to a graph, prints the viewer URL (or the
//! document itself) and hands the URL to the browser when enabled.

use rbviz::config::Config;
use rbviz::core::error::VizError;
use rbviz::core::models::load_tree;
use rbviz::core::pipeline::render_tree;
use rbviz::core::render::RenderFormat;
use rbviz::core::validate::validate;
use rbviz::core::viewer::{BrowserOpener, NoopOpener, SystemBrowser};
use rbviz::{debug, error, info, verbose, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Per-invocation options that are not persisted in config
#[derive(Debug, Default)]
pub struct RenderOptions {
    /// Also write the document here
    pub output: Option<PathBuf>,
    /// Print the document instead of the URL
    pub print_document: bool,
}

/// Run the render command, exiting with status 1 on failure.
pub fn run(input_file: &Path, options: &RenderOptions, config: &Config) {
    let opener: &dyn BrowserOpener = if config.viewer.open_browser {
        &SystemBrowser
    } else {
        &NoopOpener
    };

    if let Err(err) = render(input_file, options, config, opener) {
        error!("Rendering failed for {}: {err}", input_file.display());
        eprintln!("✗ {err}");
        std::process::exit(1);
    }
}

/// Load, convert, serialize and show one tree
///
/// # Errors
/// Returns an error if the input cannot be read or parsed, the configured
/// format is unknown, or the output file cannot be written
pub fn render(
    input_file: &Path,
    options: &RenderOptions,
    config: &Config,
    opener: &dyn BrowserOpener,
) -> Result<(), VizError> {
    let format: RenderFormat = config.viewer.format.parse()?;

    let tree = load_tree(input_file)?;
    match &tree {
        Some(root) => info!(
            "Tree loaded: {} ({} nodes, height {})",
            input_file.display(),
            root.size(),
            root.height()
        ),
        None => info!("Tree loaded: {} (empty)", input_file.display()),
    }

    if config.viewer.warn_invalid {
        let violations = validate(tree.as_ref());
        if !violations.is_empty() {
            warn!(
                "rendering an invalid red-black tree ({} violation(s)); run `rbviz check` for details",
                violations.len()
            );
            for violation in &violations {
                debug!("  {violation}");
            }
        }
    }

    let rendered = render_tree(tree.as_ref(), format, &config.viewer.base_url);
    verbose!(
        "Graph: {} vertices, {} edges",
        rendered.graph.vertices().len(),
        rendered.graph.edges().len()
    );

    if let Some(path) = &options.output {
        let path = output_path(path, format);
        fs::write(&path, &rendered.document).map_err(|source| VizError::Io {
            path: path.clone(),
            source,
        })?;
        info!("Document written: {}", path.display());
    }

    if options.print_document {
        print!("{}", rendered.document);
        return Ok(());
    }

    println!("{}", rendered.url);
    // the URL is already on stdout, so a browser failure is not fatal
    if let Err(err) = opener.open(&rendered.url) {
        warn!("{err}");
    }
    Ok(())
}

/// `path` as given, or with the format's extension when it has none
fn output_path(path: &Path, format: RenderFormat) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(format.extension())
    }
}
