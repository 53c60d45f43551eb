//! Serve command - static server for the compiled site

use std::path::Path;

use aydocs_core::Config;
use color_eyre::eyre::{Result, WrapErr};
use tokio::net::TcpListener;

use crate::server::create_router;

/// Run the serve command.
///
/// `port` and `host` override the `[server]` section when given.
pub async fn run(config_path: &Path, port: Option<u16>, host: Option<String>) -> Result<()> {
    tracing::info!(?config_path, ?port, ?host, "Starting server");

    let mut config = Config::load_with_env(config_path).wrap_err("Failed to load configuration")?;
    if let Some(port) = port {
        config.server.port = port;
    }
    if let Some(host) = host {
        config.server.host = host;
    }

    let pkg_dir = Path::new(&config.server.site_root).join(&config.server.pkg_dir);
    if !pkg_dir.is_dir() {
        tracing::warn!(path = %pkg_dir.display(), "compiled assets not found");
        println!();
        println!(
            "  ⚠ {} does not exist; run `cargo leptos build` first",
            pkg_dir.display()
        );
    }

    let app = create_router(&config);
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let listener = TcpListener::bind(&addr)
        .await
        .wrap_err_with(|| format!("Failed to bind to {addr}"))?;

    println!();
    println!("  Serving {} at http://{addr}", config.site.title);
    println!("  Press Ctrl+C to stop");
    println!();

    axum::serve(listener, app).await.wrap_err("Server error")?;

    Ok(())
}
