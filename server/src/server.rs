//! Static server for the compiled site.
//!
//! Compiled assets live under `<site_root>/<pkg_dir>` and 404 when missing.
//! Any other path that is not a file under `site_root` gets the HTML shell,
//! so client-side routes such as `/docs/builtins` survive a reload.

use std::{path::PathBuf, sync::Arc};

use aydocs_core::{Config, SiteConfig};
use axum::{
    Router,
    extract::State,
    response::Html,
    routing::{MethodRouter, get},
};
use tower_http::{services::ServeDir, trace::TraceLayer};

/// Base name of the compiled `.js`, `.wasm` and `.css` files.
pub const OUTPUT_NAME: &str = "aydocs";

/// Create the site router.
pub fn create_router(config: &Config) -> Router {
    let site_root = PathBuf::from(&config.server.site_root);
    let pkg_dir = config.server.pkg_dir.trim_matches('/');

    let shell = Arc::new(render_shell(&config.site, pkg_dir));
    let shell_service: MethodRouter = get(serve_shell).with_state(shell);

    let mut router = Router::new();
    if !pkg_dir.is_empty() {
        router = router.nest_service(&format!("/{pkg_dir}"), ServeDir::new(site_root.join(pkg_dir)));
    }

    router
        .fallback_service(ServeDir::new(&site_root).fallback(shell_service))
        .layer(TraceLayer::new_for_http())
}

async fn serve_shell(State(shell): State<Arc<String>>) -> Html<String> {
    Html(shell.as_str().to_owned())
}

/// HTML document that boots the client bundle.
pub fn render_shell(site: &SiteConfig, pkg_dir: &str) -> String {
    let pkg = if pkg_dir.is_empty() {
        String::new()
    } else {
        format!("/{pkg_dir}")
    };
    let title = html_escape(&site.title);
    let description = site
        .description
        .as_deref()
        .map(|d| format!(r#"<meta name="description" content="{}"/>"#, html_escape(d)))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8"/>
<meta name="viewport" content="width=device-width, initial-scale=1"/>
<title>{title}</title>
{description}
<link rel="stylesheet" href="{pkg}/{OUTPUT_NAME}.css"/>
<link rel="modulepreload" href="{pkg}/{OUTPUT_NAME}.js"/>
<link rel="preload" href="{pkg}/{OUTPUT_NAME}.wasm" as="fetch" type="application/wasm" crossorigin=""/>
<script type="module">
import init from '{pkg}/{OUTPUT_NAME}.js';
init({{ module_or_path: '{pkg}/{OUTPUT_NAME}.wasm' }});
</script>
</head>
<body></body>
</html>
"#
    )
}

/// Escape HTML special characters.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use std::fs;

    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use tempfile::TempDir;
    use tower::ServiceExt;

    use super::*;

    fn site_config(site_root: &std::path::Path) -> Config {
        let toml = format!(
            r#"
[site]
title = "AY <Docs>"
base_url = "https://ay.example.com"
description = "Docs & reference"

[server]
site_root = "{}"
"#,
            site_root.display()
        );
        Config::from_toml_str(&toml).unwrap()
    }

    fn site_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("pkg")).unwrap();
        fs::write(dir.path().join("pkg/aydocs.js"), "export default function init() {}").unwrap();
        fs::write(dir.path().join("ayscript.jpg"), [0xff, 0xd8, 0xff]).unwrap();
        dir
    }

    async fn get_path(router: Router, path: &str) -> (StatusCode, String) {
        let response = router
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8_lossy(&body).into_owned())
    }

    #[test]
    fn test_render_shell() {
        let dir = site_dir();
        let config = site_config(dir.path());
        let html = render_shell(&config.site, "pkg");

        assert!(html.contains("<title>AY &lt;Docs&gt;</title>"));
        assert!(html.contains(r#"content="Docs &amp; reference""#));
        assert!(html.contains("import init from '/pkg/aydocs.js'"));
        assert!(html.contains("module_or_path: '/pkg/aydocs.wasm'"));
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("<script>"), "&lt;script&gt;");
        assert_eq!(html_escape("a & 'b'"), "a &amp; &#x27;b&#x27;");
    }

    #[tokio::test]
    async fn test_client_routes_get_the_shell() {
        let dir = site_dir();
        let router = create_router(&site_config(dir.path()));

        for path in ["/", "/docs", "/docs/builtins", "/no/such/page"] {
            let (status, body) = get_path(router.clone(), path).await;
            assert_eq!(status, StatusCode::OK, "{path}");
            assert!(body.contains("/pkg/aydocs.js"), "{path}");
        }
    }

    #[tokio::test]
    async fn test_static_files_are_served() {
        let dir = site_dir();
        let router = create_router(&site_config(dir.path()));

        let (status, body) = get_path(router.clone(), "/pkg/aydocs.js").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("export default function init"));

        let (status, _) = get_path(router, "/ayscript.jpg").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_missing_asset_is_not_found() {
        let dir = site_dir();
        let router = create_router(&site_config(dir.path()));

        let (status, body) = get_path(router, "/pkg/aydocs.wasm").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(!body.contains("<!DOCTYPE html>"));
    }
}
