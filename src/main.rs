#![recursion_limit = "512"]

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    // Load .env file (if exists)
    let _ = dotenvy::dotenv();

    // RUST_LOG wins, otherwise info
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = serve().await {
        tracing::error!("Server failed: {}", err);
        std::process::exit(1);
    }
}

#[cfg(feature = "ssr")]
async fn serve() -> Result<(), Box<dyn std::error::Error>> {
    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use paperdesk::app::*;
    use paperdesk::core::capture::{CaptureState, SheetClient, capture_router};
    use paperdesk::core::config::Config;
    use paperdesk::core::security::{SecurityPolicy, security_headers};
    use tower_http::compression::{CompressionLayer, CompressionLevel};
    use tower_http::services::ServeDir;
    use tower_http::trace::TraceLayer;

    // Load application config from environment variables
    let config = Config::from_env();

    // Log config status (without revealing secrets)
    tracing::info!(
        "Config loaded: capture={}, hsts={}, surface_capture_failures={}",
        config.has_capture(),
        config.hsts,
        config.surface_capture_failures
    );
    if !config.has_capture() {
        tracing::warn!("Email capture is not configured; signups will answer 500");
    }

    // Load configuration from Cargo.toml [package.metadata.leptos]
    // Can be overridden via LEPTOS_SITE_ADDR env var
    let conf = get_configuration(None)?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    // Serve pre-compressed static assets from /pkg when they exist
    let pkg_service = ServeDir::new(format!("{}/pkg", leptos_options.site_root))
        .precompressed_br()
        .precompressed_gzip();

    let leptos_router = Router::new()
        .nest_service("/pkg", pkg_service)
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        // Anything else under the site root (audio, icons, documents) or a 404 page
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options);

    let security = SecurityPolicy { hsts: config.hsts };
    let http = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(10))
        .build()?;
    let capture_api = capture_router(CaptureState::new(config, SheetClient::new(http)));

    let app = Router::new()
        .merge(capture_api)
        .merge(leptos_router)
        .layer(
            CompressionLayer::new()
                .br(true)
                .gzip(true)
                .quality(CompressionLevel::Best),
        )
        // Headers go on every response, including static files and errors
        .layer(axum::middleware::from_fn_with_state(
            security,
            security_headers,
        ))
        .layer(TraceLayer::new_for_http());

    tracing::info!("listening on http://{}", &addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
