#![allow(non_snake_case)]

#[cfg(feature = "ssr")]
mod config;

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use elective_types::{AccessToken, ElectiveCatalog};
    use elective_ui::{shell, App};
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use tower_http::trace::TraceLayer;
    use tracing_subscriber::{fmt, EnvFilter};

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let configPath = config::path_from_args(&args);

    let appConfig = config::load(&configPath);
    let addr = appConfig.server.addr();
    tracing::info!("loaded config from {configPath}: bind={addr}");

    let catalog = ElectiveCatalog::new(appConfig.electives)
        .unwrap_or_else(|e| panic!("invalid electives in {configPath}: {e}"));
    tracing::info!("serving {} electives", catalog.len());

    let accessToken = AccessToken(appConfig.auth.token);

    let conf = get_configuration(None).expect("failed to load Leptos configuration");
    let leptosOptions = conf.leptos_options;

    let routes = generate_route_list(App);

    // Server functions and SSR both read the catalog and token from context.
    let app = Router::new()
        .leptos_routes_with_context(
            &leptosOptions,
            routes,
            move || {
                provide_context(catalog.clone());
                provide_context(accessToken.clone());
            },
            {
                let leptosOptions = leptosOptions.clone();
                move || shell(leptosOptions.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptosOptions)
        .layer(TraceLayer::new_for_http());

    tracing::info!("listening on {addr}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind to {addr}: {e}"));
    axum::serve(listener, app.into_make_service())
        .await
        .expect("server exited with error");
}

#[cfg(not(feature = "ssr"))]
fn main() {}
