use elective_types::{AppRoute, ELECTIVES_PATH, ELECTIVES_SEGMENT, ELECTIVE_PARAM, LOGIN_SEGMENT};
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Redirect, Route, Router, Routes},
    hooks::use_params_map,
    ParamSegment, StaticSegment,
};

use crate::components::nav::Nav;
use crate::components::toast::ToastProvider;
use crate::pages::elective_detail::ElectiveDetailPage;
use crate::pages::electives::ElectivesPage;
use crate::pages::login::LoginPage;
use crate::store::AuthProvider;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <link rel="icon" href="/favicon.svg" type="image/svg+xml" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/elective-console.css" />
        <Title text="Electives" />
        <AuthProvider>
            <ToastProvider>
                <Router>
                    <Routes fallback=|| view! { <NotFoundView /> }>
                        <Route path=StaticSegment("") view=RootRedirect />
                        <Route path=StaticSegment(ELECTIVES_SEGMENT) view=ElectivesView />
                        <Route
                            path=(StaticSegment(ELECTIVES_SEGMENT), ParamSegment(ELECTIVE_PARAM))
                            view=ElectiveDetailView
                        />
                        <Route path=StaticSegment(LOGIN_SEGMENT) view=LoginPage />
                    </Routes>
                </Router>
            </ToastProvider>
        </AuthProvider>
    }
}

#[component]
fn RootRedirect() -> impl IntoView {
    view! { <Redirect path=ELECTIVES_PATH /> }
}

#[component]
fn ElectivesView() -> impl IntoView {
    view! {
        <div class="app-layout">
            <Nav />
            <main class="main-content">
                <ElectivesPage />
            </main>
        </div>
    }
}

/// Forwards the `:elective` path segment to the detail page as its input.
#[component]
fn ElectiveDetailView() -> impl IntoView {
    let params = use_params_map();
    let elective = move || params.with(|map| map.get(ELECTIVE_PARAM).unwrap_or_default());

    view! {
        <div class="app-layout">
            <Nav />
            <main class="main-content">
                {move || view! { <ElectiveDetailPage elective=elective() /> }}
            </main>
        </div>
    }
}

#[component]
fn NotFoundView() -> impl IntoView {
    view! {
        <div class="app-layout">
            <Nav />
            <main class="main-content">
                <div class="card">
                    <div class="card-title">"Page not found"</div>
                    <a href=AppRoute::Electives.href()>"Back to electives"</a>
                </div>
            </main>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use elective_types::ROUTES;
    use std::collections::BTreeSet;

    #[test]
    fn test_router_paths_match_route_table() {
        let owner = Owner::new();
        let listing = owner.with(|| leptos_axum::generate_route_list(App));

        let routerPaths: BTreeSet<String> =
            listing.iter().map(|route| route.path().to_string()).collect();
        let tablePaths: BTreeSet<String> =
            ROUTES.iter().map(|entry| entry.path.to_string()).collect();

        assert_eq!(routerPaths, tablePaths);
    }
}
