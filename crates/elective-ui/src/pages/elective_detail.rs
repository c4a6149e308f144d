use elective_types::{AppRoute, Elective};
use leptos::prelude::*;

use crate::pages::electives::credits_label;

#[server]
async fn get_elective(slug: String) -> Result<Option<Elective>, ServerFnError> {
    use elective_types::ElectiveCatalog;

    let catalog = use_context::<ElectiveCatalog>()
        .ok_or_else(|| ServerFnError::new("catalog unavailable"))?;

    Ok(catalog.find(&slug).cloned())
}

/// Detail view for a single elective, addressed by its slug.
#[component]
pub fn ElectiveDetailPage(
    /// Slug taken from the `:elective` path segment
    elective: String,
) -> impl IntoView {
    #[allow(unused_variables)]
    let (details, setDetails) = signal(Option::<Result<Option<Elective>, String>>::None);

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen_futures::spawn_local;

        let slug = elective.clone();
        spawn_local(async move {
            let result = get_elective(slug).await.map_err(|e| e.to_string());
            setDetails.set(Some(result));
        });
    }

    view! {
        <div class="dashboard-header">
            <a class="back-link" href=AppRoute::Electives.href()>"\u{2190} All electives"</a>
        </div>
        {move || {
            match details.get() {
                None => {
                    view! {
                        <div class="loading">
                            <div class="spinner"></div>
                            "Loading elective..."
                        </div>
                    }
                        .into_any()
                }
                Some(Err(e)) => {
                    view! {
                        <div class="card">
                            <p style="color: var(--danger)">"Failed to load elective: " {e}</p>
                        </div>
                    }
                        .into_any()
                }
                Some(Ok(None)) => {
                    let slug = elective.clone();
                    view! {
                        <div class="card">
                            <div class="card-title">"Elective not found"</div>
                            <p style="color: var(--text-secondary);">
                                "No elective is listed under " <code>{slug}</code>
                            </p>
                        </div>
                    }
                        .into_any()
                }
                Some(Ok(Some(entry))) => {
                    view! {
                        <div class="card">
                            <h1>{entry.title}</h1>
                            <p class="subtitle">
                                {credits_label(entry.credits)}
                                {entry.lecturer.map(|name| format!(" \u{00B7} {name}"))}
                            </p>
                            <p>{entry.summary}</p>
                        </div>
                    }
                        .into_any()
                }
            }
        }}
    }
}
