use elective_types::{AppRoute, Elective};
use leptos::prelude::*;

#[server]
async fn get_electives() -> Result<Vec<Elective>, ServerFnError> {
    use elective_types::ElectiveCatalog;

    let catalog = use_context::<ElectiveCatalog>()
        .ok_or_else(|| ServerFnError::new("catalog unavailable"))?;

    Ok(catalog.all().to_vec())
}

pub(crate) fn credits_label(credits: u32) -> String {
    format!("{credits} credit{}", if credits == 1 { "" } else { "s" })
}

#[component]
pub fn ElectivesPage() -> impl IntoView {
    #[allow(unused_variables)]
    let (electives, setElectives) = signal(Option::<Result<Vec<Elective>, String>>::None);

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen_futures::spawn_local;

        spawn_local(async move {
            let result = get_electives().await.map_err(|e| e.to_string());
            setElectives.set(Some(result));
        });
    }

    view! {
        <div class="dashboard-header">
            <h1>"Electives"</h1>
            <p class="subtitle">"Courses open for enrollment this term"</p>
        </div>
        {move || {
            match electives.get() {
                None => {
                    view! {
                        <div class="loading">
                            <div class="spinner"></div>
                            "Loading electives..."
                        </div>
                    }
                        .into_any()
                }
                Some(Err(e)) => {
                    view! {
                        <div class="card">
                            <p style="color: var(--danger)">"Failed to load electives: " {e}</p>
                        </div>
                    }
                        .into_any()
                }
                Some(Ok(list)) if list.is_empty() => {
                    view! {
                        <div class="card">
                            <div class="card-title">"No Electives"</div>
                            <p style="color: var(--text-secondary);">
                                "No electives are offered at the moment."
                            </p>
                        </div>
                    }
                        .into_any()
                }
                Some(Ok(list)) => {
                    view! {
                        <div class="elective-grid">
                            {list
                                .into_iter()
                                .map(|entry| {
                                    let href = AppRoute::ElectiveDetail {
                                        elective: entry.slug.clone(),
                                    }
                                        .href();
                                    view! {
                                        <a class="card elective-card" href=href>
                                            <div class="card-title">{entry.title.clone()}</div>
                                            <p class="elective-summary">{entry.summary.clone()}</p>
                                            <span class="elective-credits">
                                                {credits_label(entry.credits)}
                                            </span>
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }
            }
        }}
    }
}
