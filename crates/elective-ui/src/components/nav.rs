use elective_types::{resolve, AppRoute};
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::toast::{use_toasts, ToastLevel};
use crate::store::use_auth_store;

#[component]
pub fn Nav() -> impl IntoView {
    let pathname = use_location().pathname;
    let auth = use_auth_store();
    let toasts = use_toasts();

    let currentRoute = move || pathname.with(|path| resolve(path));
    let isActive = move |section: AppRoute| {
        let active = matches!(
            (currentRoute(), section),
            (Some(AppRoute::Electives), AppRoute::Electives)
                | (Some(AppRoute::ElectiveDetail { .. }), AppRoute::Electives)
                | (Some(AppRoute::Login), AppRoute::Login)
        );
        if active {
            "nav-item active"
        } else {
            "nav-item"
        }
    };

    let signOut = move |_: leptos::ev::MouseEvent| {
        auth.logout();
        toasts.push("Signed out".into(), ToastLevel::Success);
    };

    view! {
        <nav class="nav-sidebar">
            <div class="nav-brand">
                <div class="brand-icon">"E"</div>
                <span class="brand-text">"Electives"</span>
            </div>
            <ul class="nav-links">
                <li class=move || isActive(AppRoute::Electives)>
                    <a href=AppRoute::Electives.href()>
                        <span class="nav-icon">"\u{25A4}"</span>
                        <span>"Electives"</span>
                    </a>
                </li>
                {move || {
                    if auth.is_logged_in() {
                        view! {
                            <li class="nav-item">
                                <button class="btn btn-link" on:click=signOut>
                                    <span class="nav-icon">"\u{21E5}"</span>
                                    <span>"Sign out"</span>
                                </button>
                            </li>
                        }
                            .into_any()
                    } else {
                        view! {
                            <li class=move || isActive(AppRoute::Login)>
                                <a href=AppRoute::Login.href()>
                                    <span class="nav-icon">"\u{21E4}"</span>
                                    <span>"Sign in"</span>
                                </a>
                            </li>
                        }
                            .into_any()
                    }
                }}
            </ul>
        </nav>
    }
}
