use elective_types::AuthState;
use leptos::prelude::*;

/// Reactive session store. Constructed once per app session and handed to
/// the component tree through context.
#[derive(Clone, Copy)]
pub struct AuthStore {
    state: RwSignal<AuthState>,
}

impl AuthStore {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(AuthState::default()),
        }
    }

    pub fn login(&self, token: String) {
        self.state.update(|state| state.login(token));
    }

    /// Clears the session. Observers are only notified when a session existed.
    pub fn logout(&self) {
        self.state.maybe_update(|state| {
            let wasLoggedIn = state.is_logged_in();
            state.logout();
            wasLoggedIn
        });
    }

    pub fn is_logged_in(&self) -> bool {
        self.state.with(AuthState::is_logged_in)
    }

    pub fn token(&self) -> Option<String> {
        self.state.with(|state| state.token().map(str::to_owned))
    }

    pub fn state(&self) -> AuthState {
        self.state.get()
    }
}

impl Default for AuthStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Retrieves the session store provided by [`AuthProvider`].
pub fn use_auth_store() -> AuthStore {
    expect_context::<AuthStore>()
}

/// Creates the session store and provides it to `children`.
/// Place this once near the root of your app.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    provide_context(AuthStore::new());

    children()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_then_logout() {
        let owner = Owner::new();
        owner.with(|| {
            let store = AuthStore::new();
            assert!(!store.is_logged_in());

            store.login("abc".into());
            assert!(store.is_logged_in());
            assert_eq!(store.token().as_deref(), Some("abc"));

            store.logout();
            assert!(!store.is_logged_in());
            assert_eq!(store.token(), None);
        });
    }

    #[test]
    fn test_double_logout_matches_single() {
        let owner = Owner::new();
        owner.with(|| {
            let store = AuthStore::new();
            store.login("abc".into());
            store.logout();
            let afterOnce = store.state();

            store.logout();
            assert_eq!(store.state(), afterOnce);
            assert_eq!(afterOnce, AuthState::LoggedOut);
        });
    }

    #[test]
    fn test_repeated_logout_does_not_renotify() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;

        let owner = Owner::new();
        owner.with(|| {
            let store = AuthStore::new();
            store.login("abc".into());

            let runs = Arc::new(AtomicUsize::new(0));
            let loggedIn = Memo::new({
                let runs = Arc::clone(&runs);
                move |_| {
                    runs.fetch_add(1, Ordering::SeqCst);
                    store.is_logged_in()
                }
            });

            assert!(loggedIn.get());
            assert_eq!(runs.load(Ordering::SeqCst), 1);

            store.logout();
            assert!(!loggedIn.get());
            assert_eq!(runs.load(Ordering::SeqCst), 2);

            store.logout();
            assert!(!loggedIn.get());
            assert_eq!(runs.load(Ordering::SeqCst), 2);
        });
    }

    #[test]
    fn test_context_shares_one_store() {
        let owner = Owner::new();
        owner.with(|| {
            provide_context(AuthStore::new());

            use_auth_store().login("shared".into());
            assert_eq!(use_auth_store().token().as_deref(), Some("shared"));
        });
    }
}
