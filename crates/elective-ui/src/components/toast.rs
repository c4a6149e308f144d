use leptos::prelude::*;

const TOAST_LIFETIME: std::time::Duration = std::time::Duration::from_secs(5);

#[derive(Clone, Debug, PartialEq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Clone, Debug)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub level: ToastLevel,
}

#[derive(Clone, Copy)]
pub struct ToastContext {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl ToastContext {
    fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    /// Shows `message` and schedules its dismissal.
    pub fn push(&self, message: String, level: ToastLevel) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.toasts.update(|toasts| {
            toasts.push(Toast { id, message, level });
        });

        let toasts = self.toasts;
        set_timeout(
            move || {
                toasts.update(|toasts| toasts.retain(|t| t.id != id));
            },
            TOAST_LIFETIME,
        );
    }
}

pub fn use_toasts() -> ToastContext {
    expect_context::<ToastContext>()
}

/// Provides toast context and renders the toast container.
#[component]
pub fn ToastProvider(children: Children) -> impl IntoView {
    let ctx = ToastContext::new();
    provide_context(ctx);

    view! {
        {children()}
        <div class="toast-container">
            <For
                each=move || ctx.toasts.get()
                key=|toast| toast.id
                let:toast
            >
                <div class=match toast.level {
                    ToastLevel::Success => "toast toast-success",
                    ToastLevel::Error => "toast toast-error",
                }>
                    {toast.message.clone()}
                </div>
            </For>
        </div>
    }
}
