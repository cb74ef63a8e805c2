//! Toast stack rendering the shared notification queue.

#[cfg(test)]
#[path = "toaster_test.rs"]
mod toaster_test;

use std::collections::HashSet;

use leptos::prelude::*;

use crate::state::toast::{ToastSeverity, ToastState};

/// How long a toast stays up before auto-dismissal.
#[cfg(feature = "csr")]
const TOAST_TTL_MS: u64 = 4000;

/// Reconcile the scheduled-timer set with the visible queue: entries for
/// dismissed toasts are dropped, and each live id not yet scheduled is
/// returned. Ids are never reused, so pruning cannot resurrect a timer.
#[cfg_attr(not(feature = "csr"), allow(dead_code))]
fn fresh_unscheduled(scheduled: &mut HashSet<u64>, live: &[u64]) -> Vec<u64> {
    scheduled.retain(|id| live.contains(id));
    live.iter()
        .copied()
        .filter(|id| scheduled.insert(*id))
        .collect()
}

/// Fixed-position toast stack. Each enqueued toast gets an expiry timer the
/// first time it is seen; the close control dismisses it early.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    #[cfg(feature = "csr")]
    {
        let scheduled = StoredValue::new(HashSet::<u64>::new());
        Effect::new(move || {
            let ids: Vec<u64> = toasts.get().toasts.iter().map(|t| t.id).collect();
            let fresh = scheduled
                .try_update_value(|s| fresh_unscheduled(s, &ids))
                .unwrap_or_default();
            for id in fresh {
                leptos::task::spawn_local(async move {
                    gloo_timers::future::sleep(std::time::Duration::from_millis(TOAST_TTL_MS))
                        .await;
                    toasts.update(|t| t.dismiss(id));
                });
            }
        });
    }

    view! {
        <div class="toaster">
            {move || {
                toasts
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let severity_class = match toast.severity {
                            ToastSeverity::Info => "toast",
                            ToastSeverity::Success => "toast toast--success",
                            ToastSeverity::Destructive => "toast toast--destructive",
                        };
                        let id = toast.id;
                        view! {
                            <div class=severity_class>
                                <div class="toast__body">
                                    <p class="toast__title">{toast.title}</p>
                                    <p class="toast__description">{toast.description}</p>
                                </div>
                                <button
                                    class="toast__close"
                                    on:click=move |_| toasts.update(|t| t.dismiss(id))
                                >
                                    "\u{2715}"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
