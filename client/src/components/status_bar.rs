//! Backend liveness indicator.
//!
//! Polls `GET /health` on mount and every 30 seconds afterwards. The probe
//! is informational only; it never gates uploads.

use leptos::prelude::*;

/// Probe outcome: `None` until the first result arrives.
type ProbeResult = Option<bool>;

/// Small header widget showing whether the backend answers its health
/// endpoint.
#[component]
pub fn StatusBar() -> impl IntoView {
    let reachable = RwSignal::new(None::<bool>);

    #[cfg(feature = "csr")]
    {
        let poll_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let poll_alive_task = poll_alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                let probe = crate::net::api::fetch_health().await;
                if !poll_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                reachable.set(Some(probe.is_some()));
                gloo_timers::future::sleep(std::time::Duration::from_secs(30)).await;
                if !poll_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
            }
        });
        on_cleanup(move || poll_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    view! {
        <div class="status-bar">
            <span
                class="status-bar__dot"
                class:status-bar__dot--ok=move || reachable.get() == Some(true)
                class:status-bar__dot--down=move || reachable.get() == Some(false)
            ></span>
            <span class="status-bar__label">{move || status_label(reachable.get())}</span>
        </div>
    }
}

fn status_label(probe: ProbeResult) -> &'static str {
    match probe {
        None => "Comprobando API...",
        Some(true) => "API activa",
        Some(false) => "API no disponible",
    }
}
