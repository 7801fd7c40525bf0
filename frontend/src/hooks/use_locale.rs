use crate::config::{GEO_LOOKUP_TIMEOUT_MS, GEO_LOOKUP_URL};
use crate::storage::SlotStorage;
use futures::future::{self, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::Deserialize;
use shared::locale::Locale;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Deserialize)]
struct GeoResponse {
    country_code: Option<String>,
}

/// Resolve the session locale once: a previously persisted choice wins,
/// otherwise a best-effort IP lookup runs in the background. The page renders
/// with the fallback locale immediately; detection never blocks it.
#[hook]
pub fn use_locale() -> UseStateHandle<Locale> {
    let locale = use_state(|| SlotStorage::new().locale().unwrap_or_else(Locale::fallback));

    {
        let locale = locale.clone();
        use_effect_with((), move |_| {
            let storage = SlotStorage::new();
            if storage.locale().is_none() {
                spawn_local(async move {
                    let resolved = match detect_country().await {
                        Some(country) => Locale::from_country(&country),
                        None => Locale::fallback(),
                    };
                    log::info!(
                        "resolved locale: {} / {} / {}",
                        resolved.country, resolved.lang, resolved.currency
                    );
                    storage.set_locale(&resolved);
                    locale.set(resolved);
                });
            }
            || ()
        });
    }

    locale
}

/// Country code from the IP lookup, or `None` on any failure or timeout.
async fn detect_country() -> Option<String> {
    let request = Box::pin(Request::get(GEO_LOOKUP_URL).send());
    let timeout = Box::pin(TimeoutFuture::new(GEO_LOOKUP_TIMEOUT_MS));

    match future::select(request, timeout).await {
        Either::Left((Ok(response), _)) if response.ok() => response
            .json::<GeoResponse>()
            .await
            .ok()
            .and_then(|geo| geo.country_code),
        Either::Left((Ok(response), _)) => {
            log::warn!("country lookup failed: HTTP {}", response.status());
            None
        }
        Either::Left((Err(err), _)) => {
            log::warn!("country lookup failed: {err}");
            None
        }
        Either::Right(_) => {
            log::warn!("country lookup timed out after {GEO_LOOKUP_TIMEOUT_MS}ms");
            None
        }
    }
}
