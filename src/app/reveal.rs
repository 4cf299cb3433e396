use std::time::Duration;

use leptos::{html, prelude::*};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{IntersectionObserver, IntersectionObserverEntry};

use crate::reveal::{reveal_class, RevealState, SlideFrom};

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Keeps its children hidden until they first scroll into view, then plays
/// a one-time fade/slide-in after `delay` milliseconds.
#[component]
pub fn Reveal(
    children: Children,
    #[prop(optional)] delay: u64,
    #[prop(optional)] slide_from: SlideFrom,
) -> impl IntoView {
    let container_ref = NodeRef::<html::Div>::new();
    let (revealed, set_revealed) = signal(false);
    let state = StoredValue::new(RevealState::new(delay));
    let observer = StoredValue::new_local(None::<(IntersectionObserver, ObserverCallback)>);
    let timer = StoredValue::new_local(None::<TimeoutHandle>);

    let finish = move || {
        if state.try_update_value(|s| s.complete()).unwrap_or(false) {
            set_revealed.try_set(true);
        }
    };

    Effect::new(move |_| {
        let Some(el) = container_ref.get() else {
            return;
        };
        if observer.with_value(|o| o.is_some()) || state.with_value(|s| s.is_revealed()) {
            return;
        }

        let callback: ObserverCallback = Closure::new(
            move |entries: js_sys::Array, obs: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry = entry.unchecked_into::<IntersectionObserverEntry>();
                    let Some(wait) = state
                        .try_update_value(|s| s.handle_intersection(entry.is_intersecting()))
                        .flatten()
                    else {
                        continue;
                    };
                    // one shot: stop watching before the delay runs out
                    obs.unobserve(&entry.target());
                    match set_timeout_with_handle(finish, Duration::from_millis(wait)) {
                        Ok(handle) => {
                            timer.try_set_value(Some(handle));
                        }
                        Err(_) => finish(),
                    }
                }
            },
        );
        match IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
            Ok(obs) => {
                obs.observe(&el);
                observer.set_value(Some((obs, callback)));
            }
            Err(_) => {
                // no intersection support: never leave content hidden
                log::debug!("intersection observer unavailable, revealing immediately");
                finish();
            }
        }
    });

    on_cleanup(move || {
        if let Some(Some((obs, _callback))) = observer.try_update_value(|o| o.take()) {
            obs.disconnect();
        }
        if let Some(Some(handle)) = timer.try_update_value(|t| t.take()) {
            handle.clear();
        }
    });

    view! {
        <div node_ref=container_ref class=move || reveal_class(revealed.get(), slide_from)>
            {children()}
        </div>
    }
}
