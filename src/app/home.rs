use std::time::Duration;

use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions};

use super::about::About;
use super::contact::Contact;
use super::hero::Hero;
use super::hobby::Hobby;
use super::nav::NavBar;
use super::projects::Projects;
use super::skills::Skills;
use crate::sections::{Section, SectionBounds, SectionTracker};

/// How long the hero waits before playing its entrance, in milliseconds.
const HERO_LOAD_DELAY_MS: u64 = 100;

/// The single page. Owns the active-section tracker, the mobile menu flag
/// and the hero load timer; everything below it is presentational.
#[component]
pub fn HomePage() -> impl IntoView {
    let (active, set_active) = signal(Section::Hero);
    let (menu_open, set_menu_open) = signal(false);
    let (hero_loaded, set_hero_loaded) = signal(false);

    let tracker = StoredValue::new(SectionTracker::new());
    let hero_timer = StoredValue::new_local(None::<TimeoutHandle>);

    let sync_active = move || {
        let scroll_y = match window().scroll_y() {
            Ok(y) => y,
            Err(_) => return,
        };
        tracker.update_value(|t| {
            let section = t.handle_scroll(scroll_y, measured_bounds);
            if active.get_untracked() != section {
                set_active(section);
            }
        });
    };

    let _ = use_event_listener(use_window(), ev::scroll, move |_| sync_active());

    Effect::new(move |_| {
        let reveal_hero = move || {
            set_hero_loaded.try_set(true);
        };
        match set_timeout_with_handle(reveal_hero, Duration::from_millis(HERO_LOAD_DELAY_MS)) {
            Ok(handle) => hero_timer.set_value(Some(handle)),
            Err(_) => reveal_hero(),
        }
        sync_active();
        if let Some(section) = fragment_section() {
            scroll_to_section(section);
        }
    });

    on_cleanup(move || {
        if let Some(Some(handle)) = hero_timer.try_update_value(|timer| timer.take()) {
            handle.clear();
        }
    });

    let activate = move |section: Section| {
        scroll_to_section(section);
        set_menu_open(false);
    };

    view! {
        <div class="min-h-screen bg-mist">
            <NavBar active=active menu_open=menu_open set_menu_open=set_menu_open activate=activate />
            <Hero loaded=hero_loaded />
            <About />
            <Projects />
            <Skills />
            <Hobby />
            <Contact />
            <Footer />
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="py-8 bg-night text-mist transition-all duration-500">
            <div class="container mx-auto px-4 text-center">
                <p>"© 2024 渋谷佳吾. All rights reserved."</p>
                <p class="mt-2 text-xs text-steel">{format!("Built {}", env!("BUILD_DATE"))}</p>
            </div>
        </footer>
    }
}

/// Measures a section's layout box, `None` while it isn't mounted.
fn measured_bounds(section: Section) -> Option<SectionBounds> {
    let el = document().get_element_by_id(section.id())?;
    let el = el.dyn_into::<HtmlElement>().ok()?;
    Some(SectionBounds {
        top: el.offset_top() as f64,
        height: el.offset_height() as f64,
    })
}

/// Smooth-scrolls the viewport to a section, skipping targets that aren't
/// in the document.
fn scroll_to_section(section: Section) {
    let el = if let Some(el) = document().get_element_by_id(section.id()) {
        el
    } else {
        log::debug!("section {section} is not mounted, ignoring activation");
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Reads the section named by the URL fragment, if there is a valid one.
fn fragment_section() -> Option<Section> {
    let hash = window().location().hash().ok()?;
    let raw = hash.trim_start_matches('#');
    if raw.is_empty() {
        return None;
    }
    match Section::try_from(raw) {
        Ok(section) => Some(section),
        Err(err) => {
            log::debug!("ignoring location fragment: {err}");
            None
        }
    }
}
