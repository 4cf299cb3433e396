use leptos::prelude::*;

/// Centered section heading with the short underline accent.
#[component]
pub fn SectionHeading(label: &'static str) -> impl IntoView {
    view! {
        <h2 class="text-3xl md:text-4xl font-bold text-center text-ink mb-12">
            <span class="border-b-4 border-steel pb-2">{label}</span>
        </h2>
    }
}
