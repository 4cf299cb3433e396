use leptos::prelude::*;

use crate::sections::Section;

/// Fixed top bar with the brand button, the desktop section links and the
/// collapsible mobile menu. Activating any entry hands the target section to
/// `activate`, which also closes the mobile menu.
#[component]
pub fn NavBar<F>(
    active: ReadSignal<Section>,
    menu_open: ReadSignal<bool>,
    set_menu_open: WriteSignal<bool>,
    activate: F,
) -> impl IntoView
where
    F: Fn(Section) + Copy + 'static,
{
    view! {
        <nav class="fixed top-0 left-0 right-0 bg-mist/90 backdrop-blur-sm border-b border-harbor z-50 transition-all duration-300">
            <div class="container mx-auto px-4 py-4">
                <div class="flex justify-between items-center">
                    <button
                        class="text-xl font-bold text-ink hover:text-steel transition-all duration-300"
                        on:click=move |_| activate(Section::Hero)
                    >
                        "渋谷佳吾"
                    </button>
                    <div class="hidden md:flex space-x-8">
                        {Section::NAV
                            .iter()
                            .map(|section| {
                                let section = *section;
                                view! {
                                    <button
                                        class=move || {
                                            if active.get() == section {
                                                "relative text-sm font-medium transition-all duration-300 hover:-translate-y-0.5 text-steel"
                                            } else {
                                                "relative text-sm font-medium transition-all duration-300 hover:-translate-y-0.5 text-ink hover:text-steel"
                                            }
                                        }
                                        on:click=move |_| activate(section)
                                    >
                                        {section.label()}
                                        {move || {
                                            if active.get() == section {
                                                Some(
                                                    view! {
                                                        <span class="absolute bottom-0 left-0 w-full h-0.5 bg-steel translate-y-2 transition-all duration-300"></span>
                                                    },
                                                )
                                            } else {
                                                None
                                            }
                                        }}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <button
                        class="md:hidden text-2xl text-ink"
                        aria-label="Toggle navigation menu"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
                {move || {
                    if menu_open.get() {
                        Some(
                            view! {
                                <div class="md:hidden mt-4 pb-4 border-t border-harbor">
                                    <div class="flex flex-col space-y-2 pt-4">
                                        {Section::NAV
                                            .iter()
                                            .map(|section| {
                                                let section = *section;
                                                view! {
                                                    <button
                                                        class=move || {
                                                            if active.get() == section {
                                                                "text-left py-2 text-sm font-medium transition-all duration-300 text-steel"
                                                            } else {
                                                                "text-left py-2 text-sm font-medium transition-all duration-300 text-ink hover:text-steel"
                                                            }
                                                        }
                                                        on:click=move |_| activate(section)
                                                    >
                                                        {section.label()}
                                                    </button>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            },
                        )
                    } else {
                        None
                    }
                }}
            </div>
        </nav>
    }
}
