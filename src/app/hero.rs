use leptos::prelude::*;

use crate::reveal::{reveal_class, SlideFrom};
use crate::sections::Section;

/// Landing block. The entrance classes hang off the page load flag instead
/// of an intersection observer so the stagger plays as soon as the page
/// settles, with the hero already in view.
#[component]
pub fn Hero(loaded: ReadSignal<bool>) -> impl IntoView {
    view! {
        <section
            id=Section::Hero.id()
            class="min-h-screen flex items-center justify-center bg-mist"
        >
            <div class="container mx-auto px-4 text-center">
                <div class="max-w-4xl mx-auto">
                    <div class=move || {
                        format!("mb-8 {}", reveal_class(loaded.get(), SlideFrom::Below))
                    }>
                        <img
                            src="/self-portrait.png"
                            alt="渋谷佳吾"
                            width="200"
                            height="200"
                            class="mx-auto rounded-full border-4 border-steel shadow-lg transition-transform duration-500 hover:scale-105"
                        />
                    </div>
                    <h1 class=move || {
                        format!(
                            "text-4xl md:text-6xl font-bold text-ink mb-6 delay-300 {}",
                            reveal_class(loaded.get(), SlideFrom::Below),
                        )
                    }>"渋谷佳吾"</h1>
                    <p class=move || {
                        format!(
                            "text-xl md:text-2xl text-ink mb-4 delay-500 {}",
                            reveal_class(loaded.get(), SlideFrom::Below),
                        )
                    }>"プロダクトを前に進める、クラフト系エンジニア"</p>
                    <p class=move || {
                        format!(
                            "text-lg text-harbor mb-8 delay-700 {}",
                            reveal_class(loaded.get(), SlideFrom::Below),
                        )
                    }>"PM志望・UX志向・研究もしている"</p>
                </div>
            </div>
        </section>
    }
}
