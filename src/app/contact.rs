use leptos::prelude::*;

use super::components::SectionHeading;
use super::reveal::Reveal;
use crate::sections::Section;

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id=Section::Contact.id() class="py-20 bg-mist">
            <div class="container mx-auto px-4">
                <div class="max-w-4xl mx-auto text-center">
                    <Reveal>
                        <SectionHeading label="Contact" />
                    </Reveal>
                    <Reveal delay=300>
                        <p class="text-lg text-harbor mb-8">"お気軽にお声がけください"</p>
                        <div class="flex flex-wrap justify-center gap-6">
                            <a
                                href="https://github.com/Shibuya14"
                                target="_blank"
                                rel="noopener noreferrer"
                                class="flex items-center space-x-2 p-3 rounded-lg text-harbor transition-all duration-300 hover:text-steel hover:bg-steel/10 hover:-translate-y-[3px]"
                                aria-label="GitHub Profile"
                            >
                                <i class="devicon-github-plain text-2xl"></i>
                                <span>"GitHub"</span>
                            </a>
                            <a
                                href="https://x.com/Shibuya_14"
                                target="_blank"
                                rel="noopener noreferrer"
                                class="flex items-center space-x-2 p-3 rounded-lg text-harbor transition-all duration-300 hover:text-steel hover:bg-steel/10 hover:-translate-y-[3px]"
                                aria-label="X Profile"
                            >
                                <i class="devicon-twitter-original text-2xl"></i>
                                <span>"X"</span>
                            </a>
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
