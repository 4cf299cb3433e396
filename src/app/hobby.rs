use leptos::prelude::*;

use super::components::SectionHeading;
use super::reveal::Reveal;
use crate::sections::Section;

#[component]
pub fn Hobby() -> impl IntoView {
    view! {
        <section id=Section::Hobby.id() class="py-20 bg-steel/5">
            <div class="container mx-auto px-4">
                <div class="max-w-4xl mx-auto">
                    <Reveal>
                        <SectionHeading label="Hobby" />
                    </Reveal>
                    <Reveal delay=300>
                        <div class="rounded-lg bg-mist shadow-lg transition-all duration-300 hover:shadow-xl">
                            <div class="p-8">
                                <div class="grid md:grid-cols-2 gap-8 items-center">
                                    <div>
                                        <h3 class="text-2xl font-semibold text-ink mb-4">"靴作り"</h3>
                                        <p class="text-harbor mb-4">
                                            "大学時代から靴作りを趣味として始めました。革の選定から型紙作成、縫製まで全て手作業で行っています。"
                                        </p>
                                        <p class="text-harbor mb-4">
                                            "一足の靴を完成させるまでには約3ヶ月かかりますが、細部へのこだわりと完成時の達成感は格別です。"
                                        </p>
                                        <p class="text-harbor mb-4">
                                            "この経験を通じて、ものづくりの奥深さと、ユーザー（履く人）の立場に立った設計の重要性を学びました。エンジニアリングにも通じる、品質への妥協しない姿勢を大切にしています。"
                                        </p>
                                    </div>
                                    <div class="space-y-4">
                                        <div class="relative h-96 rounded-lg overflow-hidden border-2 border-steel transition-all duration-500 hover:shadow-lg">
                                            <img
                                                src="/shoes.jpg"
                                                alt="靴作り - 完成品"
                                                class="absolute inset-0 h-full w-full object-cover transition-transform duration-700 hover:scale-110"
                                            />
                                        </div>
                                    </div>
                                </div>
                            </div>
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
