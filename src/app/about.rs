use leptos::prelude::*;

use super::components::SectionHeading;
use super::reveal::Reveal;
use crate::reveal::SlideFrom;
use crate::sections::Section;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=Section::About.id() class="py-20 bg-mist">
            <div class="container mx-auto px-4">
                <div class="max-w-4xl mx-auto">
                    <Reveal>
                        <SectionHeading label="About" />
                    </Reveal>
                    <div class="grid md:grid-cols-2 gap-8 items-center">
                        <Reveal delay=200 slide_from=SlideFrom::Left>
                            <div>
                                <h3 class="text-2xl font-semibold text-ink mb-4">"所属・研究"</h3>
                                <p class="text-harbor mb-4">
                                    "大学でUXやリビングラボに関する研究を行っています。ユーザー中心設計の観点から、技術とユーザーニーズを橋渡しするプロダクト開発に興味を持っています。"
                                </p>
                                <h3 class="text-2xl font-semibold text-ink mb-4">"研究以外の活動"</h3>
                                <p class="text-harbor mb-4">
                                    "ARLISS（缶サット競技）への参加や企業との共同研究を通じて、実践的な開発経験を積んでいます。チームでの開発において、技術的な実装だけでなく、プロジェクト管理や要件定義にも携わっています。"
                                </p>
                            </div>
                        </Reveal>
                        <Reveal delay=400 slide_from=SlideFrom::Right>
                            <div>
                                <h3 class="text-2xl font-semibold text-ink mb-4">"将来像"</h3>
                                <p class="text-harbor mb-4">
                                    "技術力を持ちながらも、ビジネス視点でプロダクトを俯瞰できるテックリードやPMを目指しています。ユーザーの課題を技術で解決し、チームを牽引できるエンジニアになりたいと考えています。"
                                </p>
                                <div class="bg-steel/10 p-6 rounded-lg transition-all duration-300 hover:shadow-lg">
                                    <h4 class="font-semibold text-ink mb-2">"目指す姿"</h4>
                                    <ul class="text-sm text-harbor space-y-1">
                                        <li>"• 技術力もあるPM"</li>
                                        <li>"• ユーザー視点を持つエンジニア"</li>
                                        <li>"• チームを前に進めるリーダー"</li>
                                    </ul>
                                </div>
                            </div>
                        </Reveal>
                    </div>
                </div>
            </div>
        </section>
    }
}
