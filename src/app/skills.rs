use leptos::prelude::*;

use super::components::SectionHeading;
use super::reveal::Reveal;
use crate::reveal::SlideFrom;
use crate::sections::Section;

struct SkillGroup {
    heading: &'static str,
    badges: &'static [&'static str],
    delay: u64,
    slide_from: SlideFrom,
}

static SKILL_GROUPS: [SkillGroup; 4] = [
    SkillGroup {
        heading: "プログラミング言語",
        badges: &["Python", "TypeScript", "Solidity", "C"],
        delay: 200,
        slide_from: SlideFrom::Left,
    },
    SkillGroup {
        heading: "フレームワーク・ライブラリ",
        badges: &["React", "Next.js", "Tailwind CSS", "scikit-learn", "Optuna"],
        delay: 400,
        slide_from: SlideFrom::Right,
    },
    SkillGroup {
        heading: "ツール・プラットフォーム",
        badges: &["Git", "AWS", "Figma", "Anki"],
        delay: 600,
        slide_from: SlideFrom::Left,
    },
    SkillGroup {
        heading: "ソフトスキル",
        badges: &[
            "ファシリテーション",
            "プレゼンテーション",
            "プロジェクトマネジメント",
            "チームマネジメント",
        ],
        delay: 800,
        slide_from: SlideFrom::Right,
    },
];

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id=Section::Skills.id() class="py-20 bg-mist">
            <div class="container mx-auto px-4">
                <div class="max-w-4xl mx-auto">
                    <Reveal>
                        <SectionHeading label="Skills" />
                    </Reveal>
                    <div class="space-y-8">
                        {SKILL_GROUPS
                            .iter()
                            .map(|group| {
                                view! {
                                    <Reveal delay=group.delay slide_from=group.slide_from>
                                        <div>
                                            <h3 class="text-xl font-semibold text-ink mb-4">
                                                {group.heading}
                                            </h3>
                                            <div class="flex flex-wrap gap-2">
                                                {group
                                                    .badges
                                                    .iter()
                                                    .map(|badge| {
                                                        view! {
                                                            <span class="inline-block rounded-md px-2.5 py-0.5 text-sm font-semibold border border-steel text-ink transition-all duration-300 hover:scale-110 hover:shadow-sm">
                                                                {*badge}
                                                            </span>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </div>
                                        </div>
                                    </Reveal>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
