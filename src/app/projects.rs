use leptos::prelude::*;

use super::components::SectionHeading;
use super::reveal::Reveal;
use crate::sections::Section;

struct Project {
    title: &'static str,
    caption: &'static str,
    body: &'static str,
    role: &'static str,
    image: &'static str,
    image_alt: &'static str,
    tags: &'static [&'static str],
    image_right: bool,
    delay: u64,
}

static PROJECTS: [Project; 4] = [
    Project {
        title: "GIFTech2025春「ささAI」",
        caption: "お笑いネタ作り支援AI",
        body: "React + GPTを活用したお笑いネタ作成支援アプリケーション。ユーザーの入力に基づいてAIがネタのアイデアを提案し、創作活動をサポートします。",
        role: "フロントエンド開発、プレゼン登壇",
        image: "/giftech2025.png",
        image_alt: "ささAI",
        tags: &["React", "GPT API", "TypeScript"],
        image_right: false,
        delay: 200,
    },
    Project {
        title: "エネクラウドCRM開発",
        caption: "顧客管理システムの要件定義・開発",
        body: "エネルギー業界向けCRMシステムの開発プロジェクト。PM的な立場で要件定義からタスク管理、チーム調整まで幅広く担当。",
        role: "要件定義、プロジェクト管理、チーム調整",
        image: "/enecloud.png",
        image_alt: "エネクラウドCRM",
        tags: &["要件定義", "プロジェクト管理", "チームマネジメント"],
        image_right: true,
        delay: 400,
    },
    Project {
        title: "CTC共同研究",
        caption: "脱炭素とNFTの研究開発",
        body: "脱炭素社会実現に向けたNFT活用の研究プロジェクト。Solidityでのスマートコントラクト開発とPythonでのデータ分析を担当。",
        role: "技術開発、先輩後輩マネジメント",
        image: "/CTC.png",
        image_alt: "CTC共同研究",
        tags: &["Solidity", "Python", "NFT", "ブロックチェーン"],
        image_right: false,
        delay: 600,
    },
    Project {
        title: "ARLISS",
        caption: "缶サット競技・探査機開発",
        body: "アメリカ・ネバダ州で開催される缶サット競技に参加。探査機の設計・開発から現地でのトラブル対応まで一貫して担当。",
        role: "探査機開発、現地トラブル対応、UNISEC賞受賞",
        image: "/arliss.jpg",
        image_alt: "ARLISS",
        tags: &["C言語", "組み込み開発", "ハードウェア", "チーム開発"],
        image_right: true,
        delay: 800,
    },
];

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id=Section::Projects.id() class="py-20 bg-steel/5">
            <div class="container mx-auto px-4">
                <div class="max-w-6xl mx-auto">
                    <Reveal>
                        <SectionHeading label="Projects" />
                    </Reveal>
                    <div class="space-y-8">
                        {PROJECTS
                            .iter()
                            .map(|project| {
                                view! {
                                    <Reveal delay=project.delay>
                                        <ProjectCard project=project />
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

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    // alternating layout: odd cards show the image on the right on desktop
    let image_class = if project.image_right {
        "relative h-64 md:h-auto md:order-2 overflow-hidden"
    } else {
        "relative h-64 md:h-auto overflow-hidden"
    };
    let content_class = if project.image_right { "p-6 md:order-1" } else { "p-6" };

    view! {
        <div class="overflow-hidden rounded-lg bg-mist shadow-lg transition-all duration-300 hover:shadow-xl hover:scale-[1.01]">
            <div class="grid md:grid-cols-2 gap-0">
                <div class=image_class>
                    <img
                        src=project.image
                        alt=project.image_alt
                        class="absolute inset-0 h-full w-full object-cover transition-transform duration-700 hover:scale-110"
                    />
                </div>
                <div class=content_class>
                    <div class="mb-4">
                        <h3 class="text-xl font-semibold text-ink">{project.title}</h3>
                        <p class="text-sm text-harbor">{project.caption}</p>
                    </div>
                    <p class="text-harbor mb-4">{project.body}</p>
                    <div class="mb-4">
                        <p class="font-semibold text-ink mb-2">"役割・成果"</p>
                        <p class="text-sm text-harbor">{project.role}</p>
                    </div>
                    <div class="flex flex-wrap gap-2">
                        {project
                            .tags
                            .iter()
                            .map(|tag| {
                                view! {
                                    <span class="inline-block rounded-md px-2.5 py-0.5 text-sm font-semibold bg-steel text-mist transition-all duration-300 hover:scale-105">
                                        {*tag}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}
