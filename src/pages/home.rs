use yew::prelude::*;
use web_sys::MouseEvent;

use crate::content::{FaqEntry, CAST_CLASSES, FAQS, LINE_URL, REVIEWS, TEL_URL};
use crate::state::FaqState;

const FEATURES: &[(&str, &str, &str)] = &[
    (
        "shield",
        "徹底した審査制",
        "容姿だけでなく、マナーや会話力も厳しくチェック。満足度100%を目指しています。",
    ),
    (
        "check",
        "24時間サポート",
        "トラブル対応や疑問点など、コンシェルジュがLINEで24時間体制でサポート。",
    ),
    (
        "star",
        "プライバシー保護",
        "完全会員制。やり取りは暗号化され、プライベートが外に漏れることはありません。",
    ),
];

const USAGE_STEPS: &[(&str, &str, &str)] = &[
    ("01", "友だち追加", "LINE公式アカウントを友だち追加してください。"),
    ("02", "条件を指定", "場所、人数、キャストのクラスを選びます。"),
    ("03", "キャスト合流", "最短30分で、ご指定の場所にキャストが到着。"),
    ("04", "後払い決済", "お支払いはクレジットカードで。後日スマートに。"),
];

const SAFETY_ITEMS: &[&str] = &[
    "24時間365日のパトロール",
    "完全キャッシュレス決済",
    "公的身分証の確認義務化",
    "相互評価システムによる信頼性",
];

#[derive(Properties, PartialEq)]
pub struct FaqSectionProps {
    pub entries: &'static [FaqEntry],
}

/// FAQ accordion. At most one answer is expanded at a time; clicking the
/// open entry collapses it again.
#[function_component(FaqSection)]
pub fn faq_section(props: &FaqSectionProps) -> Html {
    let faq = use_state(FaqState::default);

    html! {
        <section id="faq" class="faq-section">
            <h2 class="section-title">{"よくある質問"}</h2>
            <div class="faq-list">
                {
                    props.entries.iter().enumerate().map(|(index, entry)| {
                        let expanded = faq.is_expanded(index);
                        let toggle = {
                            let faq = faq.clone();
                            Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                let mut next = *faq;
                                next.toggle(index);
                                faq.set(next);
                            })
                        };
                        html! {
                            <div key={index} class="faq-item">
                                <button class="faq-question" onclick={toggle}>
                                    <span class="question-text">{ entry.question }</span>
                                    <span class="toggle-icon">{ if expanded { "−" } else { "+" } }</span>
                                </button>
                                {
                                    if expanded {
                                        html! {
                                            <div class="faq-answer">{ entry.answer }</div>
                                        }
                                    } else {
                                        html! {}
                                    }
                                }
                            </div>
                        }
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}

fn stars(rating: u8) -> Html {
    html! {
        <div class="review-stars">
            { (0..rating).map(|i| html! { <span key={i}>{"★"}</span> }).collect::<Html>() }
        </div>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="landing-page">
            <section class="hero">
                <div class="hero-backdrop"></div>
                <div class="hero-content">
                    <h1>
                        {"最高峰の夜に、"}
                        <br />
                        <span class="accent">{"極上の華"}</span>
                        {"を。"}
                    </h1>
                    <p class="hero-copy">
                        {"goldは、厳選されたキャストがあなたの特別な夜を彩る、\
                          ハイクラスなギャラ飲みマッチングサービスです。\
                          最短30分で、理想のキャストをキャスティング。"}
                    </p>
                    <div class="hero-actions">
                        <a href={LINE_URL} class="hero-button hero-line">{"LINEで今すぐ予約"}</a>
                        <a href={TEL_URL} class="hero-button hero-tel">{"電話で相談する"}</a>
                    </div>
                </div>
            </section>

            <main class="landing-main">
                <section id="about" class="about-section">
                    <div class="about-grid">
                        <div>
                            <h2 class="section-title left">{"ギャラ飲みとは"}</h2>
                            <p class="about-copy">
                                {"「ギャラ飲み」とは、飲み会に参加する女性に対して報酬（ギャランティ）を\
                                  支払うマッチング形態です。接待、友人とのお祝い、あるいは一人での優雅な晩酌など、\
                                  あらゆるシーンに最高のエンターテインメントを提供します。"}
                            </p>
                            <div class="about-points">
                                <div class="about-point">
                                    <span class="point-mark">{"✓"}</span>
                                    <div>
                                        <h3>{"最短30分で合流"}</h3>
                                        <p>{"現在地から近くにいるキャストをすぐにお呼びいただけます。"}</p>
                                    </div>
                                </div>
                                <div class="about-point">
                                    <span class="point-mark">{"✓"}</span>
                                    <div>
                                        <h3>{"明朗な料金体系"}</h3>
                                        <p>{"延長料金や指名料など、すべて明確にアプリ上でご確認いただけます。"}</p>
                                    </div>
                                </div>
                            </div>
                        </div>
                        <div class="about-image"></div>
                    </div>
                </section>

                <section id="classes" class="classes-section">
                    <h2 class="section-title">{"キャストのクラス"}</h2>
                    <p class="section-subtitle">{"あなたのニーズに合わせた3つのグレードをご用意"}</p>
                    <div class="classes-grid">
                        {
                            CAST_CLASSES.iter().map(|tier| {
                                html! {
                                    <div key={tier.name} class={classes!("class-card", format!("tone-{}", tier.tone))}>
                                        <h3>{ tier.name }</h3>
                                        <div class="class-price">{ tier.price }</div>
                                        <p>{ tier.description }</p>
                                    </div>
                                }
                            }).collect::<Html>()
                        }
                    </div>
                </section>

                <section id="features" class="features-section">
                    <h2 class="section-title">{"goldが選ばれている理由"}</h2>
                    <div class="features-grid">
                        {
                            FEATURES.iter().map(|&(icon, title, body)| {
                                html! {
                                    <div key={title} class="feature-card">
                                        <div class={classes!("feature-icon", format!("icon-{}", icon))}></div>
                                        <h3>{ title }</h3>
                                        <p>{ body }</p>
                                    </div>
                                }
                            }).collect::<Html>()
                        }
                    </div>
                </section>

                <section id="usage" class="usage-section">
                    <h2 class="section-title">{"goldのご利用方法"}</h2>
                    <div class="usage-grid">
                        {
                            USAGE_STEPS.iter().map(|&(step, title, desc)| {
                                html! {
                                    <div key={step} class="usage-card">
                                        <span class="usage-step">{ step }</span>
                                        <h3>{ title }</h3>
                                        <p>{ desc }</p>
                                    </div>
                                }
                            }).collect::<Html>()
                        }
                    </div>
                </section>

                <section id="safety" class="safety-section">
                    <h2 class="section-title">{"安心安全への取り組み"}</h2>
                    <p class="safety-copy">
                        {"goldでは、ゲスト・キャスト双方が安心して利用できるよう、\
                          公的身分証による本人確認を100%実施。独自の監視システムにより、\
                          不適切な利用者をリアルタイムで排除しています。"}
                    </p>
                    <div class="safety-grid">
                        {
                            SAFETY_ITEMS.iter().map(|&item| {
                                html! { <div key={item} class="safety-item">{ item }</div> }
                            }).collect::<Html>()
                        }
                    </div>
                </section>

                <section id="reviews" class="reviews-section">
                    <h2 class="section-title">{"利用者の口コミ"}</h2>
                    <div class="reviews-grid">
                        {
                            REVIEWS.iter().map(|review| {
                                let initial = review.author.chars().next().unwrap_or('g').to_string();
                                html! {
                                    <div key={review.author} class="review-card">
                                        { stars(review.rating) }
                                        <p class="review-body">{ format!("\"{}\"", review.body) }</p>
                                        <div class="review-author">
                                            <div class="author-avatar">{ initial }</div>
                                            <div>
                                                <div class="author-name">{ review.author }</div>
                                                <div class="author-category">{ review.category }</div>
                                            </div>
                                        </div>
                                    </div>
                                }
                            }).collect::<Html>()
                        }
                    </div>
                </section>

                <FaqSection entries={FAQS} />
            </main>

            <style>
                {r#"
                .landing-page {
                    background: #0a0a0a;
                    color: #f3f4f6;
                }

                .section-title {
                    font-family: Georgia, serif;
                    font-size: 2rem;
                    color: #eab308;
                    text-align: center;
                    margin-bottom: 1rem;
                }

                .section-title.left {
                    text-align: left;
                    margin-bottom: 1.5rem;
                }

                .section-subtitle {
                    color: #9ca3af;
                    text-align: center;
                    margin-bottom: 4rem;
                }

                .hero {
                    position: relative;
                    min-height: 90vh;
                    padding: 8rem 1.5rem 5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                }

                .hero-backdrop {
                    position: absolute;
                    inset: 0;
                    z-index: 0;
                    background:
                        linear-gradient(to bottom, rgba(0,0,0,0.2), rgba(0,0,0,0.6), #0a0a0a),
                        url('https://images.unsplash.com/photo-1514362545857-3bc16c4c7d1b?auto=format&fit=crop&q=80&w=2070') center / cover;
                }

                .hero-content {
                    position: relative;
                    z-index: 1;
                    max-width: 56rem;
                    text-align: center;
                }

                .hero-content h1 {
                    font-family: Georgia, serif;
                    font-size: 3rem;
                    font-weight: bold;
                    line-height: 1.25;
                    margin-bottom: 2rem;
                }

                .hero-content .accent {
                    color: #eab308;
                }

                .hero-copy {
                    font-size: 1.1rem;
                    color: #d1d5db;
                    line-height: 1.9;
                    max-width: 42rem;
                    margin: 0 auto 3rem;
                }

                .hero-actions {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    align-items: center;
                    justify-content: center;
                }

                .hero-button {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 1.25rem 2.5rem;
                    border-radius: 999px;
                    font-weight: bold;
                    font-size: 1.1rem;
                    text-decoration: none;
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.3);
                    transition: transform 0.3s ease;
                }

                .hero-button:hover {
                    transform: translateY(-4px) scale(1.02);
                }

                .hero-line {
                    background: #06C755;
                    color: #fff;
                }

                .hero-tel {
                    background: #fff;
                    color: #000;
                }

                .landing-main {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 5rem 1.5rem;
                    display: flex;
                    flex-direction: column;
                    gap: 8rem;
                }

                .landing-main section {
                    scroll-margin-top: 6rem;
                }

                .about-grid {
                    display: grid;
                    gap: 3rem;
                    align-items: center;
                }

                .about-copy {
                    color: #d1d5db;
                    line-height: 2;
                    margin-bottom: 1.5rem;
                }

                .about-points {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .about-point {
                    display: flex;
                    gap: 1rem;
                    align-items: flex-start;
                }

                .point-mark {
                    color: #eab308;
                    font-weight: bold;
                    margin-top: 0.2rem;
                }

                .about-point h3 {
                    font-size: 1rem;
                    margin-bottom: 0.25rem;
                }

                .about-point p {
                    font-size: 0.875rem;
                    color: #9ca3af;
                }

                .about-image {
                    min-height: 320px;
                    border-radius: 1rem;
                    background: url('https://images.unsplash.com/photo-1543007630-9710e4a00a20?auto=format&fit=crop&q=80&w=1000') center / cover;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
                }

                .classes-grid {
                    display: grid;
                    gap: 2rem;
                }

                .class-card {
                    padding: 2rem;
                    border-radius: 1.5rem;
                    border: 2px solid;
                    background: rgba(24, 24, 27, 0.5);
                    backdrop-filter: blur(4px);
                    transition: transform 0.3s ease;
                }

                .class-card:hover {
                    transform: translateY(-4px);
                }

                .class-card h3 {
                    font-size: 1.5rem;
                    margin-bottom: 1rem;
                }

                .class-price {
                    font-family: Georgia, serif;
                    font-size: 1.875rem;
                    margin-bottom: 1.5rem;
                }

                .class-card p {
                    font-size: 0.875rem;
                    line-height: 1.7;
                    color: #d1d5db;
                }

                .tone-standard {
                    border-color: #94a3b8;
                    color: #94a3b8;
                }

                .tone-vip {
                    border-color: #eab308;
                    color: #eab308;
                }

                .tone-royal {
                    border-color: #a855f7;
                    color: #a855f7;
                }

                .features-section {
                    background: rgba(24, 24, 27, 0.3);
                    padding: 3rem;
                    border-radius: 1.5rem;
                    border: 1px solid rgba(255, 255, 255, 0.05);
                }

                .features-section .section-title {
                    margin-bottom: 4rem;
                }

                .features-grid {
                    display: grid;
                    gap: 3rem;
                }

                .feature-card {
                    text-align: center;
                }

                .feature-icon {
                    width: 5rem;
                    height: 5rem;
                    border-radius: 50%;
                    background: rgba(234, 179, 8, 0.1);
                    margin: 0 auto 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .icon-shield::before { content: '🛡'; font-size: 1.75rem; }
                .icon-check::before { content: '✓'; font-size: 1.75rem; color: #eab308; }
                .icon-star::before { content: '★'; font-size: 1.75rem; color: #eab308; }

                .feature-card h3 {
                    font-size: 1.25rem;
                    margin-bottom: 1rem;
                }

                .feature-card p {
                    color: #9ca3af;
                    font-size: 0.875rem;
                    line-height: 1.7;
                }

                .usage-section .section-title {
                    margin-bottom: 4rem;
                }

                .usage-grid {
                    display: grid;
                    gap: 2rem;
                }

                .usage-card {
                    padding: 1.5rem;
                    background: #18181b;
                    border-radius: 1rem;
                    border: 1px solid rgba(255, 255, 255, 0.05);
                }

                .usage-step {
                    display: block;
                    font-family: Georgia, serif;
                    font-size: 2.25rem;
                    font-weight: bold;
                    color: rgba(234, 179, 8, 0.3);
                    margin-bottom: 1rem;
                }

                .usage-card h3 {
                    font-size: 1.1rem;
                    margin-bottom: 0.5rem;
                }

                .usage-card p {
                    font-size: 0.875rem;
                    color: #9ca3af;
                }

                .safety-section {
                    max-width: 48rem;
                    margin: 0 auto;
                    text-align: center;
                }

                .safety-copy {
                    color: #d1d5db;
                    line-height: 1.9;
                    margin-bottom: 2rem;
                }

                .safety-grid {
                    display: grid;
                    gap: 1rem;
                }

                .safety-item {
                    background: #18181b;
                    padding: 1rem;
                    border-radius: 0.75rem;
                    text-align: left;
                    border-left: 4px solid #eab308;
                }

                .reviews-section .section-title {
                    margin-bottom: 4rem;
                }

                .reviews-grid {
                    display: grid;
                    gap: 2rem;
                }

                .review-card {
                    padding: 2rem;
                    background: #18181b;
                    border-radius: 1.5rem;
                    border: 1px solid rgba(255, 255, 255, 0.05);
                    transition: transform 0.3s ease;
                }

                .review-card:hover {
                    transform: translateY(-4px);
                }

                .review-stars {
                    color: #eab308;
                    margin-bottom: 1rem;
                    letter-spacing: 0.15em;
                }

                .review-body {
                    color: #d1d5db;
                    font-style: italic;
                    margin-bottom: 1.5rem;
                    line-height: 1.8;
                }

                .review-author {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }

                .author-avatar {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 50%;
                    background: rgba(234, 179, 8, 0.2);
                    color: #eab308;
                    font-weight: bold;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .author-name {
                    font-weight: bold;
                }

                .author-category {
                    font-size: 0.75rem;
                    color: #6b7280;
                }

                .faq-section {
                    max-width: 48rem;
                    margin: 0 auto;
                    width: 100%;
                }

                .faq-section .section-title {
                    margin-bottom: 4rem;
                }

                .faq-list {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .faq-item {
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 0.75rem;
                    overflow: hidden;
                }

                .faq-question {
                    width: 100%;
                    padding: 1.25rem;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1rem;
                    font-weight: bold;
                    text-align: left;
                    cursor: pointer;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    transition: background 0.3s ease;
                }

                .faq-question:hover {
                    background: rgba(255, 255, 255, 0.05);
                }

                .toggle-icon {
                    color: #eab308;
                    font-size: 1.5rem;
                }

                .faq-answer {
                    padding: 1.25rem;
                    background: rgba(24, 24, 27, 0.5);
                    color: #9ca3af;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                    line-height: 1.8;
                }

                @media (min-width: 768px) {
                    .hero-content h1 {
                        font-size: 4.5rem;
                    }

                    .hero-actions {
                        flex-direction: row;
                    }

                    .about-grid {
                        grid-template-columns: 1fr 1fr;
                    }

                    .classes-grid,
                    .features-grid {
                        grid-template-columns: repeat(3, 1fr);
                    }

                    .usage-grid {
                        grid-template-columns: repeat(4, 1fr);
                    }

                    .safety-grid,
                    .reviews-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                "#}
            </style>
        </div>
    }
}
