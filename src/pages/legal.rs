use yew::prelude::*;
use yew::{Children, Properties};
use web_sys::MouseEvent;

use crate::state::View;

#[derive(Properties, PartialEq)]
pub struct LegalPageProps {
    pub title: &'static str,
    pub on_navigate: Callback<View>,
    pub children: Children,
}

fn nav_link(on_navigate: &Callback<View>, target: View, label: &'static str) -> Html {
    let onclick = {
        let on_navigate = on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(target);
        })
    };
    html! {
        <a href="#" {onclick}>{ label }</a>
    }
}

/// Shared frame for the static sub-pages: page title, body sections and the
/// cross-link row back to the other legal pages.
#[function_component(LegalPage)]
fn legal_page(props: &LegalPageProps) -> Html {
    html! {
        <div class="legal-content">
            <h1>{ props.title }</h1>
            { for props.children.iter() }
            <div class="legal-links">
                { nav_link(&props.on_navigate, View::Terms, "利用規約") }
                {" | "}
                { nav_link(&props.on_navigate, View::Privacy, "プライバシーポリシー") }
                {" | "}
                { nav_link(&props.on_navigate, View::Legal, "特商法に基づく表記") }
                {" | "}
                { nav_link(&props.on_navigate, View::Company, "会社概要") }
            </div>
            <div class="back-home">
                { nav_link(&props.on_navigate, View::Home, "トップページへ戻る") }
            </div>
            <style>
                {r#"
                .legal-content {
                    max-width: 48rem;
                    margin: 0 auto;
                    padding: 8rem 1.5rem 6rem;
                    color: #d1d5db;
                    line-height: 1.9;
                }

                .legal-content h1 {
                    font-family: Georgia, serif;
                    font-size: 2rem;
                    color: #eab308;
                    margin-bottom: 3rem;
                }

                .legal-content section {
                    margin-bottom: 2.5rem;
                }

                .legal-content h2 {
                    font-size: 1.2rem;
                    color: #fff;
                    margin-bottom: 1rem;
                }

                .legal-content ul {
                    list-style: none;
                    padding-left: 1rem;
                }

                .legal-content li {
                    padding: 0.35rem 0;
                    position: relative;
                    padding-left: 1rem;
                }

                .legal-content li::before {
                    content: '・';
                    position: absolute;
                    left: 0;
                    color: #eab308;
                }

                .legal-content dl {
                    display: grid;
                    grid-template-columns: max-content 1fr;
                    gap: 0.75rem 2rem;
                }

                .legal-content dt {
                    color: #9ca3af;
                }

                .legal-links {
                    margin-top: 4rem;
                    padding-top: 2rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    font-size: 0.875rem;
                    color: #6b7280;
                }

                .legal-links a,
                .back-home a {
                    color: #9ca3af;
                    text-decoration: none;
                    transition: color 0.3s ease;
                }

                .legal-links a:hover,
                .back-home a:hover {
                    color: #eab308;
                }

                .back-home {
                    margin-top: 1.5rem;
                    font-size: 0.875rem;
                }
                "#}
            </style>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SubPageProps {
    pub on_navigate: Callback<View>,
}

#[function_component(TermsOfService)]
pub fn terms_of_service(props: &SubPageProps) -> Html {
    html! {
        <LegalPage title="利用規約" on_navigate={props.on_navigate.clone()}>
            <section>
                <h2>{"第1条（適用）"}</h2>
                <p>{"本規約は、gold（以下「本サービス」）の提供条件および本サービスの利用に関する当社と\
                     利用者との間の権利義務関係を定めるものです。利用者は、本サービスを利用することにより、\
                     本規約に同意したものとみなされます。"}</p>
            </section>
            <section>
                <h2>{"第2条（会員登録）"}</h2>
                <p>{"本サービスは完全会員制です。登録にあたっては公的身分証による本人確認を必須とし、\
                     審査の結果、登録をお断りする場合があります。"}</p>
            </section>
            <section>
                <h2>{"第3条（禁止事項）"}</h2>
                <ul>
                    <li>{"法令または公序良俗に違反する行為"}</li>
                    <li>{"キャストへの連絡先の直接交換の要求"}</li>
                    <li>{"本サービスの運営を妨害する行為"}</li>
                    <li>{"その他、当社が不適切と判断する行為"}</li>
                </ul>
            </section>
            <section>
                <h2>{"第4条（利用料金）"}</h2>
                <p>{"利用料金はキャストのクラスおよび利用時間に応じて定まり、アプリ上に明示された金額を\
                     クレジットカードにてお支払いいただきます。"}</p>
            </section>
            <section>
                <h2>{"第5条（免責）"}</h2>
                <p>{"当社は、本サービスの利用により利用者に生じた損害について、当社に故意または重過失が\
                     ある場合を除き、責任を負いません。"}</p>
            </section>
        </LegalPage>
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy(props: &SubPageProps) -> Html {
    html! {
        <LegalPage title="プライバシーポリシー" on_navigate={props.on_navigate.clone()}>
            <section>
                <h2>{"1. 取得する情報"}</h2>
                <ul>
                    <li>{"氏名・生年月日など本人確認に必要な情報"}</li>
                    <li>{"電話番号およびLINEアカウント情報"}</li>
                    <li>{"決済に必要なクレジットカード情報"}</li>
                </ul>
            </section>
            <section>
                <h2>{"2. 利用目的"}</h2>
                <ul>
                    <li>{"本人確認および会員審査のため"}</li>
                    <li>{"キャストのマッチングおよび連絡のため"}</li>
                    <li>{"利用料金の決済のため"}</li>
                </ul>
            </section>
            <section>
                <h2>{"3. 第三者提供"}</h2>
                <p>{"法令に基づく場合を除き、ご本人の同意なく個人情報を第三者に提供することはありません。"}</p>
            </section>
            <section>
                <h2>{"4. 安全管理"}</h2>
                <p>{"やり取りはすべて暗号化され、個人情報へのアクセスは権限を持つ担当者に限定されます。"}</p>
            </section>
            <section>
                <h2>{"5. お問い合わせ"}</h2>
                <p>{"個人情報の開示・訂正・削除のご請求は、LINE公式アカウントまでご連絡ください。"}</p>
            </section>
        </LegalPage>
    }
}

#[function_component(CommercialDisclosure)]
pub fn commercial_disclosure(props: &SubPageProps) -> Html {
    html! {
        <LegalPage title="特定商取引法に基づく表記" on_navigate={props.on_navigate.clone()}>
            <section>
                <dl>
                    <dt>{"販売事業者"}</dt>
                    <dd>{"gold運営事務局"}</dd>
                    <dt>{"運営責任者"}</dt>
                    <dd>{"運営責任者名"}</dd>
                    <dt>{"所在地"}</dt>
                    <dd>{"東京都（請求があった場合、遅滞なく開示いたします）"}</dd>
                    <dt>{"連絡先"}</dt>
                    <dd>{"LINE公式アカウントまたは電話にてお問い合わせください"}</dd>
                    <dt>{"販売価格"}</dt>
                    <dd>{"キャストのクラスごとにサービスページに表示"}</dd>
                    <dt>{"支払方法"}</dt>
                    <dd>{"クレジットカード決済（後払い）"}</dd>
                    <dt>{"役務の提供時期"}</dt>
                    <dd>{"予約成立後、指定の日時に提供"}</dd>
                    <dt>{"キャンセル"}</dt>
                    <dd>{"キャスト出発後のキャンセルは所定のキャンセル料を申し受けます"}</dd>
                </dl>
            </section>
        </LegalPage>
    }
}

#[function_component(CompanyProfile)]
pub fn company_profile(props: &SubPageProps) -> Html {
    html! {
        <LegalPage title="会社概要" on_navigate={props.on_navigate.clone()}>
            <section>
                <dl>
                    <dt>{"サービス名"}</dt>
                    <dd>{"gold Premium Matching Service"}</dd>
                    <dt>{"事業内容"}</dt>
                    <dd>{"ギャラ飲みマッチングサービスの企画・運営"}</dd>
                    <dt>{"設立"}</dt>
                    <dd>{"2024年"}</dd>
                    <dt>{"営業時間"}</dt>
                    <dd>{"24時間365日（コンシェルジュ対応）"}</dd>
                    <dt>{"対応エリア"}</dt>
                    <dd>{"東京・大阪ほか主要都市"}</dd>
                </dl>
            </section>
            <section>
                <h2>{"ミッション"}</h2>
                <p>{"厳選されたキャストと確かな安心を通じて、特別な夜に最高のエンターテインメントを\
                     お届けします。"}</p>
            </section>
        </LegalPage>
    }
}
