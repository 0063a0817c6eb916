//! Static site content. Everything here is read-only configuration; the
//! components render it as-is and never mutate or validate it.

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct NavItem {
    pub label: &'static str,
    pub anchor: &'static str,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PricingTier {
    pub name: &'static str,
    pub price: &'static str,
    pub description: &'static str,
    /// CSS class suffix picking the card's accent color.
    pub tone: &'static str,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Testimonial {
    pub author: &'static str,
    pub category: &'static str,
    pub body: &'static str,
    pub rating: u8,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// Outbound booking targets. Embedded literally, never validated here.
pub const LINE_URL: &str = "https://line.me";
pub const TEL_URL: &str = "tel:0000000000";

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "ギャラ飲みとは", anchor: "#about" },
    NavItem { label: "キャストのクラス", anchor: "#classes" },
    NavItem { label: "goldが選ばれている理由", anchor: "#features" },
    NavItem { label: "goldのご利用方法", anchor: "#usage" },
    NavItem { label: "ご利用シーン", anchor: "#scenes" },
    NavItem { label: "安心安全への取り組み", anchor: "#safety" },
    NavItem { label: "利用者の口コミ", anchor: "#reviews" },
    NavItem { label: "よくある質問", anchor: "#faq" },
];

pub const CAST_CLASSES: &[PricingTier] = &[
    PricingTier {
        name: "スタンダード",
        price: "¥6,000 / 1h",
        description: "面接通過率10%をクリアした、愛嬌とルックスを兼ね備えた女性。",
        tone: "standard",
    },
    PricingTier {
        name: "VIP",
        price: "¥12,000 / 1h",
        description: "モデル、インフルエンサー、芸能関係など、圧倒的な華やかさを持つクラス。",
        tone: "vip",
    },
    PricingTier {
        name: "ロイヤル",
        price: "¥25,000 / 1h",
        description: "goldが誇る最高峰のキャスト。容姿・気配り・教養すべてが完璧な極上の体験。",
        tone: "royal",
    },
];

pub const REVIEWS: &[Testimonial] = &[
    Testimonial {
        author: "T.K 様",
        category: "40代 経営者",
        body: "急な接待で華が必要になり利用しました。呼んでから30分で綺麗な方が2名来てくださり、非常に助かりました。キャストの質が非常に高いです。",
        rating: 5,
    },
    Testimonial {
        author: "M.S 様",
        category: "30代 IT関連",
        body: "友達との飲み会に利用。アプリの操作も簡単で、LINEですぐに連絡が取れるのが安心です。キャストの方もノリが良く、最高の夜になりました。",
        rating: 5,
    },
];

pub const FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "予約はいつまでにすれば良いですか？",
        answer: "最短30分前からの当日予約が可能です。もちろん数日前からの事前予約も承っております。",
    },
    FaqEntry {
        question: "キャストの指名はできますか？",
        answer: "はい、可能です。お気に入りのキャストに個別にリクエストを送る機能がございます。",
    },
    FaqEntry {
        question: "領収書の発行は可能ですか？",
        answer: "はい。アプリ内またはLINE経由でPDF形式の領収書を即時発行いただけます。",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratings_stay_in_range() {
        for review in REVIEWS {
            assert!((1..=5).contains(&review.rating));
        }
    }

    #[test]
    fn shipped_content_is_populated() {
        assert_eq!(CAST_CLASSES.len(), 3);
        assert!(!NAV_ITEMS.is_empty());
        assert!(!FAQS.is_empty());
        for item in NAV_ITEMS {
            assert!(!item.label.is_empty());
            assert!(item.anchor.starts_with('#'));
        }
        for faq in FAQS {
            assert!(!faq.question.is_empty());
            assert!(!faq.answer.is_empty());
        }
    }
}
