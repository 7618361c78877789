//! Fixed marketing copy for every section of the page.
//!
//! Everything here is a `&'static` literal; nothing is computed, fetched
//! or persisted. The demo answers in particular are the whole of the
//! product's "intelligence".

/// One rotating chat bubble in the hero section.
pub struct ChatMessage {
    pub emoji: &'static str,
    pub text: &'static str,
    pub from_bot: bool,
}

pub const CHAT_MESSAGES: [ChatMessage; 4] = [
    ChatMessage {
        emoji: "☕",
        text: "3,200 PKR last month… caffeine is expensive love.",
        from_bot: false,
    },
    ChatMessage {
        emoji: "🍛",
        text: "2,400 PKR this week… special occasion?",
        from_bot: false,
    },
    ChatMessage {
        emoji: "🚗",
        text: "9 rides in 3 days… chai ka budget kahan gaya?",
        from_bot: false,
    },
    ChatMessage {
        emoji: "🤖",
        text: "Want to know your full story? Let's talk.",
        from_bot: true,
    },
];

pub const HERO_BADGE: &str = "Made in Pakistan 🇵🇰";
pub const HERO_TITLE: &str = "Your Expenses Are Talking";
pub const HERO_SUBTITLE: &str =
    "The first AI expense tracker that speaks your language. Chat with your money in Urdu, English, or Hinglish!";
pub const HERO_CTA_PRIMARY: &str = "Start Talking to Your Wallet →";
pub const HERO_CTA_SECONDARY: &str = "See How It Works";

/// The phone-mockup conversation next to the hero copy.
pub const PHONE_CONVERSATION: [(&str, bool); 4] = [
    ("How much did I spend on food this week?", false),
    ("You spent 4,200 PKR on food this week. That's 15% of your budget!", true),
    ("Kya main budget se zyada spend kar raha hun?", false),
    ("Abhi tak sab theek hai! 2,800 PKR budget bacha hai 😊", true),
];

pub const HOW_TITLE: &str = "How It Works";
pub const HOW_SUBTITLE: &str = "Three simple steps to financial clarity";

/// (step title, step description)
pub const HOW_IT_WORKS: [(&str, &str); 3] = [
    ("1️⃣ Snap & Scan", "Upload or snap your receipt, we read it instantly using AI"),
    ("2️⃣ Talk to Your Expenses", "Ask anything, like \"How much on groceries last month?\""),
    ("3️⃣ Get Reports & Alerts", "Daily, weekly, monthly summaries + budget warnings"),
];

pub const PERSONAS_TITLE: &str = "Made for Every Pakistani";
pub const PERSONAS_SUBTITLE: &str = "See how WalletWala fits your lifestyle";

/// One lifestyle persona card; `example` and `tip` are revealed for the
/// selected card only.
pub struct Persona {
    pub icon: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub example: [&'static str; 3],
    pub tip: &'static str,
}

pub const PERSONAS: [Persona; 5] = [
    Persona {
        icon: "🎓",
        title: "The Student",
        subtitle: "Keeps track of chai & notes",
        example: [
            "Monthly chai budget: 1,200 PKR",
            "Books & supplies: 3,500 PKR",
            "Transport: 2,000 PKR",
        ],
        tip: "Get alerts when your chai money runs low!",
    },
    Persona {
        icon: "💻",
        title: "The Freelancer",
        subtitle: "Knows when client paid late",
        example: [
            "Client A: Payment due 3 days ago",
            "Internet bill: 2,500 PKR",
            "Co-working space: 8,000 PKR",
        ],
        tip: "Track irregular income and plan for dry spells",
    },
    Persona {
        icon: "🛍️",
        title: "The Shopaholic",
        subtitle: "Alerts when sale season gets dangerous",
        example: [
            "Shopping this month: 15,600 PKR",
            "Budget remaining: 4,400 PKR",
            "Sale alert: Khaadi 50% off!",
        ],
        tip: "Set shopping limits and get warned before overspending",
    },
    Persona {
        icon: "👨‍👩‍👧‍👦",
        title: "The Family Planner",
        subtitle: "Keeps Eid shopping in budget",
        example: [
            "Eid budget: 25,000 PKR",
            "Clothes: 12,000 PKR spent",
            "Gifts: 8,000 PKR remaining",
        ],
        tip: "Plan family expenses and special occasions",
    },
    Persona {
        icon: "💼",
        title: "The Professional",
        subtitle: "Tracks office lunches & fuel",
        example: [
            "Fuel this month: 8,500 PKR",
            "Office lunches: 4,200 PKR",
            "Parking fees: 1,800 PKR",
        ],
        tip: "Manage work-related expenses efficiently",
    },
];

/// Scale legend under the mood display.
pub const MOOD_SCALE: [&str; 3] = ["😁 Rich", "😐 Okay", "😰 Broke"];

/// (emoji, label) for the three scenario preset buttons, index-aligned
/// with [`crate::meter::PRESETS`].
pub const PRESET_LABELS: [(&str, &str); 3] = [
    ("😁", "Under Budget"),
    ("😐", "On Track"),
    ("😰", "Overspent"),
];

pub const METER_TITLE: &str = "Your Wallet Has Feelings Too";
pub const METER_SUBTITLE: &str =
    "Drag the slider to see how your spending affects your wallet's mood";
pub const METER_TIP: &str =
    "💡 Try it: Drag the slider above to see how your wallet reacts to different spending levels!";

/// The demo box's entire question-answering capability.
pub const DEMO_RESPONSES: [(&str, &str); 4] = [
    (
        "where did my money go this week",
        "45% on groceries, 30% on transport, 15% on eating out, 10% on utilities.",
    ),
    (
        "how much on food last month",
        "You spent 15,600 PKR on food last month. That's 800 PKR more than usual!",
    ),
    (
        "show my biggest expense",
        "Your biggest expense was rent at 35,000 PKR, followed by groceries at 8,200 PKR.",
    ),
    (
        "am i overspending",
        "You're 2,100 PKR over budget this month. Maybe skip a few Careem rides? 😉",
    ),
];

pub const DEMO_FALLBACK: &str =
    "I can help you track expenses, analyze spending patterns, and set budgets. Try asking about your spending!";

pub const DEMO_TITLE: &str = "Try It Live";
pub const DEMO_SUBTITLE: &str = "Ask your expenses anything - see how WalletWala responds";
pub const DEMO_PLACEHOLDER: &str = "Try: 'where did my money go this week'";
pub const DEMO_EMPTY_HINT: &str = "Type a question to see how WalletWala responds!";

pub const DEMO_SUGGESTIONS: [&str; 3] = [
    "How much on food last month",
    "Show my biggest expense",
    "Am I overspending",
];

pub const FEATURES_TITLE: &str = "Why WalletWala";
pub const FEATURES_SUBTITLE: &str = "Everything you need to master your money";

/// (title, description) feature cards.
pub const FEATURES: [(&str, &str); 6] = [
    ("📷 Auto Receipt Scan", "Snap and forget - we handle the rest"),
    ("📊 Smart Reports", "Beautiful insights in plain language"),
    ("🔔 Overspending Alerts", "Get warned before you go overboard"),
    ("💬 Chat with Expenses", "Ask questions in Urdu or English"),
    ("🔍 Category Insights", "See where every rupee goes"),
    ("☁️ Cloud Sync", "Access your data anywhere, anytime"),
];

pub const TESTIMONIALS_TITLE: &str = "What People Say";

pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 2] = [
    Testimonial {
        quote: "WalletWala saved me 12,000 PKR in 2 months! Finally I know where my money goes.",
        author: "— Ahmed, Karachi",
    },
    Testimonial {
        quote: "Finally an expense tracker that speaks my language. Love the Urdu support!",
        author: "— Fatima, Lahore",
    },
];

pub const CTA_TITLE: &str = "Ready to make your expenses talk?";
pub const CTA_SUBTITLE: &str = "📲 Install WalletWala on your phone today!";
pub const CTA_BUTTON: &str = "Install Now";

pub const FOOTER_TAGLINE: &str = "Making expense tracking conversational for Pakistan.";

/// (column title, links)
pub const FOOTER_COLUMNS: [(&str, &[&str]); 2] = [
    ("Product", &["Features", "Pricing", "Download"]),
    ("Company", &["About", "Contact", "Privacy Policy", "Terms"]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_keys_are_normalized() {
        // The responder lowercases and trims input before the exact-match
        // lookup, so the table keys must already be in that form.
        for (question, _) in DEMO_RESPONSES {
            assert_eq!(question, question.to_lowercase());
            assert_eq!(question, question.trim());
        }
    }

    #[test]
    fn test_preset_labels_align_with_presets() {
        assert_eq!(PRESET_LABELS.len(), crate::meter::PRESETS.len());
    }
}
