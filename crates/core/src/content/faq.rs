use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ_ENTRIES: [FaqEntry; 6] = [
    FaqEntry {
        question: "What makes LumiLab different?",
        answer: "LumiLab combines advanced microbiome analysis with design simplicity, giving you \
                 a routine that's truly tailored to your skin.",
    },
    FaqEntry {
        question: "Is LumiLab safe for sensitive skin?",
        answer: "Yes. Our tests and recommendations are dermatologist-reviewed and safe for all \
                 skin types.",
    },
    FaqEntry {
        question: "How long does it take to get results?",
        answer: "Once your sample is received, results appear in your LumiProfile dashboard \
                 within 5–7 days.",
    },
    FaqEntry {
        question: "How often should I take the test?",
        answer: "We recommend taking the test once per year to track changes in your skin \
                 microbiome and update your personalized routine.",
    },
    FaqEntry {
        question: "What's included in my LumiProfile?",
        answer: "Your LumiProfile includes detailed microbiome analysis, genetic insights, \
                 personalized product recommendations, and a custom routine builder.",
    },
    FaqEntry {
        question: "Can I cancel my subscription anytime?",
        answer: "Yes, you can cancel your subscription at any time through your account \
                 dashboard with no cancellation fees.",
    },
];
