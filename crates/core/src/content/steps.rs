use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Step {
    pub number: u8,
    pub title: &'static str,
    pub image: &'static str,
    pub points: &'static [&'static str],
}

pub const STEPS: [Step; 4] = [
    Step {
        number: 1,
        title: "Order the Kit & Collect Samples at Home",
        image: "images/step1-kit.jpg",
        points: &[
            "Purchase the kit via website",
            "Kit arrives in 1–2 business days with free US shipping.",
            "Follow the guided instructions",
            "Seal everything and ship back using the prepaid labels.",
            "Track sample status in the app.",
        ],
    },
    Step {
        number: 2,
        title: "Lab & AI Analysis",
        image: "images/step2-lab.jpg",
        points: &[
            "Genotype 50+ SNPs using qPCR.",
            "Sequence your skin microbiome.",
            "Process data through ETL pipeline.",
            "AI/ML model generates risk scores (wrinkles, dryness, acne, pigmentation, sensitivity).",
        ],
    },
    Step {
        number: 3,
        title: "Personalized Results",
        image: "images/step3-results.jpg",
        points: &[
            "Receive notification when results are ready (~1 week total).",
            "Log in to your secure dashboard.",
            "View genetic and microbiome insights.",
            "Get AI-powered skincare recommendations (products, dosage, routine builder).",
            "Full data privacy and control over sharing.",
        ],
    },
    Step {
        number: 4,
        title: "Ongoing Progress Tracking (Subscription)",
        image: "images/step4-tracking.jpg",
        points: &[
            "Monitor how your skin changes over time.",
            "Monthly check-ins and AI recalibration.",
            "Updated product recommendations as your skin evolves.",
            "Seasonal adjustments to your routine.",
            "Long-term skincare optimization based on real data.",
        ],
    },
];
