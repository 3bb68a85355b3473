use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct KitOffer {
    pub title: &'static str,
    pub summary: &'static str,
    pub features: [&'static str; 4],
    pub main_image: &'static str,
    pub thumbnails: [&'static str; 3],
    pub price_caption: &'static str,
    pub call_to_action: &'static str,
}

pub const KIT_OFFER: KitOffer = KitOffer {
    title: "LumiLab Testing Kit",
    summary: "Your membership includes one comprehensive kit collected once per year.",
    features: [
        "Collect your at-home skin sample using the enclosed sterile swabs.",
        "Ship samples with prepaid label for lab-grade microbiome analysis.",
        "Receive detailed LumiProfile results through the online dashboard.",
        "Includes one complimentary consultation and free shipping.",
    ],
    main_image: "images/kit-main.jpg",
    thumbnails: ["images/kit-angle1.jpg", "images/kit-angle2.jpg", "images/kit-angle3.jpg"],
    price_caption: "PER TEST KIT",
    call_to_action: "PreOrder Now",
};

/// Whole-dollar kit price as shown on the shop card.
pub fn format_kit_price(price_usd: u32) -> String {
    format!("${price_usd}")
}
