//! Static site content: the project showcase, pricing tiers and contact
//! channels. Everything here is build-time data; the components only read it.

pub struct PortfolioItem {
    pub id: &'static str,
    pub title: &'static str,
    pub full_title: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
    pub link: &'static str,
    pub tags: &'static [&'static str],
}

pub const PORTFOLIO_ITEMS: &[PortfolioItem] = &[
    PortfolioItem {
        id: "premium-landing",
        title: "Premium Landing Page",
        full_title: "Luxury Brand Landing Page",
        description: "A landing page built around luxury minimalism, delivering a \
            refined brand experience. GSAP-driven animation and restrained \
            typography carry the premium positioning without getting in the way \
            of the message.",
        image_url: "/portfolio/landing-page-1.jpg",
        link: "https://premium-landing-demo.vercel.app/",
        tags: &["Next.js", "GSAP", "ScrollTrigger", "Google Fonts"],
    },
    PortfolioItem {
        id: "travel-landing",
        title: "Interactive Landing Page",
        full_title: "Interactive Landing Page",
        description: "An immersive scroll story combining Three.js 3D scenes with \
            GSAP timelines. Framer Motion handles the page transitions so the \
            whole journey stays smooth from hero to footer.",
        image_url: "/portfolio/landing-page-2.jpg",
        link: "https://travel-landing-demo.vercel.app/",
        tags: &["Next.js", "Three.js", "GSAP", "Framer Motion"],
    },
    PortfolioItem {
        id: "sales-funnel",
        title: "Sales Funnel Landing Page",
        full_title: "Sales Funnel Landing Page",
        description: "A conversion-focused funnel page with an interactive scroll \
            experience built on ScrollTrigger, styled with Tailwind CSS and tuned \
            for fast first paint.",
        image_url: "/portfolio/landing-page-3.jpg",
        link: "https://ebook-funnel-demo.vercel.app/",
        tags: &["Next.js", "GSAP", "ScrollTrigger", "Tailwind CSS"],
    },
    PortfolioItem {
        id: "analytics-dashboard",
        title: "User Analytics Dashboard",
        full_title: "Real-Time User Analytics Dashboard",
        description: "A full-stack dashboard on Next.js and Supabase with live \
            data visualisation, responsive layout and dark mode throughout.",
        image_url: "/portfolio/analytics-dashboard.jpg",
        link: "https://analytics-dashboard-demo.vercel.app/dashboard",
        tags: &["Next.js", "Supabase", "Tailwind CSS", "Real-time Data"],
    },
];

pub struct PricingTier {
    pub id: &'static str,
    pub name: &'static str,
    pub price: &'static str,
    /// Struck-through price shown next to a discounted one.
    pub original_price: Option<&'static str>,
    pub price_note: Option<&'static str>,
    pub badge: &'static str,
    pub features: &'static [&'static str],
    pub footnote: &'static str,
    /// The single "BEST" tier gets the inverted card treatment.
    pub highlighted: bool,
}

pub const PRICING_TIERS: &[PricingTier] = &[
    PricingTier {
        id: "landing-package",
        name: "Business Landing Package",
        price: "$590",
        original_price: Some("$890"),
        price_note: Some("* first-order discount (33% off)"),
        badge: "One-time payment",
        features: &[
            "Delivered within 3 days",
            "Modern, on-brand design",
            "Responsive mobile support",
            "Tailored UI/UX layout",
        ],
        footnote: "Preview the result in 3 days",
        highlighted: false,
    },
    PricingTier {
        id: "insight-package",
        name: "Business Insight Package",
        price: "$1,290",
        original_price: None,
        price_note: Some("+ $99/mo maintenance"),
        badge: "Data visualisation",
        features: &[
            "Landing page included",
            "User account management",
            "Data visualisation",
            "Core backend features",
        ],
        footnote: "Preview the result in 1 week",
        highlighted: true,
    },
    PricingTier {
        id: "hosting-package",
        name: "Enterprise Hosting Package",
        price: "$1,990",
        original_price: None,
        price_note: Some("+ $149/mo maintenance"),
        badge: "AWS deployment",
        features: &[
            "Dashboard features included",
            "AWS server deployment",
            "CDN optimisation",
            "Domain setup support",
        ],
        footnote: "Timeline agreed per project scope",
        highlighted: false,
    },
    PricingTier {
        id: "ownership-package",
        name: "Full Ownership Package",
        price: "$2,900",
        original_price: None,
        price_note: None,
        badge: "One-time, no recurring fees",
        features: &[
            "Complete source code",
            "Database schema",
            "Technical documentation",
            "Setup guide",
        ],
        footnote: "Handed over on project completion",
        highlighted: false,
    },
];

pub struct ContactChannel {
    pub id: &'static str,
    pub heading: &'static str,
    pub href: &'static str,
    pub label: &'static str,
    pub note: &'static str,
}

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        id: "contact-sms",
        heading: "Text Us",
        href: "sms:+15550134",
        label: "+1 (555) 013-4000",
        note: "Text message preferred",
    },
    ContactChannel {
        id: "contact-email",
        heading: "Email Us",
        href: "mailto:hello@devone.studio",
        label: "hello@devone.studio",
        note: "We reply within 24 hours",
    },
];

pub const GITHUB_URL: &str = "https://github.com/devone-studio";

pub const PRICING_SECTION_ID: &str = "pricing-section";
pub const CONTACT_SECTION_ID: &str = "contact-section";

/// Section ids in page order, used by the scroll controller and the nav.
pub fn section_ids() -> Vec<&'static str> {
    PORTFOLIO_ITEMS
        .iter()
        .map(|item| item.id)
        .chain([PRICING_SECTION_ID, CONTACT_SECTION_ID])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portfolio_ids_are_unique_and_non_empty() {
        let mut seen = std::collections::HashSet::new();
        for item in PORTFOLIO_ITEMS {
            assert!(!item.id.is_empty());
            assert!(seen.insert(item.id), "duplicate id {}", item.id);
        }
    }

    #[test]
    fn section_order_is_items_then_pricing_then_contact() {
        let ids = section_ids();
        assert_eq!(ids.len(), PORTFOLIO_ITEMS.len() + 2);
        for (id, item) in ids.iter().zip(PORTFOLIO_ITEMS) {
            assert_eq!(*id, item.id);
        }
        assert_eq!(ids[ids.len() - 2], PRICING_SECTION_ID);
        assert_eq!(ids[ids.len() - 1], CONTACT_SECTION_ID);
    }

    #[test]
    fn exactly_one_highlighted_tier() {
        let highlighted = PRICING_TIERS.iter().filter(|t| t.highlighted).count();
        assert_eq!(highlighted, 1);
    }
}
