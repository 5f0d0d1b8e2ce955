use crate::i18n::content::*;
use crate::i18n::LanguageCode;

// ==================== English Content ====================

/// English content
pub static ENGLISH_CONTENT: ContentTree = ContentTree {
    language: LanguageCode::En,

    nav: &[
        NavLink { label: "Services", href: "#services" },
        NavLink { label: "Sectors", href: "#sectors" },
        NavLink { label: "Academy", href: "#academy" },
        NavLink { label: "Shop", href: "#shop" },
        NavLink { label: "Audit", href: "#audit" },
    ],

    hero: HeroContent {
        subtitle: "Consulting · Audit · Training",
        title: "Jura precision for your performance",
        description: "We guide companies across the Jura Arc towards certification, \
from gap analysis to the final audit.",
        primary_cta: "Request an audit",
        secondary_cta: "Explore the academy",
        highlights: &[
            "IRCA-certified consultants",
            "Support in French, English, Spanish and Arabic",
            "More than 120 certified companies",
        ],
    },

    stats: &[
        Stat { label: "Clients supported", value: 120, suffix: "+", description: "SMEs and manufacturers in western Switzerland" },
        Stat { label: "Certification rate", value: 98, suffix: "%", description: "Passed at the first audit" },
        Stat { label: "Courses", value: 45, suffix: "", description: "Sessions held every year" },
        Stat { label: "Years of experience", value: 15, suffix: "", description: "Dedicated to quality" },
    ],

    sectors: SectorsContent {
        title: "Sectors",
        description: "Expertise rooted in the regional economy",
        items: &[
            Sector { title: "Watchmaking", description: "Traceability and control of precision processes." },
            Sector { title: "Healthcare", description: "Medical devices and regulatory requirements." },
            Sector { title: "Public administration", description: "Governance, processes and data security." },
            Sector { title: "Industrial SMEs", description: "Management systems sized for your company." },
        ],
    },

    services: ServicesContent {
        title: "Services",
        description: "Three pillars for management systems that stay alive",
        items: &[
            Service {
                title: "Consulting",
                tagline: "Structure without the weight",
                description: "Gap analysis, process design and tailored documentation.",
                features: &["Gap analysis", "Process mapping", "Prioritised action plan"],
            },
            Service {
                title: "Audit",
                tagline: "See what matters",
                description: "Internal audits and mock audits ahead of certification.",
                features: &["Internal audit", "Supplier audit", "Mock audit"],
            },
            Service {
                title: "Training",
                tagline: "Build the right habits",
                description: "Hands-on sessions, on site or remote.",
                features: &["In-house sessions", "Practical workshops", "Materials included"],
            },
        ],
    },

    academy: AcademyContent {
        title: "Academy",
        description: "Practical courses that move your teams forward",
        filters: &["Quality", "Information security", "Leadership"],
        courses: &[
            Course {
                title: "ISO 9001 Lead Implementer",
                description: "Roll out a quality management system end to end.",
                category: "Quality",
                badge: "Certified",
                duration: "5 days",
                level: "Advanced",
                rating: 4.9,
            },
            Course {
                title: "ISO 9001 Internal Auditor",
                description: "Plan, run and report on an internal audit.",
                category: "Quality",
                badge: "New",
                duration: "3 days",
                level: "Intermediate",
                rating: 4.7,
            },
            Course {
                title: "ISO 27001 Foundations",
                description: "Understand the requirements of information security.",
                category: "Information security",
                badge: "Popular",
                duration: "2 days",
                level: "Beginner",
                rating: 4.8,
            },
            Course {
                title: "Leading change",
                description: "Bring teams on board with continual improvement.",
                category: "Leadership",
                badge: "Workshop",
                duration: "1 day",
                level: "All levels",
                rating: 4.6,
            },
        ],
    },

    shop: ShopContent {
        title: "Shop",
        description: "Ready-to-use tools to move faster",
        categories: &["Documentation kits", "Online courses", "Coaching"],
        products: &[
            Product {
                title: "ISO 9001 Premium kit",
                description: "Manual, procedures and customisable record templates.",
                category: "Documentation kits",
                price: 1200,
            },
            Product {
                title: "ISO 27001 toolkit",
                description: "Risk assessment, statement of applicability and policy templates.",
                category: "Documentation kits",
                price: 1490,
            },
            Product {
                title: "Internal auditor e-learning",
                description: "Twelve online modules with a certificate of completion.",
                category: "Online courses",
                price: 950,
            },
            Product {
                title: "Certification coaching pack",
                description: "Five half-days of coaching up to the certification audit.",
                category: "Coaching",
                price: 1850,
            },
        ],
    },

    audit: AuditContent {
        title: "Audit",
        description: "Request a free pre-audit of your management system",
        standards: &["ISO 9001", "ISO 14001", "ISO 27001", "ISO 45001"],
        form: AuditFormContent {
            title: "Pre-audit request",
            description: "We reply within 48 working hours.",
            fields: AuditFormFields {
                name: "Name",
                company: "Company",
                email: "Email",
                phone: "Phone",
                standard: "Target standard",
                message: "Message",
            },
            placeholder: "Choose a standard",
            submit: "Send request",
            success: "Thank you! We will be in touch shortly.",
        },
    },

    testimonials: TestimonialsContent {
        title: "They trust us",
        items: &[
            Testimonial {
                quote: "Certified in eight months, without pointless paperwork.",
                author: "Claire Boillat",
                role: "Quality director, watch manufacturer",
            },
            Testimonial {
                quote: "Trainers who know the shop floor and speak plainly.",
                author: "Marc Froidevaux",
                role: "Production manager",
            },
            Testimonial {
                quote: "The mock audit spared us some nasty surprises.",
                author: "Sonia Rérat",
                role: "Director, industrial SME",
            },
        ],
    },

    cart: CartContent {
        title: "Cart",
        empty: "Your cart is empty.",
        cta: "Continue shopping",
    },

    footer: FooterContent {
        newsletter: NewsletterContent {
            title: "Newsletter",
            description: "One email a month about standards, audits and our courses.",
            placeholder: "you@company.ch",
            cta: "Subscribe",
            success: "You're subscribed, thank you!",
        },
        columns: &[
            FooterColumn {
                title: "Company",
                links: &[
                    NavLink { label: "Services", href: "#services" },
                    NavLink { label: "Sectors", href: "#sectors" },
                    NavLink { label: "Testimonials", href: "#testimonials" },
                ],
            },
            FooterColumn {
                title: "Resources",
                links: &[
                    NavLink { label: "Academy", href: "#academy" },
                    NavLink { label: "Shop", href: "#shop" },
                    NavLink { label: "Pre-audit", href: "#audit" },
                ],
            },
        ],
        bottom: "© {year} Aigle Jurassien. All rights reserved.",
    },

    ui: UiLabels {
        all: "All",
        search_placeholder: "Search solutions",
        add_to_cart: "Add to cart",
        empty_state: "No items match your filters.",
        max: "Max",
        previous: "Prev",
        next: "Next",
    },
};
