use crate::i18n::content::*;
use crate::i18n::LanguageCode;

// ==================== French Content ====================

/// French content (default language)
pub static FRENCH_CONTENT: ContentTree = ContentTree {
    language: LanguageCode::Fr,

    nav: &[
        NavLink { label: "Services", href: "#services" },
        NavLink { label: "Secteurs", href: "#sectors" },
        NavLink { label: "Académie", href: "#academy" },
        NavLink { label: "Boutique", href: "#shop" },
        NavLink { label: "Audit", href: "#audit" },
    ],

    hero: HeroContent {
        subtitle: "Conseil · Audit · Formation",
        title: "La précision jurassienne au service de votre performance",
        description: "Nous accompagnons les entreprises de l'Arc jurassien vers la certification, \
de l'analyse des écarts jusqu'à l'audit final.",
        primary_cta: "Demander un audit",
        secondary_cta: "Découvrir l'académie",
        highlights: &[
            "Consultants certifiés IRCA",
            "Accompagnement en français, anglais, espagnol et arabe",
            "Plus de 120 entreprises certifiées",
        ],
    },

    stats: &[
        Stat { label: "Clients accompagnés", value: 120, suffix: "+", description: "PME et industriels de Suisse romande" },
        Stat { label: "Taux de certification", value: 98, suffix: " %", description: "Réussite au premier audit" },
        Stat { label: "Formations", value: 45, suffix: "", description: "Sessions organisées chaque année" },
        Stat { label: "Années d'expérience", value: 15, suffix: "", description: "Au service de la qualité" },
    ],

    sectors: SectorsContent {
        title: "Secteurs",
        description: "Une expertise ancrée dans le tissu économique régional",
        items: &[
            Sector { title: "Horlogerie", description: "Traçabilité et maîtrise des procédés de précision." },
            Sector { title: "Santé", description: "Dispositifs médicaux et exigences réglementaires." },
            Sector { title: "Administration publique", description: "Gouvernance, processus et sécurité des données." },
            Sector { title: "PME industrielles", description: "Systèmes de management adaptés à votre taille." },
        ],
    },

    services: ServicesContent {
        title: "Services",
        description: "Trois piliers pour des systèmes de management qui vivent",
        items: &[
            Service {
                title: "Conseil",
                tagline: "Structurer sans alourdir",
                description: "Analyse des écarts, conception des processus et documentation sur mesure.",
                features: &["Analyse des écarts", "Cartographie des processus", "Plan d'action priorisé"],
            },
            Service {
                title: "Audit",
                tagline: "Voir ce qui compte",
                description: "Audits internes et audits à blanc avant la certification.",
                features: &["Audit interne", "Audit fournisseur", "Audit à blanc"],
            },
            Service {
                title: "Formation",
                tagline: "Transmettre les bons réflexes",
                description: "Des sessions pratiques, en présentiel ou à distance.",
                features: &["Sessions intra-entreprise", "Ateliers pratiques", "Supports inclus"],
            },
        ],
    },

    academy: AcademyContent {
        title: "Académie",
        description: "Des formations concrètes pour faire progresser vos équipes",
        filters: &["Qualité", "Sécurité de l'information", "Leadership"],
        courses: &[
            Course {
                title: "ISO 9001 Lead Implementer",
                description: "Déployer un système de management de la qualité de bout en bout.",
                category: "Qualité",
                badge: "Certifiant",
                duration: "5 jours",
                level: "Avancé",
                rating: 4.9,
            },
            Course {
                title: "Auditeur interne ISO 9001",
                description: "Planifier, conduire et restituer un audit interne.",
                category: "Qualité",
                badge: "Nouveau",
                duration: "3 jours",
                level: "Intermédiaire",
                rating: 4.7,
            },
            Course {
                title: "ISO 27001 Fondamentaux",
                description: "Comprendre les exigences de la sécurité de l'information.",
                category: "Sécurité de l'information",
                badge: "Populaire",
                duration: "2 jours",
                level: "Débutant",
                rating: 4.8,
            },
            Course {
                title: "Piloter le changement",
                description: "Embarquer les équipes dans une démarche d'amélioration continue.",
                category: "Leadership",
                badge: "Atelier",
                duration: "1 jour",
                level: "Tous niveaux",
                rating: 4.6,
            },
        ],
    },

    shop: ShopContent {
        title: "Boutique",
        description: "Des outils prêts à l'emploi pour avancer plus vite",
        categories: &["Kits documentaires", "Formations en ligne", "Accompagnement"],
        products: &[
            Product {
                title: "Kit Premium ISO 9001",
                description: "Manuel, procédures et modèles d'enregistrements personnalisables.",
                category: "Kits documentaires",
                price: 1200,
            },
            Product {
                title: "Boîte à outils ISO 27001",
                description: "Analyse de risques, déclaration d'applicabilité et politiques types.",
                category: "Kits documentaires",
                price: 1490,
            },
            Product {
                title: "E-learning auditeur interne",
                description: "Parcours en ligne de douze modules avec attestation.",
                category: "Formations en ligne",
                price: 950,
            },
            Product {
                title: "Pack accompagnement certification",
                description: "Cinq demi-journées de coaching jusqu'à l'audit de certification.",
                category: "Accompagnement",
                price: 1850,
            },
        ],
    },

    audit: AuditContent {
        title: "Audit",
        description: "Demandez un pré-audit gratuit de votre système de management",
        standards: &["ISO 9001", "ISO 14001", "ISO 27001", "ISO 45001"],
        form: AuditFormContent {
            title: "Demande de pré-audit",
            description: "Nous vous répondons sous 48 heures ouvrées.",
            fields: AuditFormFields {
                name: "Nom",
                company: "Entreprise",
                email: "E-mail",
                phone: "Téléphone",
                standard: "Norme visée",
                message: "Message",
            },
            placeholder: "Choisissez une norme",
            submit: "Envoyer la demande",
            success: "Merci ! Nous revenons vers vous rapidement.",
        },
    },

    testimonials: TestimonialsContent {
        title: "Ils nous font confiance",
        items: &[
            Testimonial {
                quote: "Une certification obtenue en huit mois, sans paperasse inutile.",
                author: "Claire Boillat",
                role: "Directrice qualité, manufacture horlogère",
            },
            Testimonial {
                quote: "Des formateurs qui connaissent le terrain et parlent vrai.",
                author: "Marc Froidevaux",
                role: "Responsable production",
            },
            Testimonial {
                quote: "L'audit à blanc nous a évité de mauvaises surprises.",
                author: "Sonia Rérat",
                role: "Administratrice, PME industrielle",
            },
        ],
    },

    cart: CartContent {
        title: "Panier",
        empty: "Votre panier est vide.",
        cta: "Continuer mes achats",
    },

    footer: FooterContent {
        newsletter: NewsletterContent {
            title: "Newsletter",
            description: "Un e-mail par mois sur les normes, les audits et nos formations.",
            placeholder: "votre@email.ch",
            cta: "S'inscrire",
            success: "Inscription confirmée, merci !",
        },
        columns: &[
            FooterColumn {
                title: "Entreprise",
                links: &[
                    NavLink { label: "Services", href: "#services" },
                    NavLink { label: "Secteurs", href: "#sectors" },
                    NavLink { label: "Témoignages", href: "#testimonials" },
                ],
            },
            FooterColumn {
                title: "Ressources",
                links: &[
                    NavLink { label: "Académie", href: "#academy" },
                    NavLink { label: "Boutique", href: "#shop" },
                    NavLink { label: "Pré-audit", href: "#audit" },
                ],
            },
        ],
        bottom: "© {year} Aigle Jurassien. Tous droits réservés.",
    },

    ui: UiLabels {
        all: "Toutes",
        search_placeholder: "Rechercher une solution",
        add_to_cart: "Ajouter au panier",
        empty_state: "Aucun résultat ne correspond à votre recherche.",
        max: "Max",
        previous: "Précédent",
        next: "Suivant",
    },
};
