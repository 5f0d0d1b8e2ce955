use crate::i18n::content::*;
use crate::i18n::LanguageCode;

// ==================== Spanish Content ====================

/// Spanish content
pub static SPANISH_CONTENT: ContentTree = ContentTree {
    language: LanguageCode::Es,

    nav: &[
        NavLink { label: "Servicios", href: "#services" },
        NavLink { label: "Sectores", href: "#sectors" },
        NavLink { label: "Academia", href: "#academy" },
        NavLink { label: "Tienda", href: "#shop" },
        NavLink { label: "Auditoría", href: "#audit" },
    ],

    hero: HeroContent {
        subtitle: "Consultoría · Auditoría · Formación",
        title: "Precisión jurasiana al servicio de su rendimiento",
        description: "Acompañamos a las empresas del Arco jurasiano hacia la certificación, \
desde el análisis de brechas hasta la auditoría final.",
        primary_cta: "Solicitar una auditoría",
        secondary_cta: "Descubrir la academia",
        highlights: &[
            "Consultores certificados IRCA",
            "Acompañamiento en francés, inglés, español y árabe",
            "Más de 120 empresas certificadas",
        ],
    },

    stats: &[
        Stat { label: "Clientes acompañados", value: 120, suffix: "+", description: "Pymes e industrias de la Suiza francófona" },
        Stat { label: "Tasa de certificación", value: 98, suffix: " %", description: "Éxito en la primera auditoría" },
        Stat { label: "Formaciones", value: 45, suffix: "", description: "Sesiones organizadas cada año" },
        Stat { label: "Años de experiencia", value: 15, suffix: "", description: "Al servicio de la calidad" },
    ],

    sectors: SectorsContent {
        title: "Sectores",
        description: "Una experiencia arraigada en la economía regional",
        items: &[
            Sector { title: "Relojería", description: "Trazabilidad y control de procesos de precisión." },
            Sector { title: "Salud", description: "Dispositivos médicos y requisitos regulatorios." },
            Sector { title: "Administración pública", description: "Gobernanza, procesos y seguridad de los datos." },
            Sector { title: "Pymes industriales", description: "Sistemas de gestión adaptados a su tamaño." },
        ],
    },

    services: ServicesContent {
        title: "Servicios",
        description: "Tres pilares para sistemas de gestión que funcionan",
        items: &[
            Service {
                title: "Consultoría",
                tagline: "Estructurar sin complicar",
                description: "Análisis de brechas, diseño de procesos y documentación a medida.",
                features: &["Análisis de brechas", "Mapa de procesos", "Plan de acción priorizado"],
            },
            Service {
                title: "Auditoría",
                tagline: "Ver lo que importa",
                description: "Auditorías internas y auditorías de prueba antes de la certificación.",
                features: &["Auditoría interna", "Auditoría de proveedores", "Auditoría de prueba"],
            },
            Service {
                title: "Formación",
                tagline: "Transmitir los buenos reflejos",
                description: "Sesiones prácticas, presenciales o a distancia.",
                features: &["Sesiones en empresa", "Talleres prácticos", "Materiales incluidos"],
            },
        ],
    },

    academy: AcademyContent {
        title: "Academia",
        description: "Formaciones concretas para que sus equipos progresen",
        filters: &["Calidad", "Seguridad de la información", "Liderazgo"],
        courses: &[
            Course {
                title: "ISO 9001 Lead Implementer",
                description: "Implantar un sistema de gestión de la calidad de principio a fin.",
                category: "Calidad",
                badge: "Certificable",
                duration: "5 días",
                level: "Avanzado",
                rating: 4.9,
            },
            Course {
                title: "Auditor interno ISO 9001",
                description: "Planificar, realizar y presentar una auditoría interna.",
                category: "Calidad",
                badge: "Nuevo",
                duration: "3 días",
                level: "Intermedio",
                rating: 4.7,
            },
            Course {
                title: "Fundamentos ISO 27001",
                description: "Comprender los requisitos de la seguridad de la información.",
                category: "Seguridad de la información",
                badge: "Popular",
                duration: "2 días",
                level: "Principiante",
                rating: 4.8,
            },
            Course {
                title: "Liderar el cambio",
                description: "Implicar a los equipos en la mejora continua.",
                category: "Liderazgo",
                badge: "Taller",
                duration: "1 día",
                level: "Todos los niveles",
                rating: 4.6,
            },
        ],
    },

    shop: ShopContent {
        title: "Tienda",
        description: "Herramientas listas para usar para avanzar más rápido",
        categories: &["Kits documentales", "Cursos en línea", "Acompañamiento"],
        products: &[
            Product {
                title: "Kit Premium ISO 9001",
                description: "Manual, procedimientos y plantillas de registros personalizables.",
                category: "Kits documentales",
                price: 1200,
            },
            Product {
                title: "Caja de herramientas ISO 27001",
                description: "Análisis de riesgos, declaración de aplicabilidad y políticas tipo.",
                category: "Kits documentales",
                price: 1490,
            },
            Product {
                title: "E-learning auditor interno",
                description: "Doce módulos en línea con certificado de finalización.",
                category: "Cursos en línea",
                price: 950,
            },
            Product {
                title: "Pack de acompañamiento a la certificación",
                description: "Cinco medias jornadas de coaching hasta la auditoría de certificación.",
                category: "Acompañamiento",
                price: 1850,
            },
        ],
    },

    audit: AuditContent {
        title: "Auditoría",
        description: "Solicite una preauditoría gratuita de su sistema de gestión",
        standards: &["ISO 9001", "ISO 14001", "ISO 27001", "ISO 45001"],
        form: AuditFormContent {
            title: "Solicitud de preauditoría",
            description: "Respondemos en un plazo de 48 horas hábiles.",
            fields: AuditFormFields {
                name: "Nombre",
                company: "Empresa",
                email: "Correo electrónico",
                phone: "Teléfono",
                standard: "Norma objetivo",
                message: "Mensaje",
            },
            placeholder: "Elija una norma",
            submit: "Enviar solicitud",
            success: "¡Gracias! Nos pondremos en contacto pronto.",
        },
    },

    testimonials: TestimonialsContent {
        title: "Confían en nosotros",
        items: &[
            Testimonial {
                quote: "Certificados en ocho meses, sin papeleo inútil.",
                author: "Claire Boillat",
                role: "Directora de calidad, manufactura relojera",
            },
            Testimonial {
                quote: "Formadores que conocen el terreno y hablan claro.",
                author: "Marc Froidevaux",
                role: "Responsable de producción",
            },
            Testimonial {
                quote: "La auditoría de prueba nos evitó malas sorpresas.",
                author: "Sonia Rérat",
                role: "Administradora, pyme industrial",
            },
        ],
    },

    cart: CartContent {
        title: "Carrito",
        empty: "Tu carrito está vacío.",
        cta: "Seguir comprando",
    },

    footer: FooterContent {
        newsletter: NewsletterContent {
            title: "Boletín",
            description: "Un correo al mes sobre normas, auditorías y nuestras formaciones.",
            placeholder: "tu@empresa.ch",
            cta: "Suscribirse",
            success: "¡Suscripción confirmada, gracias!",
        },
        columns: &[
            FooterColumn {
                title: "Empresa",
                links: &[
                    NavLink { label: "Servicios", href: "#services" },
                    NavLink { label: "Sectores", href: "#sectors" },
                    NavLink { label: "Testimonios", href: "#testimonials" },
                ],
            },
            FooterColumn {
                title: "Recursos",
                links: &[
                    NavLink { label: "Academia", href: "#academy" },
                    NavLink { label: "Tienda", href: "#shop" },
                    NavLink { label: "Preauditoría", href: "#audit" },
                ],
            },
        ],
        bottom: "© {year} Aigle Jurassien. Todos los derechos reservados.",
    },

    ui: UiLabels {
        all: "Todas",
        search_placeholder: "Buscar soluciones",
        add_to_cart: "Añadir al carrito",
        empty_state: "Ningún elemento coincide con tus filtros.",
        max: "Máx",
        previous: "Anterior",
        next: "Siguiente",
    },
};
