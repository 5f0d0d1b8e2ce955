use crate::i18n::content::*;
use crate::i18n::LanguageCode;

// ==================== Arabic Content ====================

/// Arabic content (rendered right-to-left)
pub static ARABIC_CONTENT: ContentTree = ContentTree {
    language: LanguageCode::Ar,

    nav: &[
        NavLink { label: "الخدمات", href: "#services" },
        NavLink { label: "القطاعات", href: "#sectors" },
        NavLink { label: "الأكاديمية", href: "#academy" },
        NavLink { label: "المتجر", href: "#shop" },
        NavLink { label: "التدقيق", href: "#audit" },
    ],

    hero: HeroContent {
        subtitle: "استشارات · تدقيق · تدريب",
        title: "دقة جورا في خدمة أدائكم",
        description: "نرافق شركات منطقة جورا نحو الحصول على الشهادة، من تحليل الفجوات حتى التدقيق النهائي.",
        primary_cta: "اطلب تدقيقًا",
        secondary_cta: "اكتشف الأكاديمية",
        highlights: &[
            "مستشارون معتمدون من IRCA",
            "مرافقة بالفرنسية والإنجليزية والإسبانية والعربية",
            "أكثر من 120 شركة حاصلة على الشهادة",
        ],
    },

    stats: &[
        Stat { label: "عملاء رافقناهم", value: 120, suffix: "+", description: "شركات صغيرة ومتوسطة ومصانع في غرب سويسرا" },
        Stat { label: "نسبة النجاح في الشهادة", value: 98, suffix: "٪", description: "النجاح من التدقيق الأول" },
        Stat { label: "الدورات", value: 45, suffix: "", description: "جلسة تُنظَّم كل عام" },
        Stat { label: "سنوات الخبرة", value: 15, suffix: "", description: "في خدمة الجودة" },
    ],

    sectors: SectorsContent {
        title: "القطاعات",
        description: "خبرة متجذرة في الاقتصاد المحلي",
        items: &[
            Sector { title: "صناعة الساعات", description: "التتبع والتحكم في عمليات الدقة." },
            Sector { title: "الصحة", description: "الأجهزة الطبية والمتطلبات التنظيمية." },
            Sector { title: "الإدارة العامة", description: "الحوكمة والعمليات وأمن البيانات." },
            Sector { title: "الشركات الصناعية الصغيرة والمتوسطة", description: "أنظمة إدارة تناسب حجم شركتكم." },
        ],
    },

    services: ServicesContent {
        title: "الخدمات",
        description: "ثلاث ركائز لأنظمة إدارة فعّالة",
        items: &[
            Service {
                title: "الاستشارات",
                tagline: "تنظيم دون تعقيد",
                description: "تحليل الفجوات وتصميم العمليات وتوثيق مصمم حسب الطلب.",
                features: &["تحليل الفجوات", "خرائط العمليات", "خطة عمل ذات أولويات"],
            },
            Service {
                title: "التدقيق",
                tagline: "رؤية ما يهم",
                description: "تدقيقات داخلية وتدقيقات تجريبية قبل الشهادة.",
                features: &["تدقيق داخلي", "تدقيق الموردين", "تدقيق تجريبي"],
            },
            Service {
                title: "التدريب",
                tagline: "نقل العادات الصحيحة",
                description: "جلسات عملية حضورية أو عن بعد.",
                features: &["جلسات داخل الشركة", "ورش عمل تطبيقية", "المواد مشمولة"],
            },
        ],
    },

    academy: AcademyContent {
        title: "الأكاديمية",
        description: "دورات عملية لتطوير فرقكم",
        filters: &["الجودة", "أمن المعلومات", "القيادة"],
        courses: &[
            Course {
                title: "ISO 9001 Lead Implementer",
                description: "تطبيق نظام إدارة الجودة من البداية إلى النهاية.",
                category: "الجودة",
                badge: "معتمد",
                duration: "5 أيام",
                level: "متقدم",
                rating: 4.9,
            },
            Course {
                title: "مدقق داخلي ISO 9001",
                description: "تخطيط التدقيق الداخلي وإجراؤه وعرض نتائجه.",
                category: "الجودة",
                badge: "جديد",
                duration: "3 أيام",
                level: "متوسط",
                rating: 4.7,
            },
            Course {
                title: "أساسيات ISO 27001",
                description: "فهم متطلبات أمن المعلومات.",
                category: "أمن المعلومات",
                badge: "الأكثر طلبًا",
                duration: "يومان",
                level: "مبتدئ",
                rating: 4.8,
            },
            Course {
                title: "قيادة التغيير",
                description: "إشراك الفرق في التحسين المستمر.",
                category: "القيادة",
                badge: "ورشة",
                duration: "يوم واحد",
                level: "جميع المستويات",
                rating: 4.6,
            },
        ],
    },

    shop: ShopContent {
        title: "المتجر",
        description: "أدوات جاهزة للاستخدام لتتقدموا أسرع",
        categories: &["حزم التوثيق", "دورات عبر الإنترنت", "المرافقة"],
        products: &[
            Product {
                title: "حزمة ISO 9001 المميزة",
                description: "دليل وإجراءات ونماذج سجلات قابلة للتخصيص.",
                category: "حزم التوثيق",
                price: 1200,
            },
            Product {
                title: "أدوات ISO 27001",
                description: "تحليل المخاطر وبيان قابلية التطبيق ونماذج السياسات.",
                category: "حزم التوثيق",
                price: 1490,
            },
            Product {
                title: "تعلم إلكتروني للمدقق الداخلي",
                description: "اثنتا عشرة وحدة عبر الإنترنت مع شهادة إتمام.",
                category: "دورات عبر الإنترنت",
                price: 950,
            },
            Product {
                title: "باقة مرافقة الشهادة",
                description: "خمسة أنصاف أيام من التوجيه حتى تدقيق الشهادة.",
                category: "المرافقة",
                price: 1850,
            },
        ],
    },

    audit: AuditContent {
        title: "التدقيق",
        description: "اطلب تدقيقًا مسبقًا مجانيًا لنظام إدارتكم",
        standards: &["ISO 9001", "ISO 14001", "ISO 27001", "ISO 45001"],
        form: AuditFormContent {
            title: "طلب تدقيق مسبق",
            description: "نرد خلال 48 ساعة عمل.",
            fields: AuditFormFields {
                name: "الاسم",
                company: "الشركة",
                email: "البريد الإلكتروني",
                phone: "الهاتف",
                standard: "المعيار المستهدف",
                message: "الرسالة",
            },
            placeholder: "اختر معيارًا",
            submit: "إرسال الطلب",
            success: "شكرًا لكم! سنتواصل معكم قريبًا.",
        },
    },

    testimonials: TestimonialsContent {
        title: "يثقون بنا",
        items: &[
            Testimonial {
                quote: "حصلنا على الشهادة في ثمانية أشهر دون أوراق لا فائدة منها.",
                author: "Claire Boillat",
                role: "مديرة الجودة، مصنع ساعات",
            },
            Testimonial {
                quote: "مدربون يعرفون الميدان ويتحدثون بصراحة.",
                author: "Marc Froidevaux",
                role: "مسؤول الإنتاج",
            },
            Testimonial {
                quote: "جنّبنا التدقيق التجريبي مفاجآت غير سارة.",
                author: "Sonia Rérat",
                role: "مديرة، شركة صناعية صغيرة",
            },
        ],
    },

    cart: CartContent {
        title: "السلة",
        empty: "سلتك فارغة.",
        cta: "متابعة التسوق",
    },

    footer: FooterContent {
        newsletter: NewsletterContent {
            title: "النشرة الإخبارية",
            description: "رسالة واحدة شهريًا حول المعايير والتدقيق ودوراتنا.",
            placeholder: "you@company.ch",
            cta: "اشترك",
            success: "تم تأكيد اشتراكك، شكرًا!",
        },
        columns: &[
            FooterColumn {
                title: "الشركة",
                links: &[
                    NavLink { label: "الخدمات", href: "#services" },
                    NavLink { label: "القطاعات", href: "#sectors" },
                    NavLink { label: "الشهادات", href: "#testimonials" },
                ],
            },
            FooterColumn {
                title: "الموارد",
                links: &[
                    NavLink { label: "الأكاديمية", href: "#academy" },
                    NavLink { label: "المتجر", href: "#shop" },
                    NavLink { label: "التدقيق المسبق", href: "#audit" },
                ],
            },
        ],
        bottom: "© {year} Aigle Jurassien. جميع الحقوق محفوظة.",
    },

    ui: UiLabels {
        all: "الكل",
        search_placeholder: "ابحث عن حل",
        add_to_cart: "أضف للسلة",
        empty_state: "لا توجد عناصر مطابقة.",
        max: "الحد",
        previous: "السابق",
        next: "التالي",
    },
};
