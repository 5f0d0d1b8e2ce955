//! Content parity validation module.
//!
//! Every language shares the `ContentTree` type, so fields cannot drift apart.
//! List lengths, category references and `{placeholders}` can; this module
//! checks them against a reference language.

use crate::i18n::{content_for, ContentTree, LanguageCode};
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a content tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Structural problems (list lengths, dangling categories)
    pub errors: Vec<String>,

    /// Non-critical issues (placeholder drift, empty strings)
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }

    fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for content parity between languages.
pub struct ContentValidator;

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

impl ContentValidator {
    /// Validate that `candidate` has the same shape as `reference`.
    ///
    /// Errors:
    /// - a list has a different length than in the reference
    /// - an item refers to a category its language does not declare
    /// - an item's category is declared at a different position than the
    ///   reference item's category
    ///
    /// Warnings:
    /// - a string has different `{placeholders}` than its reference counterpart
    /// - a string is empty
    pub fn validate(reference: &ContentTree, candidate: &ContentTree) -> ValidationReport {
        let mut report = ValidationReport::new();

        let reference_lists = Self::list_lengths(reference);
        let candidate_lists = Self::list_lengths(candidate);
        for (path, expected) in &reference_lists {
            match candidate_lists.get(path) {
                Some(actual) if actual == expected => {}
                Some(actual) => report.errors.push(format!(
                    "[{}] List length mismatch at {}: expected {}, found {}",
                    candidate.language, path, expected, actual
                )),
                None => report.errors.push(format!(
                    "[{}] List missing at {}",
                    candidate.language, path
                )),
            }
        }

        report.errors.extend(Self::dangling_categories(candidate));
        report
            .errors
            .extend(Self::misplaced_categories(reference, candidate));

        let reference_texts = Self::texts(reference);
        for (path, text) in Self::texts(candidate) {
            if text.trim().is_empty() {
                report
                    .warnings
                    .push(format!("[{}] Empty text at {}", candidate.language, path));
            }

            if let Some(original) = reference_texts.get(&path) {
                let expected = Self::extract_placeholders(original);
                let actual = Self::extract_placeholders(text);
                if expected != actual {
                    report.warnings.push(format!(
                        "[{}] Placeholder mismatch at {}: reference has {:?}, found {:?}",
                        candidate.language, path, expected, actual
                    ));
                }
            }
        }

        report
    }

    /// Validate every language against the default language.
    pub fn validate_all() -> ValidationReport {
        let reference = content_for(LanguageCode::default());
        let mut report = Self::validate(reference, reference);

        for language in LanguageCode::ALL {
            if language == reference.language {
                continue;
            }
            report.merge(Self::validate(reference, content_for(language)));
        }

        report
    }

    /// Extract all `{placeholder}` names from text
    fn extract_placeholders(text: &str) -> BTreeSet<String> {
        let regex = PLACEHOLDER_REGEX.get_or_init(|| Regex::new(r"\{([a-z_]+)\}").unwrap());

        regex
            .captures_iter(text)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }

    /// Items whose category label is missing from their language's list
    fn dangling_categories(tree: &ContentTree) -> Vec<String> {
        let courses = tree
            .academy
            .courses
            .iter()
            .filter(|course| !tree.academy.filters.contains(&course.category))
            .map(|course| {
                format!(
                    "[{}] Course '{}' uses undeclared category '{}'",
                    tree.language, course.title, course.category
                )
            });

        let products = tree
            .shop
            .products
            .iter()
            .filter(|product| !tree.shop.categories.contains(&product.category))
            .map(|product| {
                format!(
                    "[{}] Product '{}' uses undeclared category '{}'",
                    tree.language, product.title, product.category
                )
            });

        courses.chain(products).collect()
    }

    /// Items whose category sits at a different position in the declared
    /// list than the matching reference item's category. Selections are
    /// carried across languages by that position.
    fn misplaced_categories(reference: &ContentTree, candidate: &ContentTree) -> Vec<String> {
        fn position(declared: &[&str], label: &str) -> Option<usize> {
            declared.iter().position(|c| *c == label)
        }

        let mut errors = Vec::new();

        let courses = reference.academy.courses.iter().zip(candidate.academy.courses);
        for (i, (expected, actual)) in courses.enumerate() {
            let want = position(reference.academy.filters, expected.category);
            let got = position(candidate.academy.filters, actual.category);
            if let (Some(want), Some(got)) = (want, got) {
                if want != got {
                    errors.push(format!(
                        "[{}] Category order mismatch at academy.courses[{}]: '{}' is filter {}, reference '{}' is filter {}",
                        candidate.language, i, actual.category, got, expected.category, want
                    ));
                }
            }
        }

        let products = reference.shop.products.iter().zip(candidate.shop.products);
        for (i, (expected, actual)) in products.enumerate() {
            let want = position(reference.shop.categories, expected.category);
            let got = position(candidate.shop.categories, actual.category);
            if let (Some(want), Some(got)) = (want, got) {
                if want != got {
                    errors.push(format!(
                        "[{}] Category order mismatch at shop.products[{}]: '{}' is category {}, reference '{}' is category {}",
                        candidate.language, i, actual.category, got, expected.category, want
                    ));
                }
            }
        }

        errors
    }

    /// Length of every list in the tree, keyed by path
    fn list_lengths(tree: &ContentTree) -> BTreeMap<String, usize> {
        let mut lists = BTreeMap::new();
        lists.insert("nav".to_string(), tree.nav.len());
        lists.insert("hero.highlights".to_string(), tree.hero.highlights.len());
        lists.insert("stats".to_string(), tree.stats.len());
        lists.insert("sectors.items".to_string(), tree.sectors.items.len());
        lists.insert("services.items".to_string(), tree.services.items.len());
        for (i, service) in tree.services.items.iter().enumerate() {
            lists.insert(format!("services.items[{i}].features"), service.features.len());
        }
        lists.insert("academy.filters".to_string(), tree.academy.filters.len());
        lists.insert("academy.courses".to_string(), tree.academy.courses.len());
        lists.insert("shop.categories".to_string(), tree.shop.categories.len());
        lists.insert("shop.products".to_string(), tree.shop.products.len());
        lists.insert("audit.standards".to_string(), tree.audit.standards.len());
        lists.insert("testimonials.items".to_string(), tree.testimonials.items.len());
        lists.insert("footer.columns".to_string(), tree.footer.columns.len());
        for (i, column) in tree.footer.columns.iter().enumerate() {
            lists.insert(format!("footer.columns[{i}].links"), column.links.len());
        }
        lists
    }

    /// Every translated string in the tree, keyed by path
    fn texts(tree: &ContentTree) -> BTreeMap<String, &'static str> {
        let mut texts = BTreeMap::new();
        let mut put = |path: String, text: &'static str| {
            texts.insert(path, text);
        };

        for (i, link) in tree.nav.iter().enumerate() {
            put(format!("nav[{i}].label"), link.label);
        }

        let hero = &tree.hero;
        put("hero.subtitle".into(), hero.subtitle);
        put("hero.title".into(), hero.title);
        put("hero.description".into(), hero.description);
        put("hero.primary_cta".into(), hero.primary_cta);
        put("hero.secondary_cta".into(), hero.secondary_cta);
        for (i, text) in hero.highlights.iter().enumerate() {
            put(format!("hero.highlights[{i}]"), *text);
        }

        for (i, stat) in tree.stats.iter().enumerate() {
            put(format!("stats[{i}].label"), stat.label);
            put(format!("stats[{i}].description"), stat.description);
        }

        put("sectors.title".into(), tree.sectors.title);
        put("sectors.description".into(), tree.sectors.description);
        for (i, sector) in tree.sectors.items.iter().enumerate() {
            put(format!("sectors.items[{i}].title"), sector.title);
            put(format!("sectors.items[{i}].description"), sector.description);
        }

        put("services.title".into(), tree.services.title);
        put("services.description".into(), tree.services.description);
        for (i, service) in tree.services.items.iter().enumerate() {
            put(format!("services.items[{i}].title"), service.title);
            put(format!("services.items[{i}].tagline"), service.tagline);
            put(format!("services.items[{i}].description"), service.description);
            for (j, feature) in service.features.iter().enumerate() {
                put(format!("services.items[{i}].features[{j}]"), *feature);
            }
        }

        put("academy.title".into(), tree.academy.title);
        put("academy.description".into(), tree.academy.description);
        for (i, filter) in tree.academy.filters.iter().enumerate() {
            put(format!("academy.filters[{i}]"), *filter);
        }
        for (i, course) in tree.academy.courses.iter().enumerate() {
            put(format!("academy.courses[{i}].title"), course.title);
            put(format!("academy.courses[{i}].description"), course.description);
            put(format!("academy.courses[{i}].badge"), course.badge);
            put(format!("academy.courses[{i}].duration"), course.duration);
            put(format!("academy.courses[{i}].level"), course.level);
        }

        put("shop.title".into(), tree.shop.title);
        put("shop.description".into(), tree.shop.description);
        for (i, category) in tree.shop.categories.iter().enumerate() {
            put(format!("shop.categories[{i}]"), *category);
        }
        for (i, product) in tree.shop.products.iter().enumerate() {
            put(format!("shop.products[{i}].title"), product.title);
            put(format!("shop.products[{i}].description"), product.description);
        }

        let audit = &tree.audit;
        put("audit.title".into(), audit.title);
        put("audit.description".into(), audit.description);
        put("audit.form.title".into(), audit.form.title);
        put("audit.form.description".into(), audit.form.description);
        put("audit.form.placeholder".into(), audit.form.placeholder);
        put("audit.form.submit".into(), audit.form.submit);
        put("audit.form.success".into(), audit.form.success);
        let fields = &audit.form.fields;
        put("audit.form.fields.name".into(), fields.name);
        put("audit.form.fields.company".into(), fields.company);
        put("audit.form.fields.email".into(), fields.email);
        put("audit.form.fields.phone".into(), fields.phone);
        put("audit.form.fields.standard".into(), fields.standard);
        put("audit.form.fields.message".into(), fields.message);

        put("testimonials.title".into(), tree.testimonials.title);
        for (i, item) in tree.testimonials.items.iter().enumerate() {
            put(format!("testimonials.items[{i}].quote"), item.quote);
            put(format!("testimonials.items[{i}].role"), item.role);
        }

        put("cart.title".into(), tree.cart.title);
        put("cart.empty".into(), tree.cart.empty);
        put("cart.cta".into(), tree.cart.cta);

        let newsletter = &tree.footer.newsletter;
        put("footer.newsletter.title".into(), newsletter.title);
        put("footer.newsletter.description".into(), newsletter.description);
        put("footer.newsletter.placeholder".into(), newsletter.placeholder);
        put("footer.newsletter.cta".into(), newsletter.cta);
        put("footer.newsletter.success".into(), newsletter.success);
        for (i, column) in tree.footer.columns.iter().enumerate() {
            put(format!("footer.columns[{i}].title"), column.title);
            for (j, link) in column.links.iter().enumerate() {
                put(format!("footer.columns[{i}].links[{j}].label"), link.label);
            }
        }
        put("footer.bottom".into(), tree.footer.bottom);

        let ui = &tree.ui;
        put("ui.all".into(), ui.all);
        put("ui.search_placeholder".into(), ui.search_placeholder);
        put("ui.add_to_cart".into(), ui.add_to_cart);
        put("ui.empty_state".into(), ui.empty_state);
        put("ui.max".into(), ui.max);
        put("ui.previous".into(), ui.previous);
        put("ui.next".into(), ui.next);

        texts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{AcademyContent, Course, FooterContent};

    fn french() -> &'static ContentTree {
        content_for(LanguageCode::Fr)
    }

    // ==================== Placeholder Extraction Tests ====================

    #[test]
    fn test_extract_placeholders_single() {
        let found = ContentValidator::extract_placeholders("© {year} Aigle Jurassien");
        assert_eq!(found, BTreeSet::from(["year".to_string()]));
    }

    #[test]
    fn test_extract_placeholders_none() {
        assert!(ContentValidator::extract_placeholders("Pas de variable").is_empty());
    }

    #[test]
    fn test_extract_placeholders_ignores_uppercase() {
        assert!(ContentValidator::extract_placeholders("{YEAR}").is_empty());
    }

    // ==================== Shipped Content Tests ====================

    #[test]
    fn test_shipped_content_is_clean() {
        let report = ContentValidator::validate_all();
        assert!(report.is_clean(), "unexpected report: {:?}", report);
    }

    #[test]
    fn test_each_language_matches_default() {
        for language in LanguageCode::ALL {
            let report = ContentValidator::validate(french(), content_for(language));
            assert!(!report.has_errors(), "{}: {:?}", language, report.errors);
        }
    }

    // ==================== Drift Detection Tests ====================

    #[test]
    fn test_detects_missing_course() {
        static SHORT_COURSES: [Course; 1] = [Course {
            title: "Seul cours",
            description: "Description",
            category: "Qualité",
            badge: "Nouveau",
            duration: "1 jour",
            level: "Débutant",
            rating: 4.0,
        }];

        let mut drifted = *french();
        drifted.academy = AcademyContent {
            courses: &SHORT_COURSES,
            ..drifted.academy
        };

        let report = ContentValidator::validate(french(), &drifted);
        assert!(report.has_errors());
        assert!(report.errors[0].contains("academy.courses"));
    }

    #[test]
    fn test_detects_undeclared_category() {
        let mut courses = french().academy.courses.to_vec();
        courses[0].category = "Qualite";

        let mut drifted = *french();
        drifted.academy.courses = Box::leak(courses.into_boxed_slice());

        let report = ContentValidator::validate(french(), &drifted);
        assert!(report
            .errors
            .iter()
            .any(|e| e.contains("undeclared category 'Qualite'")));
    }

    #[test]
    fn test_detects_reordered_filters() {
        let english = content_for(LanguageCode::En);
        let mut drifted = *english;
        drifted.academy.filters = &["Information security", "Quality", "Leadership"];

        let report = ContentValidator::validate(french(), &drifted);
        assert!(report
            .errors
            .iter()
            .any(|e| e.contains("Category order mismatch at academy.courses[0]")));
        assert!(report
            .errors
            .iter()
            .any(|e| e.contains("Category order mismatch at academy.courses[2]")));
        assert!(!report.errors.iter().any(|e| e.contains("academy.courses[3]")));
    }

    #[test]
    fn test_detects_reordered_shop_categories() {
        let mut drifted = *content_for(LanguageCode::Es);
        drifted.shop.categories = &["Acompañamiento", "Cursos en línea", "Kits documentales"];

        let report = ContentValidator::validate(french(), &drifted);
        assert!(report
            .errors
            .iter()
            .any(|e| e.contains("Category order mismatch at shop.products[3]")));
    }

    #[test]
    fn test_detects_missing_placeholder() {
        let mut drifted = *french();
        drifted.footer = FooterContent {
            bottom: "© Aigle Jurassien",
            ..drifted.footer
        };

        let report = ContentValidator::validate(french(), &drifted);
        assert!(!report.has_errors());
        assert!(report.has_warnings());
        assert!(report.warnings[0].contains("Placeholder mismatch at footer.bottom"));
    }

    #[test]
    fn test_detects_empty_text() {
        let mut drifted = *french();
        drifted.cart.cta = "  ";

        let report = ContentValidator::validate(french(), &drifted);
        assert!(report.warnings.iter().any(|w| w.contains("Empty text at cart.cta")));
    }

    // ==================== Report Tests ====================

    #[test]
    fn test_validation_report_new() {
        let report = ValidationReport::new();
        assert!(report.is_clean());
        assert!(!report.has_errors());
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_validation_report_with_error() {
        let mut report = ValidationReport::new();
        report.errors.push("Test error".to_string());

        assert!(!report.is_clean());
        assert!(report.has_errors());
        assert!(!report.has_warnings());
    }
}
