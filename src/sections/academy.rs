use crate::catalog::{category_options, filter, CategoryFilter, CategoryOption, CourseCriteria, Listing};
use crate::i18n::{ContentTree, Course};
use crate::sections::LanguageChangePolicy;
use tracing::debug;

/// Academy section state: the selected course category.
#[derive(Debug, Clone, Default)]
pub struct AcademySection {
    criteria: CourseCriteria,
}

/// What the Academy section shows for the current criteria.
#[derive(Debug, Clone)]
pub struct AcademyView {
    pub title: &'static str,
    pub description: &'static str,
    pub options: Vec<CategoryOption>,
    pub active: CategoryFilter,
    pub courses: Listing<'static, Course>,
}

impl AcademySection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn criteria(&self) -> &CourseCriteria {
        &self.criteria
    }

    pub fn select_category(&mut self, category: CategoryFilter) {
        self.criteria.active_category = category;
    }

    /// Adjust the selection after the language switched from `previous` to `next`.
    pub fn on_language_change(
        &mut self,
        previous: &ContentTree,
        next: &ContentTree,
        policy: LanguageChangePolicy,
    ) {
        let updated = policy.apply(
            &self.criteria.active_category,
            previous.academy.filters,
            next.academy.filters,
        );
        debug!(
            "Academy category {:?} -> {:?} ({:?})",
            self.criteria.active_category, updated, policy
        );
        self.criteria.active_category = updated;
    }

    pub fn view(&self, content: &'static ContentTree) -> AcademyView {
        let academy = &content.academy;
        AcademyView {
            title: academy.title,
            description: academy.description,
            options: category_options(academy.filters, content.ui.all),
            active: self.criteria.active_category.clone(),
            courses: Listing::from_filtered(filter(academy.courses, &self.criteria)),
        }
    }
}
