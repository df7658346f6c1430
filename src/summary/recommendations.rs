//! Canned recommendations used when the service sends none.

use crate::aggregate::AggregateReport;
use crate::core::{Category, Severity};

/// Upper bound on derived recommendations.
pub const MAX_DERIVED_RECOMMENDATIONS: usize = 3;

pub const NO_ISSUES_MESSAGE: &str = "No code smells detected. Keep up the good work!";

/// Improvement tip per category. Total over [`Category`].
pub fn category_tip(category: Category) -> &'static str {
    match category {
        Category::Security => {
            "Use parameterized queries and keep credentials out of source code."
        }
        Category::Performance => {
            "Profile hot paths and replace repeated work with better-suited data structures."
        }
        Category::Maintainability => {
            "Extract duplicated logic into shared helpers and keep modules focused."
        }
        Category::Complexity => {
            "Break long or deeply nested functions into smaller, well-named units."
        }
        Category::Style => {
            "Adopt a formatter and linter so naming conventions are enforced automatically."
        }
        Category::Other => {
            "Add tests around the affected code before refactoring the remaining findings."
        }
    }
}

fn severity_line(severity: Severity, count: usize) -> Option<String> {
    let noun = if count == 1 { "issue" } else { "issues" };
    match severity {
        Severity::Critical => Some(format!(
            "Resolve the {count} critical {noun} first; they block a healthy codebase."
        )),
        Severity::High => Some(format!(
            "Prioritize the {count} high-severity {noun} in the next iteration."
        )),
        Severity::Medium | Severity::Low => None,
    }
}

/// A short generic list keyed on the dominant severity and categories.
///
/// Order: a line for the most urgent severity when it is critical or high,
/// then the dominant category's tip, then the runner-up's, capped at
/// [`MAX_DERIVED_RECOMMENDATIONS`].
pub fn derive_recommendations(report: &AggregateReport) -> Vec<String> {
    if report.total_smells == 0 {
        return vec![NO_ISSUES_MESSAGE.to_string()];
    }

    let urgent = report
        .counts_by_severity
        .highest_present()
        .and_then(|severity| {
            severity_line(severity, report.counts_by_severity.get(severity))
        });

    let tips = report
        .categories_by_count()
        .into_iter()
        .map(|category| category_tip(category).to_string());

    urgent
        .into_iter()
        .chain(tips)
        .take(MAX_DERIVED_RECOMMENDATIONS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::aggregate;
    use crate::core::SmellRecord;

    fn record(severity: Severity, category: Category) -> SmellRecord {
        SmellRecord {
            severity,
            category,
            ..Default::default()
        }
    }

    #[test]
    fn every_category_has_a_distinct_tip() {
        let tips: std::collections::HashSet<_> =
            Category::CANONICAL.iter().map(|c| category_tip(*c)).collect();
        assert_eq!(tips.len(), Category::CANONICAL.len());
        assert!(tips.iter().all(|tip| !tip.is_empty()));
    }

    #[test]
    fn no_records_yields_single_message() {
        assert_eq!(
            derive_recommendations(&aggregate(&[])),
            vec![NO_ISSUES_MESSAGE.to_string()]
        );
    }

    #[test]
    fn critical_issues_lead_the_list() {
        let report = aggregate(&[
            record(Severity::Critical, Category::Security),
            record(Severity::Low, Category::Style),
            record(Severity::Low, Category::Style),
        ]);
        let recommendations = derive_recommendations(&report);
        assert_eq!(recommendations.len(), 3);
        assert!(recommendations[0].contains("1 critical issue "));
        assert_eq!(recommendations[1], category_tip(Category::Style));
        assert_eq!(recommendations[2], category_tip(Category::Security));
    }

    #[test]
    fn medium_and_low_only_skip_the_severity_line() {
        let report = aggregate(&[record(Severity::Medium, Category::Complexity)]);
        assert_eq!(
            derive_recommendations(&report),
            vec![category_tip(Category::Complexity).to_string()]
        );
    }

    #[test]
    fn list_is_capped() {
        let report = aggregate(&[
            record(Severity::High, Category::Security),
            record(Severity::High, Category::Performance),
            record(Severity::High, Category::Style),
            record(Severity::High, Category::Other),
        ]);
        let recommendations = derive_recommendations(&report);
        assert_eq!(recommendations.len(), MAX_DERIVED_RECOMMENDATIONS);
        assert!(recommendations[0].contains("4 high-severity issues"));
    }
}
