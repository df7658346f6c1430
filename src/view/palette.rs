//! Fixed color tables for chart series.

use crate::core::{Category, Severity};

pub fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "#ef4444", // red
        Severity::High => "#f97316",     // orange
        Severity::Medium => "#f59e0b",   // amber
        Severity::Low => "#3b82f6",      // blue
    }
}

pub fn category_color(category: Category) -> &'static str {
    match category {
        Category::Security => "#dc2626",
        Category::Performance => "#8b5cf6",
        Category::Maintainability => "#10b981",
        Category::Complexity => "#eab308",
        Category::Style => "#06b6d4",
        Category::Other => "#6b7280",
    }
}

/// Color for a category given by name; unknown names get the `other` color.
pub fn category_color_for_label(label: &str) -> &'static str {
    category_color(Category::from_lossy(label))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn severity_colors_are_distinct() {
        let colors: HashSet<_> = Severity::CANONICAL.iter().map(|s| severity_color(*s)).collect();
        assert_eq!(colors.len(), 4);
    }

    #[test]
    fn category_colors_are_distinct() {
        let colors: HashSet<_> = Category::CANONICAL.iter().map(|c| category_color(*c)).collect();
        assert_eq!(colors.len(), 6);
    }

    #[test]
    fn unknown_category_label_uses_other_color() {
        assert_eq!(
            category_color_for_label("naming_conventions"),
            category_color(Category::Other)
        );
        assert_eq!(
            category_color_for_label("Security"),
            category_color(Category::Security)
        );
    }
}
