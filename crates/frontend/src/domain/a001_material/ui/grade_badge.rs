use crate::shared::components::ui::Badge;
use leptos::prelude::*;

/// Badge variant for a grade label ("Excellent", "Very Good", ...)
pub fn grade_variant(value: &str) -> &'static str {
    match value.trim().to_lowercase().as_str() {
        "best" => "best",
        "excellent" => "success",
        "very good" => "primary",
        "good" => "info",
        "fair" => "warning",
        "poor" => "error",
        _ => "neutral",
    }
}

/// Colored grade pill; renders nothing for an empty value
#[component]
pub fn GradeBadge(#[prop(into)] value: String) -> impl IntoView {
    let value = value.trim().to_string();
    if value.is_empty() {
        return view! { <></> }.into_any();
    }
    let variant = grade_variant(&value);
    view! { <Badge variant=variant>{value}</Badge> }.into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_variant() {
        assert_eq!(grade_variant("Best"), "best");
        assert_eq!(grade_variant(" excellent "), "success");
        assert_eq!(grade_variant("Very Good"), "primary");
        assert_eq!(grade_variant("Good"), "info");
        assert_eq!(grade_variant("Fair"), "warning");
        assert_eq!(grade_variant("Poor"), "error");
        assert_eq!(grade_variant("High"), "neutral");
        assert_eq!(grade_variant("Very Low"), "neutral");
    }
}
