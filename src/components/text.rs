//! Text primitive.

use leptos::prelude::*;

use crate::models::TextVariant;

stylance::import_crate_style!(css, "src/components/text.module.css");

fn variant_class(variant: TextVariant) -> &'static str {
    match variant {
        TextVariant::BodyMd => css::bodyMd,
        TextVariant::LabelMedium => css::labelMedium,
        TextVariant::LabelSmall => css::labelSmall,
        TextVariant::HeadingMedium => css::headingMedium,
        TextVariant::HeadingSmall => css::headingSmall,
    }
}

/// Styled text. `HeadingMedium` renders `<h1>`, `HeadingSmall` `<h2>`, the rest a `<span>`.
#[component]
pub fn Text(
    #[prop(optional)] variant: TextVariant,
    /// Extra classes appended after the variant class.
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let class = format!("{} {} {}", css::text, variant_class(variant), class)
        .trim_end()
        .to_string();

    if !variant.is_heading() {
        return view! { <span class=class>{children()}</span> }.into_any();
    }
    match variant {
        TextVariant::HeadingMedium => view! { <h1 class=class>{children()}</h1> }.into_any(),
        _ => view! { <h2 class=class>{children()}</h2> }.into_any(),
    }
}
