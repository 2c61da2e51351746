//! Icon primitive.

use icondata::Icon as IconData;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::models::IconSize;

stylance::import_crate_style!(css, "src/components/icon.module.css");

/// A themed SVG icon inside a sized, decorative wrapper.
#[component]
pub fn SvgIcon(
    icon: IconData,
    #[prop(optional)] size: IconSize,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let size_class = match size {
        IconSize::Sm => css::sm,
        IconSize::Md => css::md,
    };
    let class = format!("{} {} {}", css::icon, size_class, class)
        .trim_end()
        .to_string();

    view! {
        <span class=class aria-hidden="true">
            <Icon icon=icon />
        </span>
    }
}
