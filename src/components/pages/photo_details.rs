//! Photo details page.

use leptos::prelude::*;

use super::css;
use crate::components::Text;
use crate::models::TextVariant;


#[component]
pub fn PagePhotoDetails(#[prop(into)] id: String) -> impl IntoView {
    view! {
        <Text variant=TextVariant::HeadingMedium>"Página de detalhe da foto"</Text>
        <hr class=css::rule />
        <Text variant=TextVariant::HeadingMedium>{format!("Id da foto: {}", id)}</Text>
    }
}
