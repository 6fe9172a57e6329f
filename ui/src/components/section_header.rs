use leptos::prelude::*;

#[component]
pub fn SectionHeader(
    title: &'static str,
    #[prop(optional)] description: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="section-header">
            <h2 class="section-title">{ title }</h2>
            <div class="section-line"></div>
            { description.map(|text| view! { <p class="section-description">{ text }</p> }) }
        </div>
    }
}
