use leptos::prelude::*;

use crate::content::SocialLink;

/// Round icon-only links shown under the hero text.
#[component]
pub fn SocialIcons(links: &'static [SocialLink]) -> impl IntoView {
    view! {
        <div class="hero-social">
            {
                links
                    .iter()
                    .map(|social| view! {
                        <a
                            href=social.url
                            target="_blank"
                            rel="noopener noreferrer"
                            class=format!("social-link {}", social.color)
                            title=social.name
                        >
                            <i class=format!("bi {}", social.icon)></i>
                        </a>
                    })
                    .collect_view()
            }
        </div>
    }
}

/// Labelled buttons in the contact section.
#[component]
pub fn SocialButtons(links: &'static [SocialLink]) -> impl IntoView {
    view! {
        <div class="contact-social">
            {
                links
                    .iter()
                    .map(|social| view! {
                        <a
                            href=social.url
                            target="_blank"
                            rel="noopener noreferrer"
                            class=format!("social-btn {}", social.color)
                        >
                            <i class=format!("bi {}", social.icon)></i>
                            <span>{ social.name }</span>
                        </a>
                    })
                    .collect_view()
            }
        </div>
    }
}
