use leptos::either::Either;
use leptos::prelude::*;

use crate::components::section_header::SectionHeader;
use crate::components::social::SocialButtons;
use crate::content::{ContactChannel, Profile, SocialLink};
use crate::dom::BrowserViewport;
use crate::state::Section;

#[component]
pub fn ContactCards(channels: Vec<ContactChannel>) -> impl IntoView {
    view! {
        <div class="contact-grid">
            {
                channels
                    .into_iter()
                    .map(|channel| {
                        let value = match channel.href {
                            Some(href) => Either::Left(view! { <a href=href>{ channel.value }</a> }),
                            None => Either::Right(view! { <p>{ channel.value }</p> }),
                        };
                        view! {
                            <div class=format!("contact-card {}", channel.accent)>
                                <i class=format!("bi {}", channel.icon)></i>
                                <h3>{ channel.label }</h3>
                                { value }
                            </div>
                        }
                    })
                    .collect_view()
            }
        </div>
    }
}

#[component]
pub fn ContactSection(
    profile: Profile,
    socials: &'static [SocialLink],
) -> impl IntoView {
    let send_message = move |_| {
        let href = profile.mailto();
        if let Err(err) = BrowserViewport::current().and_then(|page| page.open(&href)) {
            log::warn!("could not open mail client: {err:#}");
        }
    };

    view! {
        <section id=Section::Contact.id() class="contact">
            <div class="container">
                <SectionHeader
                    title="Let's Work Together"
                    description="Have a project in mind? Let's create something amazing together."
                />

                <ContactCards channels=profile.contact_channels() />
                <SocialButtons links=socials />

                <div class="contact-cta">
                    <button class="btn btn-primary" on:click=send_message>
                        "Send Me a Message"
                        <i class="bi bi-send"></i>
                    </button>
                </div>
            </div>
        </section>
    }
}
