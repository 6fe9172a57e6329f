use leptos::either::Either;
use leptos::prelude::*;

use crate::components::social::SocialIcons;
use crate::content::{Profile, SocialLink};
use crate::state::Section;

/// Profile picture that swaps itself for a monogram tile if the image
/// cannot be loaded.
#[component]
pub fn ProfileImage(
    profile: Profile,
    #[prop(default = RwSignal::new(false))] failed: RwSignal<bool>,
) -> impl IntoView {
    let monogram = profile.monogram().to_string();
    let alt = profile.full_name();

    let on_error = move |_| {
        log::warn!("profile image {} failed to load, showing placeholder", profile.image);
        failed.set(true);
    };

    view! {
        <div class="image-container">
            { move || if failed.get() {
                Either::Left(view! {
                    <div class="image-fallback">
                        <span>{ monogram.clone() }</span>
                    </div>
                })
            } else {
                Either::Right(view! {
                    <img src=profile.image alt=alt.clone() on:error=on_error />
                })
            }}
        </div>
    }
}

#[component]
pub fn Hero(
    profile: Profile,
    socials: &'static [SocialLink],
    navigate: Callback<Section>,
) -> impl IntoView {
    view! {
        <section id=Section::Home.id() class="hero">
            <div class="container">
                <div class="hero-content">
                    <div class="hero-text">
                        <div class="hero-badge">
                            <i class="bi bi-briefcase"></i>
                            <span>{ profile.badge }</span>
                        </div>

                        <h1 class="hero-title">
                            <span class="title-primary">{ profile.first_names }</span>
                            <span class="title-gradient">{ profile.surname }</span>
                        </h1>

                        <p class="hero-subtitle">{ profile.headline }</p>
                        <p class="hero-description">{ profile.pitch }</p>

                        <div class="hero-buttons">
                            <button class="btn btn-primary" on:click=move |_| navigate.run(Section::Projects)>
                                "View My Work"
                                <i class="bi bi-arrow-right"></i>
                            </button>
                            <button class="btn btn-secondary" on:click=move |_| navigate.run(Section::Contact)>
                                "Get In Touch"
                                <i class="bi bi-envelope"></i>
                            </button>
                        </div>

                        <SocialIcons links=socials />
                    </div>

                    <div class="hero-image">
                        <div class="image-wrapper">
                            <div class="image-ring"></div>
                            <ProfileImage profile />
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
