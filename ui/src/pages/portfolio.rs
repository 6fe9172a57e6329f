use leptos::prelude::*;

use crate::components::{
    about::AboutSection, contact::ContactSection, footer::Footer, hero::Hero, nav::Navbar,
    projects::ProjectsSection, skills::SkillsSection,
};
use crate::config::ScrollConfig;
use crate::content::PORTFOLIO;
use crate::dom::{BrowserViewport, ScrollSpy};
use crate::state::{Section, ViewState};

fn track_scroll(state: RwSignal<ViewState>, config: &ScrollConfig) {
    let Ok(page) = BrowserViewport::current() else {
        return;
    };

    let mut next = state.get_untracked();
    next.track(&page, config);
    if next != state.get_untracked() {
        state.set(next);
    }
}

fn scroll_to_section(state: RwSignal<ViewState>, config: &ScrollConfig, id: &str) {
    let mut next = state.get_untracked();
    match BrowserViewport::current() {
        Ok(page) => {
            if next.navigate(&page, id, config).is_none() {
                log::debug!("no element #{id} to scroll to");
            }
        }
        Err(err) => {
            log::warn!("navigation unavailable: {err:#}");
            next.close_menu();
        }
    }
    state.set(next);
}

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let content = PORTFOLIO;
    let config = ScrollConfig::default();
    let state = RwSignal::new(ViewState::default());

    let spy = ScrollSpy::attach(move || track_scroll(state, &config));
    // dropping the guard detaches the window listener
    on_cleanup(move || drop(spy));

    let navigate = Callback::new(move |section: Section| scroll_to_section(state, &config, section.id()));

    // honour a deep link like /#projects once the sections exist
    Effect::new(move |_| {
        let Some(fragment) = BrowserViewport::current().ok().and_then(|page| page.fragment()) else {
            return;
        };
        match fragment.parse::<Section>() {
            Ok(section) => scroll_to_section(state, &config, section.id()),
            Err(err) => log::debug!("ignoring deep link: {err}"),
        }
    });

    view! {
        <div class="portfolio">
            <div class="hero-bg">
                <div class="hero-shape shape-1"></div>
                <div class="hero-shape shape-2"></div>
            </div>

            <Navbar brand=content.profile.brand state navigate />

            <Hero profile=content.profile socials=content.socials navigate />
            <AboutSection cards=content.about info=content.info stats=content.stats />
            <SkillsSection skills=content.skills tech=content.tech />
            <ProjectsSection projects=content.projects />
            <ContactSection profile=content.profile socials=content.socials />

            <Footer profile=content.profile />
        </div>
    }
}
