//! Renders the static sections to HTML strings; no browser needed.

use leptos::prelude::*;
use leptos::reactive::owner::Owner;
use leptos::tachys::view::RenderHtml;

use portfolio::components::about::AboutSection;
use portfolio::components::contact::ContactCards;
use portfolio::components::hero::ProfileImage;
use portfolio::components::nav::Navbar;
use portfolio::components::projects::ProjectGrid;
use portfolio::components::skills::{SkillGrid, TechTags};
use portfolio::components::social::{SocialButtons, SocialIcons};
use portfolio::content::{
    AboutCard, ContactChannel, InfoCard, PROFILE, PROJECTS, Project, SKILLS, SOCIALS, Skill,
    SocialLink, Stat, TECH,
};
use portfolio::state::{Section, ViewState};

/// Elements whose class list starts with exactly `class`.
fn count(html: &str, class: &str) -> usize {
    html.matches(&format!("class=\"{class}\"")).count()
        + html.matches(&format!("class=\"{class} ")).count()
}

fn render<V: RenderHtml + 'static>(f: impl FnOnce() -> V) -> String {
    Owner::new().with(|| f().to_html())
}

#[test]
fn empty_tables_render_no_fragments() {
    let skills: &'static [Skill] = &[];
    let projects: &'static [Project] = &[];
    let links: &'static [SocialLink] = &[];
    let tags: &'static [&'static str] = &[];
    let channels: Vec<ContactChannel> = Vec::new();
    let cards: &'static [AboutCard] = &[];
    let info: &'static [InfoCard] = &[];
    let stats: &'static [Stat] = &[];

    let html = render(|| view! {
        <SkillGrid skills />
        <ProjectGrid projects />
        <SocialIcons links />
        <SocialButtons links />
        <TechTags tags />
        <ContactCards channels />
        <AboutSection cards info stats />
    });

    for class in ["skill-item", "project-card", "social-link", "social-btn", "tech-tag", "contact-card", "about-card", "stat-item"] {
        assert_eq!(count(&html, class), 0, "{class} rendered from an empty table");
    }
    // containers are still there
    assert_eq!(count(&html, "skills-grid"), 1);
    assert_eq!(count(&html, "projects-grid"), 1);
}

#[test]
fn one_fragment_per_entry() {
    let html = render(|| view! {
        <SkillGrid skills=SKILLS />
        <ProjectGrid projects=PROJECTS />
        <SocialButtons links=SOCIALS />
        <TechTags tags=TECH />
    });

    assert_eq!(count(&html, "skill-item"), SKILLS.len());
    assert_eq!(count(&html, "project-card"), PROJECTS.len());
    assert_eq!(count(&html, "social-btn"), SOCIALS.len());
    assert_eq!(count(&html, "tech-tag"), TECH.len());

    let tags: usize = PROJECTS.iter().map(|p| p.tags.len()).sum();
    assert_eq!(count(&html, "project-tag"), tags);
}

#[test]
fn skills_carry_width_and_stagger() {
    let skills = &SKILLS[..2];
    let html = render(|| view! { <SkillGrid skills /> });

    assert!(html.contains("width: 95%"), "{html}");
    assert!(html.contains("width: 90%"), "{html}");
    assert!(html.contains("animation-delay: 0ms"), "{html}");
    assert!(html.contains("animation-delay: 100ms"), "{html}");
    assert!(html.contains("95%</span>"), "{html}");
}

#[test]
fn outbound_links_open_in_new_tab() {
    let html = render(|| view! { <SocialIcons links=SOCIALS /> });

    assert_eq!(html.matches("target=\"_blank\"").count(), SOCIALS.len());
    assert_eq!(html.matches("rel=\"noopener noreferrer\"").count(), SOCIALS.len());
    assert!(html.contains("https://github.com/arowoloaliu"));
}

#[test]
fn location_channel_renders_as_text() {
    let html = render(|| view! { <ContactCards channels=PROFILE.contact_channels() /> });

    assert!(html.contains("href=\"mailto:arowolo886@gmail.com\""));
    assert!(html.contains("href=\"tel:+2348145856060\""));
    assert!(html.contains("<p>Agbowo, Ibadan, Oyo State</p>"), "{html}");
}

#[test]
fn profile_image_shown_until_it_fails() {
    let html = render(|| view! { <ProfileImage profile=PROFILE failed=RwSignal::new(false) /> });
    assert!(html.contains("<img"), "{html}");
    assert!(html.contains(PROFILE.image));
    assert!(!html.contains("image-fallback"));
}

#[test]
fn failed_profile_image_shows_monogram() {
    let html = render(|| view! { <ProfileImage profile=PROFILE failed=RwSignal::new(true) /> });
    assert!(!html.contains("<img"), "{html}");
    assert!(html.contains("image-fallback"));
    assert!(html.contains("<span>A</span>"), "{html}");
}

fn render_navbar(state: ViewState) -> String {
    render(|| {
        let state = RwSignal::new(state);
        let navigate = Callback::new(|_: Section| {});
        view! { <Navbar brand=PROFILE.brand state navigate /> }
    })
}

#[test]
fn navbar_at_rest() {
    let html = render_navbar(ViewState::default());

    assert_eq!(count(&html, "navbar"), 1);
    assert!(!html.contains("navbar scrolled"), "{html}");
    assert_eq!(count(&html, "nav-menu"), 1);
    assert!(!html.contains("nav-menu active"), "{html}");
    assert!(html.contains("class=\"bi bi-list\""), "{html}");
    assert!(html.contains("<a href=\"#home\" class=\"nav-link active\""), "{html}");
    assert_eq!(html.matches("nav-link active").count(), 1);
    assert_eq!(count(&html, "nav-link"), Section::ALL.len());
}

#[test]
fn navbar_reflects_open_menu_and_scroll() {
    let html = render_navbar(ViewState { menu_open: true, active: Section::Projects, scrolled: true });

    assert!(html.contains("class=\"navbar scrolled\""), "{html}");
    assert!(html.contains("class=\"nav-menu active\""), "{html}");
    assert!(html.contains("class=\"bi bi-x\""), "{html}");
    assert!(html.contains("<a href=\"#projects\" class=\"nav-link active\""), "{html}");
    assert_eq!(html.matches("nav-link active").count(), 1);
    assert!(html.contains("<a href=\"#home\" class=\"nav-link\""), "{html}");
}
