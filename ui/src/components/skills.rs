use leptos::prelude::*;

use crate::components::section_header::SectionHeader;
use crate::config::ScrollConfig;
use crate::content::Skill;
use crate::state::Section;

/// One card per skill with a percentage bar.
#[component]
pub fn SkillGrid(skills: &'static [Skill], #[prop(optional)] config: ScrollConfig) -> impl IntoView {
    view! {
        <div class="skills-grid">
            <For
                each=move || skills.iter().copied().enumerate()
                key=|(_, skill)| skill.name
                children=move |(index, skill)| {
                    view! {
                        <div class="skill-item" style=config.stagger(index)>
                            <div class="skill-header">
                                <div class="skill-info">
                                    <div class="skill-icon">
                                        <i class=format!("bi {}", skill.icon)></i>
                                    </div>
                                    <h3>{ skill.name }</h3>
                                </div>
                                <span class="skill-percent">{ skill.percent() }</span>
                            </div>
                            <div class="skill-bar">
                                <div class="skill-progress" style=skill.bar_style()></div>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[component]
pub fn TechTags(tags: &'static [&'static str]) -> impl IntoView {
    view! {
        <div class="tech-tags">
            { tags.iter().map(|tech| view! { <span class="tech-tag">{ *tech }</span> }).collect_view() }
        </div>
    }
}

#[component]
pub fn SkillsSection(skills: &'static [Skill], tech: &'static [&'static str]) -> impl IntoView {
    view! {
        <section id=Section::Skills.id() class="skills">
            <div class="container">
                <SectionHeader title="Technical Skills" />

                <SkillGrid skills />

                <div class="additional-skills">
                    <p class="skills-subtitle">"Also experienced with"</p>
                    <TechTags tags=tech />
                </div>
            </div>
        </section>
    }
}
