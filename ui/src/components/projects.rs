use leptos::prelude::*;

use crate::components::section_header::SectionHeader;
use crate::config::ScrollConfig;
use crate::content::Project;
use crate::state::Section;

#[component]
fn ProjectCard(project: Project, style: String) -> impl IntoView {
    view! {
        <div class="project-card" style=style>
            <div class="project-header" style=format!("background: {}", project.gradient)></div>

            <div class="project-body">
                <h3 class="project-title">{ project.title }</h3>
                <p class="project-description">{ project.description }</p>

                <div class="project-tags">
                    { project.tags.iter().map(|tag| view! { <span class="project-tag">{ *tag }</span> }).collect_view() }
                </div>

                <a
                    href=project.url
                    target="_blank"
                    rel="noopener noreferrer"
                    class="project-link"
                >
                    "Visit Website"
                    <i class="bi bi-box-arrow-up-right"></i>
                </a>
            </div>
        </div>
    }
}

#[component]
pub fn ProjectGrid(projects: &'static [Project], #[prop(optional)] config: ScrollConfig) -> impl IntoView {
    view! {
        <div class="projects-grid">
            <For
                each=move || projects.iter().copied().enumerate()
                key=|(index, _)| *index
                children=move |(index, project)| {
                    view! { <ProjectCard project style=config.stagger(index) /> }
                }
            />
        </div>
    }
}

#[component]
pub fn ProjectsSection(projects: &'static [Project]) -> impl IntoView {
    view! {
        <section id=Section::Projects.id() class="projects">
            <div class="container">
                <SectionHeader
                    title="Featured Projects"
                    description="A showcase of my recent work spanning various industries and technologies"
                />
                <ProjectGrid projects />
            </div>
        </section>
    }
}
