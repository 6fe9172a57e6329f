use leptos::prelude::*;

use crate::components::section_header::SectionHeader;
use crate::content::{AboutCard, InfoCard, Stat};
use crate::state::Section;

#[component]
pub fn AboutSection(
    cards: &'static [AboutCard],
    info: &'static [InfoCard],
    stats: &'static [Stat],
) -> impl IntoView {
    view! {
        <section id=Section::About.id() class="about">
            <div class="container">
                <SectionHeader title="About Me" />

                <div class="about-content">
                    <div class="about-cards">
                        {
                            cards
                                .iter()
                                .map(|card| view! {
                                    <div class=format!("about-card {}", card.accent)>
                                        <div class="card-icon">
                                            <i class=format!("bi {}", card.icon)></i>
                                        </div>
                                        <h3 class="card-title">{ card.title }</h3>
                                        <p class="card-text">{ card.body }</p>
                                    </div>
                                })
                                .collect_view()
                        }
                    </div>

                    <div class="about-info">
                        {
                            info
                                .iter()
                                .map(|card| view! {
                                    <div class="info-card">
                                        <div class="info-header">
                                            <i class=format!("bi {}", card.icon)></i>
                                            <h4>{ card.title }</h4>
                                        </div>
                                        <p>{ card.body }</p>
                                    </div>
                                })
                                .collect_view()
                        }

                        <div class="stats">
                            {
                                stats
                                    .iter()
                                    .map(|stat| view! {
                                        <div class=format!("stat-item {}", stat.accent)>
                                            <div class="stat-number">{ stat.figure }</div>
                                            <div class="stat-label">{ stat.label }</div>
                                        </div>
                                    })
                                    .collect_view()
                            }
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
