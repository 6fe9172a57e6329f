use leptos::prelude::*;
use leptos::ev::MouseEvent;

use crate::state::{Section, ViewState};

#[component]
fn NavLink(section: Section, active: Memo<Section>, navigate: Callback<Section>) -> impl IntoView {
    let on_click = move |ev: MouseEvent| {
        ev.prevent_default();
        navigate.run(section);
    };

    view! {
        <li>
            <a
                href=section.href()
                class="nav-link"
                class=("active", move || active.get() == section)
                on:click=on_click
            >
                { section.label() }
            </a>
        </li>
    }
}

/// Fixed top bar: brand, section links and the mobile menu toggle.
#[component]
pub fn Navbar(
    brand: &'static str,
    state: RwSignal<ViewState>,
    navigate: Callback<Section>,
) -> impl IntoView {
    let scrolled = Memo::new(move |_| state.get().scrolled);
    let menu_open = Memo::new(move |_| state.get().menu_open);
    let active = Memo::new(move |_| state.get().active);

    view! {
        <nav class="navbar" class=("scrolled", move || scrolled.get())>
            <div class="container">
                <div class="nav-brand" on:click=move |_| navigate.run(Section::Home)>
                    <div class="brand-icon">
                        <i class="bi bi-code-slash"></i>
                    </div>
                    <span class="brand-text">{ brand }</span>
                </div>

                <ul class="nav-menu" class=("active", move || menu_open.get())>
                    {
                        Section::ALL
                            .into_iter()
                            .map(|section| view! { <NavLink section active navigate/> })
                            .collect_view()
                    }
                </ul>

                <button
                    class="mobile-toggle"
                    aria-label="Toggle navigation"
                    on:click=move |_| state.update(ViewState::toggle_menu)
                >
                    <i class=move || state.get().toggle_icon()></i>
                </button>
            </div>
        </nav>
    }
}
