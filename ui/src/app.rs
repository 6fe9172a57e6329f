use leptos::prelude::*;
use leptos_meta::{Link, Meta, Stylesheet, Title, provide_meta_context};

use crate::content::PROFILE;
use crate::pages::portfolio::PortfolioPage;

const ICON_FONT: &str = "https://cdn.jsdelivr.net/npm/bootstrap-icons@1.11.3/font/bootstrap-icons.min.css";

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();      // NOTE: sets up <head> manager

    view! {
        <Title text=PROFILE.full_name() />
        <Meta name="description" content=PROFILE.headline />
        <Link rel="stylesheet" href=ICON_FONT />
        <Stylesheet href="/style/portfolio.css" />

        <PortfolioPage/>
    }
}
