use leptos::prelude::*;

use crate::content::Profile;

#[component]
pub fn Footer(profile: Profile) -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <p>{ format!("© {} {}. All rights reserved.", profile.year, profile.full_name()) }</p>
                <p class="footer-subtitle">{ profile.headline }</p>
            </div>
        </footer>
    }
}
