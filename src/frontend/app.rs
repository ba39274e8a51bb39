use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::pages::{BoardDetail, Boards};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main class="app">
                <nav class="topbar">
                    <a href="/" class="brand">"kanban"</a>
                    <span class="version">{env!("CARGO_PKG_VERSION")}</span>
                </nav>
                <Routes fallback=|| view! { <p class="empty">"Page not found"</p> }>
                    <Route path=path!("/") view=Boards/>
                    <Route path=path!("/b/:id") view=BoardDetail/>
                </Routes>
            </main>
        </Router>
    }
}
