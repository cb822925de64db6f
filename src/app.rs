//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::pages::crosstab::CrosstabPage;
use crate::state::workspace::WorkspaceState;
use crate::util::theme;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="pt-BR">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the workspace and theme contexts and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let workspace = RwSignal::new(WorkspaceState::new(ClientConfig::from_build_env()));
    let current_theme = RwSignal::new(theme::read_preference());
    theme::apply(current_theme.get_untracked());

    provide_context(workspace);
    provide_context(current_theme);

    view! {
        <Stylesheet id="leptos" href="/pkg/crosstab-client.css"/>
        <Title text="Tabulação cruzada"/>

        <Router>
            <Routes fallback=|| "Página não encontrada.".into_view()>
                <Route path=StaticSegment("") view=CrosstabPage/>
            </Routes>
        </Router>
    }
}
