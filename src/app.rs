//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::{FloatingDock, Toast};
use crate::pages::{Charts, Dashboard, Exchange, Settings};
use crate::state::provide_stores;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global stores to all components
    provide_stores();

    view! {
        <Router>
            <div class="min-h-screen bg-black text-white">
                // Floating dock: navigation + widget toggles
                <FloatingDock />

                // Routed pages
                <main>
                    <Routes>
                        <Route path="/" view=Dashboard />
                        <Route path="/charts" view=Charts />
                        <Route path="/exchange" view=Exchange />
                        <Route path="/settings" view=Settings />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-zinc-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-white/10 hover:bg-white/20 rounded-lg font-medium
                       transition-colors"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}
