mod about;
mod contact;
mod controller;
mod hero;
mod icon;
mod modal;
mod nav;
mod projects;
mod reveal;
mod skills;

pub use controller::{use_interaction, Interaction};

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::config::SITE;

use about::About;
use contact::{ContactSection, Footer};
use controller::use_cursor_tracking;
use hero::Hero;
use modal::ProjectModal;
use nav::NavBar;
use projects::ProjectsSection;
use skills::SkillsSection;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="preconnect" href="https://fonts.googleapis.com" />
                <link
                    rel="stylesheet"
                    href="https://fonts.googleapis.com/css2?family=Inter:wght@400;600;800&family=Space+Grotesk:wght@500;700&display=swap"
                />
                <link rel="stylesheet" href="https://unpkg.com/lucide-static@0.469.0/font/lucide.css" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-inter">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{} - {title}", SITE.owner) />
        <Meta name="description" content=SITE.tagline />
        <Script type_="application/ld+json">{SITE.person_schema()}</Script>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=Portfolio />
            </Routes>
        </Router>
    }
}

/// The whole single-page portfolio.
#[component]
fn Portfolio() -> impl IntoView {
    let interaction = Interaction::new();
    provide_context(interaction);
    let cursor = use_cursor_tracking();

    view! {
        <Title text="Portfolio" />
        <div
            class="min-h-screen bg-gradient-to-br from-gray-950 via-zinc-900 to-black text-gray-200 relative overflow-x-hidden"
            style=move || cursor.get().css_vars()
        >
            <div
                class="custom-cursor hidden md:block"
                style="left: var(--mouse-x, 0px); top: var(--mouse-y, 0px);"
            ></div>
            <Particles />
            <main class=move || main_class(interaction.modal_open())>
                <NavBar />
                <Hero />
                <About />
                <SkillsSection />
                <ProjectsSection />
                <ProjectModal />
                <ContactSection />
                <Footer />
            </main>
        </div>
    }
}

/// The page scrolls inside `<main>`, which is locked while the detail overlay is open.
fn main_class(overlay_open: bool) -> String {
    let overflow = if overlay_open {
        "overflow-hidden"
    } else {
        "overflow-y-auto"
    };
    format!("relative z-10 w-full h-screen scroll-smooth {overflow}")
}

#[component]
fn Particles() -> impl IntoView {
    view! {
        <div class="fixed inset-0 z-0 overflow-hidden pointer-events-none opacity-20">
            <div class="particles">
                <div></div>
                <div></div>
            </div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::{content::PROJECTS, interaction::Section};

    fn render() -> String {
        Owner::new().with(|| {
            provide_meta_context();
            view! { <Portfolio /> }.to_html()
        })
    }

    #[test]
    fn test_every_section_anchor_rendered_once() {
        let html = render();
        for section in Section::ALL {
            let anchor = format!("id=\"{}\"", section.id());
            assert_eq!(html.matches(&anchor).count(), 1, "{anchor}");
        }
    }

    #[test]
    fn test_projects_rendered_in_order() {
        let html = render();
        let gallery = html
            .find("id=\"projects\"")
            .expect("projects section should be rendered");
        let positions = PROJECTS
            .iter()
            .map(|p| {
                html[gallery..]
                    .find(&p.title.replace('&', "&amp;"))
                    .expect("project should be rendered")
            })
            .collect::<Vec<_>>();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_page_starts_closed_and_untracked() {
        let html = render();
        assert!(!html.contains("role=\"dialog\""));
        assert!(html.contains("--mouse-x: 0px; --mouse-y: 0px;"));
        assert!(html.contains(&main_class(false)));
    }

    #[test]
    fn test_main_scroll_locks_while_overlay_open() {
        assert!(main_class(false).contains("overflow-y-auto"));
        assert!(main_class(true).contains("overflow-hidden"));
        assert!(!main_class(true).contains("overflow-y-auto"));
    }
}
