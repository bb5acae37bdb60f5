//! Site shell: intro, routing between the home view and project pages,
//! header, footer, and the home sections.

use std::rc::Rc;

use gloo::console::warn;
use gloo::timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use wasm_bindgen_futures::JsFuture;
use yew::prelude::*;

use sakuhinshu_core::{animates_on_entrance, ScrollDirection};

use crate::app_router::{self, Route};
use crate::case_study::CaseStudyPage;
use crate::content::{self, ProjectKind, WorkTile};
use crate::gallery_page::GalleryPage;
use crate::menu_page::MenuGraphicsPage;
use crate::persisted::{self, ThemeMode};
use crate::scroll_runtime;
use crate::section_tracker;

const INTRO_MS: u32 = 1_000;
const COPY_TOAST_MS: u32 = 1_600;

/// Copies the contact email and flashes the `copied` flag for a short toast.
fn copy_contact_email(copied: UseStateHandle<bool>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let promise = window
        .navigator()
        .clipboard()
        .write_text(content::CONTACT_EMAIL);
    spawn_local(async move {
        if JsFuture::from(promise).await.is_ok() {
            copied.set(true);
            Timeout::new(COPY_TOAST_MS, move || copied.set(false)).forget();
        } else {
            warn!("clipboard write failed");
        }
    });
}

/// Current scroll direction, re-rendering on change. `None` until the first
/// meaningful scroll and after jumping back to the top.
#[hook]
fn use_scroll_direction() -> Option<ScrollDirection> {
    let direction = use_state(scroll_runtime::direction);
    {
        let direction = direction.clone();
        use_effect_with((), move |_| {
            let id = scroll_runtime::add_direction_hook(Rc::new(move |next| {
                direction.set(next);
            }));
            move || scroll_runtime::remove_direction_hook(id)
        });
    }
    *direction
}

#[function_component(App)]
pub(crate) fn app() -> Html {
    let loading = use_state(|| true);
    let route = use_state(app_router::current_route);
    let theme = use_state(|| persisted::load_settings().theme_mode);

    {
        let loading = loading.clone();
        use_effect_with((), move |_| {
            let handle = Timeout::new(INTRO_MS, move || loading.set(false));
            move || drop(handle)
        });
    }

    {
        let route = route.clone();
        use_effect_with((), move |_| {
            let listener = app_router::listen_popstate(Rc::new(move |next| route.set(next)));
            move || drop(listener)
        });
    }

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_| {
            let next = theme.toggled();
            theme.set(next);
            persisted::apply_theme(next);
            persisted::save_theme_mode(next);
        })
    };

    let on_open_project = {
        let route = route.clone();
        Callback::from(move |id: &'static str| {
            let next = Route::Project(id);
            app_router::push_route(&next);
            route.set(next);
        })
    };

    let on_back = {
        let route = route.clone();
        Callback::from(move |_| {
            app_router::push_route(&Route::Home);
            route.set(Route::Home);
            // The home view is not in the DOM yet; scroll once it is.
            Timeout::new(0, || section_tracker::scroll_to_section("work")).forget();
        })
    };

    if *loading {
        return html! { <LandingIntro /> };
    }

    let view = match (*route).clone() {
        Route::Home => html! {
            <>
                <Hero />
                <WorkGrid on_open_project={on_open_project} />
                <AboutSection />
                <ContactSection />
            </>
        },
        Route::Project(id) => project_view(id, on_back),
    };

    html! {
        <>
            <Header theme={*theme} on_toggle_theme={on_toggle_theme} />
            <main>{view}</main>
            <Footer />
        </>
    }
}

fn project_view(id: &'static str, on_back: Callback<()>) -> Html {
    let kind = content::work_item(id).map(|item| item.kind);
    match kind {
        Some(ProjectKind::CaseStudy) => html! { <CaseStudyPage {id} {on_back} /> },
        Some(ProjectKind::Gallery) => html! { <GalleryPage {on_back} /> },
        Some(ProjectKind::MenuGraphics) => html! { <MenuGraphicsPage {on_back} /> },
        None => html! {
            <>
                <Hero />
                <AboutSection />
            </>
        },
    }
}

#[function_component(LandingIntro)]
fn landing_intro() -> Html {
    html! {
        <div class="landing-intro" aria-hidden="true">
            <span class="landing-intro-mark">{"sakuhinshu"}</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct HeaderProps {
    theme: ThemeMode,
    on_toggle_theme: Callback<()>,
}

#[function_component(Header)]
fn header(props: &HeaderProps) -> Html {
    let copied = use_state(|| false);
    let menu_open = use_state(|| false);

    let on_copy_email = {
        let copied = copied.clone();
        Callback::from(move |_: MouseEvent| copy_contact_email(copied.clone()))
    };

    let on_toggle_theme = {
        let on_toggle_theme = props.on_toggle_theme.clone();
        Callback::from(move |_: MouseEvent| on_toggle_theme.emit(()))
    };

    let on_toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let nav_links = content::NAV_ITEMS
        .iter()
        .map(|item| {
            let onclick = {
                let menu_open = menu_open.clone();
                let anchor = item.anchor;
                Callback::from(move |event: MouseEvent| {
                    event.prevent_default();
                    menu_open.set(false);
                    section_tracker::scroll_to_section(anchor);
                })
            };
            html! {
                <a
                    key={item.label}
                    href={format!("#{}", item.anchor)}
                    class="header-nav-link"
                    {onclick}
                >
                    {item.label}
                </a>
            }
        })
        .collect::<Html>();

    let theme_label = match props.theme {
        ThemeMode::Light => "Dark mode",
        ThemeMode::Dark => "Light mode",
    };

    html! {
        <header class="site-header">
            <a class="site-mark" href="/">{"sakuhinshu"}</a>
            <nav class={classes!("header-nav", (*menu_open).then_some("is-open"))}>
                {nav_links}
                <button type="button" class="header-email" onclick={on_copy_email}>
                    {content::CONTACT_EMAIL}
                    if *copied {
                        <span class="copy-toast">{"copied"}</span>
                    }
                </button>
                <button type="button" class="theme-toggle" onclick={on_toggle_theme}>
                    {theme_label}
                </button>
            </nav>
            <button
                type="button"
                class="menu-toggle"
                aria-label="Menu"
                onclick={on_toggle_menu}
            >
                {"☰"}
            </button>
        </header>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <section class="hero">
            <h1>{"Design that earns its place on screen."}</h1>
            <p class="hero-sub">
                {"Portfolio of a product and graphic designer: case studies, \
                  print work, and motion."}
            </p>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct WorkGridProps {
    on_open_project: Callback<&'static str>,
}

#[function_component(WorkGrid)]
fn work_grid(props: &WorkGridProps) -> Html {
    let direction = use_scroll_direction();
    let animate = animates_on_entrance(direction);

    let tiles = content::WORK_ITEMS
        .iter()
        .map(|item| {
            let onclick = {
                let on_open_project = props.on_open_project.clone();
                let id = item.id;
                Callback::from(move |_: MouseEvent| on_open_project.emit(id))
            };
            let tile = match &item.tile {
                WorkTile::Image { src } => html! {
                    <img class="work-tile-image" src={*src} alt={item.title} />
                },
                WorkTile::SolidColor { background, logo } => html! {
                    <div
                        class="work-tile-solid"
                        style={format!("background: {background};")}
                    >
                        if let Some(logo) = logo {
                            <img class="work-tile-logo" src={*logo} alt={item.title} />
                        } else {
                            <span class="work-tile-text">{item.title}</span>
                        }
                    </div>
                },
            };
            html! {
                <div
                    key={item.id}
                    class={classes!("work-tile", animate.then_some("animate-in"))}
                    {onclick}
                >
                    {tile}
                    <div class="work-tile-overlay">
                        <span class="work-tile-category">{item.category}</span>
                        <h3>{item.title}</h3>
                        <p>{item.subtitle}</p>
                    </div>
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <section id="work" class="work-grid-section">
            <h2>{"Selected Work"}</h2>
            <p class="work-grid-sub">{"Explore my latest projects"}</p>
            <div class="work-grid">{tiles}</div>
        </section>
    }
}

#[function_component(AboutSection)]
fn about_section() -> Html {
    let direction = use_scroll_direction();
    let animate = animates_on_entrance(direction);
    html! {
        <section
            id="about"
            class={classes!("about-section", animate.then_some("animate-in"))}
        >
            <h2>{"About"}</h2>
            <p>
                {"Designer working across product, print, and motion. \
                  Currently taking on select freelance projects."}
            </p>
        </section>
    }
}

#[function_component(ContactSection)]
fn contact_section() -> Html {
    let copied = use_state(|| false);
    let direction = use_scroll_direction();
    let animate = animates_on_entrance(direction);
    let on_copy = {
        let copied = copied.clone();
        Callback::from(move |_: MouseEvent| copy_contact_email(copied.clone()))
    };
    html! {
        <section
            id="contact"
            class={classes!("contact-section", animate.then_some("animate-in"))}
        >
            <h2>{"Let's work together"}</h2>
            <p>{"Have a project in mind? Copy my email and say hello."}</p>
            <button type="button" class="contact-email" onclick={on_copy}>
                {content::CONTACT_EMAIL}
                if *copied {
                    <span class="copy-toast">{"copied"}</span>
                }
            </button>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let direction = use_scroll_direction();
    let reveal = animates_on_entrance(direction);
    html! {
        <footer class={classes!("site-footer", reveal.then_some("reveal"))}>
            <span>{"© 2026 sakuhinshu"}</span>
            <a href={format!("mailto:{}", content::CONTACT_EMAIL)}>
                {content::CONTACT_EMAIL}
            </a>
        </footer>
    }
}
