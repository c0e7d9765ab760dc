use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;

mod config;
mod hooks;
mod components {
    pub mod notification;
    pub mod footer;
    pub mod interactive_house;
}
mod join {
    pub mod validation;
    pub mod form;
    pub mod relay;
}
mod pages {
    pub mod home;
    pub mod faq;
    pub mod how_it_works;
    pub mod join;
    pub mod pricing;
    pub mod services;
    pub mod contact;
    pub mod not_found;
}

use components::{
    footer::Footer,
    notification::Toaster,
};

use pages::{
    home::Home,
    faq::Faq,
    how_it_works::HowItWorks,
    join::JoinTeam,
    pricing::PricingCards,
    services::{ServiceList, ServiceDetail},
    contact::Contact,
    not_found::NotFound,
};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/subscribe")]
    Subscribe,
    #[at("/services")]
    Services,
    #[at("/services/:slug")]
    Service { slug: String },
    #[at("/how-it-works")]
    HowItWorks,
    #[at("/join")]
    Join,
    #[at("/faq")]
    Faq,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Subscribe => {
            info!("Rendering Subscribe page");
            html! { <PricingCards /> }
        },
        Route::Services => {
            info!("Rendering Services page");
            html! { <ServiceList /> }
        },
        Route::Service { slug } => {
            info!("Rendering Service page for {}", slug);
            html! { <ServiceDetail {slug} /> }
        },
        Route::HowItWorks => {
            info!("Rendering How It Works page");
            html! { <HowItWorks /> }
        },
        Route::Join => {
            info!("Rendering Join page");
            html! { <JoinTeam /> }
        },
        Route::Faq => {
            info!("Rendering FAQ page");
            html! { <Faq /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

fn nav_links() -> [(Route, &'static str); 6] {
    [
        (Route::Home, "Home"),
        (Route::Subscribe, "Subscribe"),
        (Route::Services, "Services"),
        (Route::HowItWorks, "How It Works"),
        (Route::Join, "Join"),
        (Route::Faq, "FAQ"),
    ]
}


#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <img src="/home_logob.png" alt="Logo" width="40" height="40" />
                    <span class="nav-brand">{"PerfectoRemodel"}</span>
                </Link<Route>>

                <button class="burger-menu" aria-label="Toggle menu" onclick={toggle_menu}>
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
                <div class={menu_class}>
                    { for nav_links().into_iter().map(|(route, label)| html! {
                        <div onclick={close_menu.clone()}>
                            <Link<Route> to={route} classes="nav-link">
                                {label}
                            </Link<Route>>
                        </div>
                    }) }
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Contact} classes="nav-contact-button">
                            {"Contact"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: sticky;
                    top: 0;
                    z-index: 50;
                    width: 100%;
                    background: #fff;
                    border-bottom: 1px solid #e5e7eb;
                }
                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0.75rem 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    flex-wrap: wrap;
                }
                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    text-decoration: none;
                    color: #111827;
                }
                .nav-logo img {
                    border-radius: 0.375rem;
                }
                .nav-brand {
                    font-weight: bold;
                    font-size: 1.25rem;
                }
                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                }
                .nav-link {
                    color: rgba(17, 24, 39, 0.8);
                    font-weight: 500;
                    text-decoration: none;
                }
                .nav-link:hover {
                    color: #111827;
                }
                .nav-contact-button {
                    padding: 0.4rem 0.9rem;
                    border-radius: 0.375rem;
                    background: #111827;
                    color: #fff;
                    text-decoration: none;
                    font-size: 0.875rem;
                }
                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    font-size: 1.5rem;
                    cursor: pointer;
                }
                @media (max-width: 768px) {
                    .burger-menu {
                        display: block;
                    }
                    .nav-brand {
                        display: none;
                    }
                    .nav-right {
                        width: 100%;
                        flex-direction: column;
                        align-items: stretch;
                        gap: 0;
                        max-height: 0;
                        overflow: hidden;
                        transition: max-height 0.3s ease-in-out;
                    }
                    .nav-right.mobile-menu-open {
                        max-height: 24rem;
                        padding: 1rem 0;
                    }
                    .nav-right .nav-link, .nav-right .nav-contact-button {
                        display: block;
                        padding: 0.5rem 1rem;
                        border-radius: 0.375rem;
                    }
                    .nav-right .nav-contact-button {
                        background: none;
                        color: rgba(17, 24, 39, 0.8);
                        font-size: 1rem;
                    }
                }
                "#}
            </style>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Toaster>
                <Nav />
                <div class="page-content">
                    <Switch<Route> render={switch} />
                </div>
                <Footer />
            </Toaster>
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
