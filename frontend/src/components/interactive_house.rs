use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;
use crate::config;
use crate::hooks::use_mobile;
use crate::components::notification::{use_notify, Notification};

const NAVIGATION_TOAST_MS: u32 = 2000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    pub top: &'static str,
    pub left: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Area {
    pub id: &'static str,
    pub name: &'static str,
    pub desktop: Position,
    pub mobile: Position,
    pub service_slug: &'static str,
    pub icon: &'static str,
}

const fn area(
    id: &'static str,
    name: &'static str,
    (top, left): (&'static str, &'static str),
    service_slug: &'static str,
    icon: &'static str,
) -> Area {
    // Both layouts currently share coordinates.
    let position = Position { top, left };
    Area { id, name, desktop: position, mobile: position, service_slug, icon }
}

pub const AREAS: [Area; 10] = [
    area("kitchen", "Kitchen", ("75%", "30%"), "masonry", "🍳"),
    area("rooftop", "Rooftop", ("15%", "50%"), "insulation", "🏚"),
    area("roof", "Roof", ("10%", "30%"), "roof", "🏠"),
    area("bathroom", "Bathroom", ("55%", "75%"), "wallpaper", "🛁"),
    area("floors", "Floors", ("85%", "50%"), "tiling", "🏚"),
    area("walls", "Walls", ("40%", "85%"), "siding", "🪣"),
    area("shrubs", "Shrubs", ("75%", "90%"), "outdoor", "🌸"),
    area("stairs", "Stairs", ("50%", "50%"), "carpentry", "🪜"),
    area("living-room", "Living Room", ("40%", "30%"), "drywall", "🛋"),
    area("garage", "Garage", ("70%", "15%"), "assembling", "🚗"),
];

impl Area {
    pub fn route(&self) -> Route {
        Route::Service { slug: self.service_slug.to_string() }
    }

    pub fn navigation_notice(&self) -> Notification {
        Notification::info(
            format!("Navigating to {}", self.name),
            format!("Redirecting to the {} section...", self.name),
        )
        .with_duration(NAVIGATION_TOAST_MS)
    }

    fn overlay_style(&self, is_mobile: bool) -> String {
        let position = if is_mobile { self.mobile } else { self.desktop };
        format!(
            "top: {}; left: {}; transform: translate(-50%, -50%); z-index: 10;",
            position.top, position.left
        )
    }
}

#[function_component(InteractiveHouse)]
pub fn interactive_house() -> Html {
    let is_mobile = use_mobile(config::MOBILE_BREAKPOINT);
    let image_loaded = use_state(|| false);
    let notify = use_notify();

    let announce = |area: &Area| {
        let notify = notify.clone();
        let notice = area.navigation_notice();
        Callback::from(move |_: MouseEvent| notify.emit(notice.clone()))
    };

    let on_image_load = {
        let image_loaded = image_loaded.clone();
        Callback::from(move |_: Event| image_loaded.set(true))
    };

    html! {
        <section class="house-section">
            <header>
                <h1>{"Explore Our Model House"}</h1>
                <p class="house-hint">
                    { if is_mobile {
                        "Select an area of the house to get more information."
                    } else {
                        "Click on the different areas of the house to get more information about each space."
                    } }
                </p>
            </header>

            if is_mobile {
                <div class="house-grid">
                    { for AREAS.iter().map(|area| html! {
                        <div key={area.id} onclick={announce(area)}>
                            <Link<Route> to={area.route()} classes="house-tile">
                                <figure class="house-icon">{area.icon}</figure>
                                <span>{area.name}</span>
                            </Link<Route>>
                        </div>
                    }) }
                </div>
            } else {
                <>
                <article class="house-image">
                    <img
                        src="/img/casa_sinbg.png"
                        alt="Model house cross-section"
                        width="1000"
                        height="800"
                        onload={on_image_load}
                    />
                    if *image_loaded {
                        { for AREAS.iter().map(|area| html! {
                            <div
                                key={area.id}
                                class="house-marker"
                                style={area.overlay_style(is_mobile)}
                                onclick={announce(area)}
                            >
                                <Link<Route> to={area.route()} classes="marker-button">
                                    {area.name}
                                </Link<Route>>
                            </div>
                        }) }
                    }
                </article>
                <footer class="house-legend">
                    <h2>{"Available Areas"}</h2>
                    <nav>
                        { for AREAS.iter().map(|area| html! {
                            <div key={format!("legend-{}", area.id)} onclick={announce(area)}>
                                <Link<Route> to={area.route()} classes="legend-button">
                                    {area.icon}{" "}{area.name}
                                </Link<Route>>
                            </div>
                        }) }
                    </nav>
                </footer>
                </>
            }

            <style>
                {r#"
                .house-section {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    padding: 2rem 1rem;
                }
                .house-section h1 {
                    font-size: 3rem;
                    font-weight: bold;
                    text-align: center;
                    margin-bottom: 1.5rem;
                }
                .house-hint {
                    color: #6b7280;
                    text-align: center;
                    max-width: 42rem;
                    margin-bottom: 2rem;
                }
                .house-image {
                    position: relative;
                    width: 100%;
                    max-width: 48rem;
                }
                .house-image img {
                    width: 100%;
                    height: auto;
                }
                .house-marker {
                    position: absolute;
                }
                .marker-button {
                    display: inline-block;
                    padding: 0.3rem 0.8rem;
                    border-radius: 9999px;
                    border: 2px solid #fff;
                    background: #111827;
                    color: #fff;
                    font-size: 0.875rem;
                    text-decoration: none;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.2);
                    transition: transform 0.2s ease;
                }
                .marker-button:hover {
                    transform: scale(1.1);
                }
                .house-legend {
                    margin-top: 2rem;
                    text-align: center;
                }
                .house-legend nav {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 0.5rem;
                }
                .legend-button {
                    display: inline-block;
                    padding: 0.3rem 0.8rem;
                    border: 1px solid #d1d5db;
                    border-radius: 0.375rem;
                    color: #111827;
                    text-decoration: none;
                }
                .house-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                    width: 100%;
                    max-width: 28rem;
                }
                .house-tile {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    height: 6rem;
                    border: 2px solid #e5e7eb;
                    border-radius: 0.5rem;
                    color: #111827;
                    text-decoration: none;
                }
                .house-icon {
                    margin: 0;
                    padding: 0.5rem;
                    border-radius: 9999px;
                    background: rgba(17, 24, 39, 0.1);
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::services::find_service;

    #[test]
    fn every_area_links_to_a_known_service() {
        for area in AREAS.iter() {
            assert!(find_service(area.service_slug).is_some(), "{}", area.id);
        }
    }

    #[test]
    fn navigation_notice_names_the_area() {
        let garage = AREAS.iter().find(|a| a.id == "garage").unwrap();
        let notice = garage.navigation_notice();
        assert_eq!(notice.title, "Navigating to Garage");
        assert_eq!(notice.description.as_deref(), Some("Redirecting to the Garage section..."));
        assert_eq!(notice.duration_ms, 2000);
    }

    #[test]
    fn overlay_is_centred_on_the_position() {
        let stairs = AREAS.iter().find(|a| a.id == "stairs").unwrap();
        assert!(stairs.overlay_style(false).starts_with("top: 50%; left: 50%;"));
    }
}
