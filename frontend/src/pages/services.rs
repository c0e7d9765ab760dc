use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;
use crate::pages::not_found::NotFound;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub icon: &'static str,
    pub slug: &'static str,
}

const fn service(title: &'static str, icon: &'static str, slug: &'static str) -> Service {
    Service { title, icon, slug }
}

pub const SERVICES: [Service; 22] = [
    service("Asphalt paving", "/icons/asphalt.png", "asphalt"),
    service("Assembling", "/icons/assembling.png", "assembling"),
    service("Basement", "/icons/basement.png", "basement"),
    service("Carpentry", "/icons/carpentry.png", "carpentry"),
    service("Commercial work", "/icons/commercial.png", "commercial-work"),
    service("Decks", "/icons/decks.png", "decks"),
    service("Drop ceiling", "/icons/drop.png", "drop-ceiling"),
    service("Drywall / sheetrock", "/icons/drywall.png", "drywall"),
    service("Fence", "/icons/fence.png", "fence"),
    service("Flooring", "/icons/flooring.png", "flooring"),
    service("Gutter", "/icons/gutter.png", "gutter"),
    service("Insulation", "/icons/insulation.png", "insulation"),
    service("Masonry", "/icons/masonry.png", "masonry"),
    service("Outdoor", "/icons/outdoor.png", "outdoor"),
    service("Painting", "/icons/painting.png", "painting"),
    service("Power Wash", "/icons/power.png", "power"),
    service("Roof", "/icons/roof.png", "roof"),
    service("Shed", "/icons/shed.png", "shed"),
    service("Siding", "/icons/siding.png", "siding"),
    service("Site Preparation", "/icons/site.png", "site"),
    service("Tiling / Marble", "/icons/tile.png", "tiling"),
    service("Wallpaper", "/icons/wallpaper.png", "wallpaper"),
];

pub fn find_service(slug: &str) -> Option<&'static Service> {
    SERVICES.iter().find(|s| s.slug == slug)
}

#[function_component(ServiceList)]
pub fn service_list() -> Html {
    html! {
        <section class="service-list">
            <header>
                <h1>{"Our projects"}</h1>
            </header>
            <ul class="service-grid">
                { for SERVICES.iter().enumerate().map(|(index, service)| html! {
                    <li key={service.slug} class="service-tile">
                        <Link<Route> to={Route::Service { slug: service.slug.to_string() }} classes="service-link">
                            <figure>
                                <img
                                    src={service.icon}
                                    alt={service.title}
                                    loading={if index < 8 { "eager" } else { "lazy" }}
                                />
                            </figure>
                            <h3>{service.title}</h3>
                        </Link<Route>>
                    </li>
                }) }
            </ul>

            <style>
                {r#"
                .service-list {
                    max-width: 80rem;
                    margin: 0 auto 1.25rem;
                    padding: 0 1rem;
                }
                .service-list h1 {
                    font-size: 2.25rem;
                    font-weight: bold;
                    text-align: center;
                    margin-bottom: 2rem;
                }
                .service-grid {
                    list-style: none;
                    padding: 0;
                    display: grid;
                    grid-template-columns: repeat(5, 1fr);
                    gap: 1rem;
                }
                .service-tile {
                    background: #fff;
                    border-radius: 0.5rem;
                    height: 10rem;
                    max-width: 200px;
                    width: 100%;
                    margin: 0 auto;
                    transition: box-shadow 0.3s ease;
                }
                .service-tile:hover {
                    box-shadow: 0 10px 15px #000;
                }
                .service-link {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100%;
                    text-decoration: none;
                    color: #1f2937;
                }
                .service-link img {
                    width: 4rem;
                    height: 4rem;
                    object-fit: contain;
                }
                .service-link h3 {
                    font-size: 1rem;
                    text-align: center;
                    padding: 0 0.5rem;
                }
                @media (max-width: 1024px) {
                    .service-grid { grid-template-columns: repeat(3, 1fr); }
                }
                @media (max-width: 768px) {
                    .service-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ServiceDetailProps {
    pub slug: String,
}

#[function_component(ServiceDetail)]
pub fn service_detail(props: &ServiceDetailProps) -> Html {
    let Some(service) = find_service(&props.slug) else {
        return html! { <NotFound /> };
    };

    html! {
        <main class="service-detail">
            <img src={service.icon} alt={service.title} />
            <h1>{service.title}</h1>
            <p>{"Book this service as part of any subscription plan. Our licensed technicians work hour by hour on anything from small odd jobs to full projects."}</p>
            <nav>
                <Link<Route> to={Route::Subscribe} classes="detail-link">{"See plans"}</Link<Route>>
                <Link<Route> to={Route::Contact} classes="detail-link primary">{"Request a quote"}</Link<Route>>
            </nav>
            <style>
                {r#"
                .service-detail {
                    max-width: 42rem;
                    margin: 0 auto;
                    padding: 4rem 1rem;
                    text-align: center;
                }
                .service-detail img {
                    width: 6rem;
                    height: 6rem;
                    object-fit: contain;
                }
                .service-detail nav {
                    display: flex;
                    justify-content: center;
                    gap: 1rem;
                    margin-top: 2rem;
                }
                .detail-link {
                    padding: 0.6rem 1.5rem;
                    border: 1px solid #2563eb;
                    border-radius: 0.375rem;
                    color: #2563eb;
                    text-decoration: none;
                }
                .detail-link.primary {
                    background: #2563eb;
                    color: #fff;
                }
                "#}
            </style>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_are_unique() {
        for (i, a) in SERVICES.iter().enumerate() {
            for b in SERVICES.iter().skip(i + 1) {
                assert_ne!(a.slug, b.slug);
            }
        }
    }

    #[test]
    fn lookup_by_slug() {
        assert_eq!(find_service("drop-ceiling").map(|s| s.title), Some("Drop ceiling"));
        assert!(find_service("kitchen").is_none());
    }
}
