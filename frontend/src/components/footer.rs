use chrono::{Datelike, Utc};
use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;

pub const SERVICE_AREAS: [&str; 7] = [
    "Nassau County",
    "Suffolk County",
    "Queens",
    "Brooklyn",
    "Bronx",
    "Staten Island",
    "Manhattan",
];

pub const LICENSES: [&str; 3] = [
    "Nassau License # H0305700000 (Exp. 08/31/25)",
    "Suffolk License # 47431-H (Exp. 05/01/26)",
    "NYC License # 2050066 (Exp. 02/28/27)",
];

pub const OFFICE_ADDRESS: &str = "10 EAST 19TH STREET, HUNTINGTON STATION NY 11746";

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Utc::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-columns">
                <section>
                    <h4>{"PerfectoRemodel"}</h4>
                    <p>{"Home improvement by subscription. Licensed and insured in Long Island and NYC."}</p>
                    <address>
                        <p>{"Internal Main Office (not open to the public)"}</p>
                        <p>{OFFICE_ADDRESS}</p>
                    </address>
                </section>
                <section>
                    <h4>{"Service Areas"}</h4>
                    <p>{SERVICE_AREAS.join(" • ")}</p>
                    <ul class="footer-licenses">
                        { for LICENSES.iter().map(|license| html! { <li>{*license}</li> }) }
                    </ul>
                </section>
                <nav>
                    <h4>{"Explore"}</h4>
                    <Link<Route> to={Route::Subscribe} classes="footer-link">{"Subscribe"}</Link<Route>>
                    <Link<Route> to={Route::Services} classes="footer-link">{"Services"}</Link<Route>>
                    <Link<Route> to={Route::HowItWorks} classes="footer-link">{"How It Works"}</Link<Route>>
                    <Link<Route> to={Route::Join} classes="footer-link">{"Join"}</Link<Route>>
                    <Link<Route> to={Route::Faq} classes="footer-link">{"FAQ"}</Link<Route>>
                    <Link<Route> to={Route::Contact} classes="footer-link">{"Contact"}</Link<Route>>
                </nav>
            </div>
            <p class="copyright">{format!("© {} PerfectoRemodel Corp. All rights reserved.", year)}</p>
            <style>
                {r#"
                .site-footer {
                    background: #111827;
                    color: #d1d5db;
                    padding: 3rem 1rem 1.5rem;
                }
                .footer-columns {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 2fr 2fr 1fr;
                    gap: 2rem;
                }
                .site-footer h4 {
                    color: #fff;
                    margin-bottom: 1rem;
                }
                .site-footer address {
                    font-style: normal;
                    margin-top: 1rem;
                }
                .footer-licenses {
                    list-style: none;
                    padding: 0;
                    font-size: 0.875rem;
                }
                .site-footer nav {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }
                .footer-link {
                    color: #d1d5db;
                    text-decoration: none;
                }
                .footer-link:hover {
                    color: #fff;
                }
                .copyright {
                    text-align: center;
                    font-size: 0.875rem;
                    margin-top: 2rem;
                    color: #9ca3af;
                }
                @media (max-width: 768px) {
                    .footer-columns { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </footer>
    }
}
