use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;
use crate::components::interactive_house::InteractiveHouse;
use crate::pages::pricing::PricingCards;
use crate::pages::services::ServiceList;

#[function_component]
pub fn Home() -> Html {
    html! {
        <div class="home-page">
            <InteractiveHouse />
            <ServiceList />
            <PricingCards />
            <section class="home-cta">
                <h2>{"Skilled in a trade?"}</h2>
                <p>{"We do all the sales, you do the work. Pick up jobs near where you live."}</p>
                <Link<Route> to={Route::Join} classes="home-cta-link">{"Join our team"}</Link<Route>>
            </section>
            <style>
                {r#"
                .home-cta {
                    text-align: center;
                    padding: 3rem 1rem 4rem;
                    background: #eff6ff;
                }
                .home-cta h2 {
                    font-size: 1.875rem;
                    color: #1d4ed8;
                }
                .home-cta-link {
                    display: inline-block;
                    margin-top: 1rem;
                    padding: 0.75rem 2rem;
                    background: #2563eb;
                    color: #fff;
                    border-radius: 0.375rem;
                    text-decoration: none;
                }
                "#}
            </style>
        </div>
    }
}
