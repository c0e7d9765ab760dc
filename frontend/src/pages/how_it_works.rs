use yew::prelude::*;
use crate::components::footer::{LICENSES, OFFICE_ADDRESS, SERVICE_AREAS};

#[function_component(HowItWorks)]
pub fn how_it_works() -> Html {
    html! {
        <main class="how-page">
            <header>
                <h1>{"How It Works"}</h1>
            </header>

            <section class="how-split">
                <figure>
                    <img src="/img/diferent2.jpg" alt="PerfectoRemodel service" />
                </figure>
                <article>
                    <h2>{"A Better Approach to Home Improvement"}</h2>
                    <p>{"PerfectoRemodel is a home improvement subscription service that offers a much easier way to maintain your home."}</p>
                    <p>{"Unlike other home repair and remodel services that charge a large upfront fee, with PerfectoRemodel, you pay an annual subscription fee for a specific amount of hours. Once paid in full or by installments, we complete the work hour by hour for any small, odd job or big repair."}</p>
                    <p>{"Now you have a cost-effective way to easily manage your home repair, remodeling, or construction bills throughout the year. We accept credit cards, Zelle, or checks."}</p>
                </article>
            </section>

            <section class="how-card">
                <h2>{"Doing It Right Every Time"}</h2>
                <p>{"While you are at your house, your repair, remodel, or construction will be done. With PerfectoRemodel Corp., you get the satisfaction of knowing your job will be completed in a timely manner."}</p>
                <p>{"No more waiting. We coordinate the technician's arrival with you. No more hours spent seeking out qualified people on your own. No more sweating over wasted time."}</p>
                <p>{"Our company is licensed and insured in Long Island and NYC, and we will only send qualified technicians to your house."}</p>
            </section>

            <section class="how-split reversed">
                <article>
                    <h2>{"Five-Star Professionalism"}</h2>
                    <h3>{"Licensed and Insured"}</h3>
                    <ul>
                        { for LICENSES.iter().map(|license| html! { <li>{*license}</li> }) }
                    </ul>
                    <p>{"Our team has worked with us on many projects. Whatever you need inside and out, our workers take pride in what they do."}</p>
                    <p>{"Thanks to our thorough vetting process, you can always feel secure about our team working at your house. Stop worrying about strangers in your home; our company has made that a thing of the past."}</p>
                </article>
                <figure>
                    <img src="/img/diferent.jpg" alt="PerfectoRemodel professional team" />
                </figure>
            </section>

            <footer class="how-areas">
                <h3>{"Service Areas"}</h3>
                <p>{SERVICE_AREAS.join(" • ")}</p>
                <address>
                    <p class="office-label">{"Internal Main Office (not open to the public)"}</p>
                    <p>{OFFICE_ADDRESS}</p>
                </address>
            </footer>

            <style>
                {r#"
                .how-page {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 3rem 1rem;
                    color: #1f2937;
                }
                .how-page h1 {
                    font-size: 2.25rem;
                    text-align: center;
                    color: #2563eb;
                    margin-bottom: 3rem;
                }
                .how-page h2 {
                    font-size: 1.875rem;
                    color: #1d4ed8;
                    margin-bottom: 1.5rem;
                }
                .how-page p {
                    font-size: 1.125rem;
                    margin-bottom: 1rem;
                }
                .how-split {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                    margin-bottom: 4rem;
                }
                .how-split img {
                    width: 100%;
                    aspect-ratio: 16 / 9;
                    object-fit: cover;
                    border-radius: 0.5rem;
                }
                .how-card, .how-areas {
                    background: #eff6ff;
                    border-radius: 0.5rem;
                    padding: 2rem;
                    margin-bottom: 4rem;
                }
                .how-card h2, .how-areas {
                    text-align: center;
                }
                .how-areas address {
                    font-style: normal;
                    margin-top: 1rem;
                }
                .office-label {
                    font-weight: 500;
                }
                @media (max-width: 768px) {
                    .how-split { grid-template-columns: 1fr; }
                    .how-split.reversed figure { order: -1; }
                }
                "#}
            </style>
        </main>
    }
}
