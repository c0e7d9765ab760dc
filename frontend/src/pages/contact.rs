use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;
use crate::components::footer::{OFFICE_ADDRESS, SERVICE_AREAS};

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <main class="contact-page">
            <h1>{"Contact Us"}</h1>
            <p>{"Have a project in mind or a question about a plan? Reach out and we'll get back to you with a customized estimate."}</p>

            <section class="contact-cards">
                <article class="contact-card">
                    <h2>{"Office"}</h2>
                    <p>{"Internal Main Office (not open to the public)"}</p>
                    <p>{OFFICE_ADDRESS}</p>
                </article>
                <article class="contact-card">
                    <h2>{"Where we work"}</h2>
                    <p>{SERVICE_AREAS.join(" • ")}</p>
                </article>
                <article class="contact-card">
                    <h2>{"Looking for work?"}</h2>
                    <p>{"Skilled trades of every kind are welcome on our team."}</p>
                    <Link<Route> to={Route::Join} classes="contact-link">{"Apply to join"}</Link<Route>>
                </article>
            </section>

            <style>
                {r#"
                .contact-page {
                    max-width: 1000px;
                    margin: 0 auto;
                    padding: 3rem 1rem;
                    text-align: center;
                }
                .contact-page h1 {
                    font-size: 2.25rem;
                    color: #2563eb;
                    margin-bottom: 1rem;
                }
                .contact-cards {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                    margin-top: 2.5rem;
                }
                .contact-card {
                    background: #f9fafb;
                    border-radius: 0.75rem;
                    padding: 1.5rem;
                }
                .contact-link {
                    display: inline-block;
                    margin-top: 1rem;
                    padding: 0.6rem 1.5rem;
                    background: #2563eb;
                    color: #fff;
                    border-radius: 0.375rem;
                    text-decoration: none;
                }
                @media (max-width: 768px) {
                    .contact-cards { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </main>
    }
}
