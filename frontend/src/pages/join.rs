use log::info;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::notification::{use_notify, Notify};
use crate::join::form::{JoinForm, SubmitStep};
use crate::join::relay::{FormRelay, RelayClient, SubmissionResult};
use crate::join::validation::{Field, SPECIALIZATIONS};

fn label_for(field: Field) -> &'static str {
    match field {
        Field::FirstName => "First Name",
        Field::LastName => "Last Name",
        Field::Email => "Email Address",
        Field::Phone => "Phone Number",
        Field::City => "City",
        Field::ZipCode => "Zip Code",
        Field::CompanyName => "Company Name (if associated)",
        Field::MaxTravelDistance => "Max Travel Distance for Jobs",
    }
}

fn input_type(field: Field) -> &'static str {
    match field {
        Field::Email => "email",
        Field::Phone => "tel",
        _ => "text",
    }
}

fn placeholder(field: Field) -> Option<&'static str> {
    match field {
        Field::Phone => Some("123-456-7890"),
        Field::MaxTravelDistance => Some("e.g., 25 miles"),
        _ => None,
    }
}

pub enum JoinMsg {
    SetField(Field, String),
    ToggleSpecialization(&'static str),
    Submit,
    Submitted(SubmissionResult),
}

#[derive(Properties, PartialEq)]
pub struct ApplicationFormProps {
    pub notify: Notify,
}

pub struct ApplicationForm {
    form: JoinForm,
    relay: FormRelay,
}

impl Component for ApplicationForm {
    type Message = JoinMsg;
    type Properties = ApplicationFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: JoinForm::default(),
            relay: FormRelay::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            JoinMsg::SetField(field, value) => {
                self.form.set_field(field, value);
                true
            }
            JoinMsg::ToggleSpecialization(tag) => {
                self.form.toggle_specialization(tag);
                true
            }
            JoinMsg::Submit => match self.form.begin_submit() {
                SubmitStep::Busy => false,
                SubmitStep::Rejected(notification) => {
                    ctx.props().notify.emit(notification);
                    true
                }
                SubmitStep::Send(payload) => {
                    info!("Sending join application to relay");
                    let relay = self.relay.clone();
                    ctx.link().send_future(async move {
                        JoinMsg::Submitted(relay.send(&payload).await)
                    });
                    true
                }
            },
            JoinMsg::Submitted(outcome) => {
                let notification = self.form.finish_submit(outcome);
                ctx.props().notify.emit(notification);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            JoinMsg::Submit
        });
        let submitting = self.form.is_submitting();
        let specialization_error = self.form.errors().specializations();

        html! {
            <form class="application-form" {onsubmit} novalidate=true>
                <section class="form-grid">
                    { for Field::ALL.into_iter().map(|field| self.render_field(ctx, field)) }
                </section>

                <section class="specializations">
                    <header>
                        <label class="specializations-label">
                            {"Tell us about the type of work you specialize in "}
                            <span class="required">{"*"}</span>
                        </label>
                        if !specialization_error.is_empty() {
                            <p class="field-error">{specialization_error}</p>
                        }
                    </header>
                    <div class="specialization-grid">
                        { for SPECIALIZATIONS.into_iter().map(|tag| self.render_specialization(ctx, tag)) }
                    </div>
                </section>

                <footer>
                    <button type="submit" class="submit-button" disabled={submitting}>
                        { if submitting { "Submitting..." } else { "Submit Application" } }
                    </button>
                </footer>
            </form>
        }
    }
}

impl ApplicationForm {
    fn render_field(&self, ctx: &Context<Self>, field: Field) -> Html {
        let error = self.form.errors().field(field);
        let oninput = ctx.link().callback(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            JoinMsg::SetField(field, input.value())
        });

        html! {
            <article class="form-field">
                <label for={field.name()}>
                    {label_for(field)}
                    if field.is_required() {
                        <>{" "}<span class="required">{"*"}</span></>
                    }
                </label>
                <input
                    id={field.name()}
                    name={field.name()}
                    type={input_type(field)}
                    placeholder={placeholder(field)}
                    value={self.form.values().get(field).to_string()}
                    class={classes!((!error.is_empty()).then(|| "input-error"))}
                    {oninput}
                />
                if !error.is_empty() {
                    <p class="field-error">{error}</p>
                }
            </article>
        }
    }

    fn render_specialization(&self, ctx: &Context<Self>, tag: &'static str) -> Html {
        let onchange = ctx.link().callback(move |_: Event| JoinMsg::ToggleSpecialization(tag));
        html! {
            <label class="specialization" key={tag}>
                <input
                    type="checkbox"
                    id={tag}
                    checked={self.form.values().has_specialization(tag)}
                    {onchange}
                />
                {tag}
            </label>
        }
    }
}

#[function_component(JoinTeam)]
pub fn join_team() -> Html {
    let notify = use_notify();

    html! {
        <main class="join-page">
            <header>
                <h1>{"Join Our Team"}</h1>
            </header>

            <section class="join-intro">
                <article>
                    <h2>{"Work on Your Terms"}</h2>
                    <p>{"Work as much as you like. Get the additional income you want. At your preferred time."}</p>
                    <p>{"Carpenters, painters, drywall, mason, handyman, landscapers, remodelers, everything and more; we're looking to hire all of you. Your skills are proudly welcome here."}</p>
                    <p>{"All with a license or no license and independent skilled workers with experience are welcome here. We will do all the sales, and you will do the work."}</p>
                    <p>{"Instead of sweating over the downtime in your schedule, relax, chill out, and get to work near where you live now."}</p>
                </article>
                <figure>
                    <img src="/img/join.jpg" alt="Join our team of professionals" />
                </figure>
            </section>

            <section class="application-card">
                <h2>{"Application Form"}</h2>
                <ApplicationForm {notify} />
            </section>

            <style>
                {r#"
                .join-page {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 3rem 1rem;
                }
                .join-page h1 {
                    font-size: 2.25rem;
                    text-align: center;
                    margin-bottom: 3rem;
                    color: #2563eb;
                }
                .join-intro {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                    margin-bottom: 4rem;
                }
                .join-intro h2 {
                    font-size: 1.875rem;
                    color: #1d4ed8;
                    margin-bottom: 1.5rem;
                }
                .join-intro p {
                    font-size: 1.125rem;
                    margin-bottom: 1rem;
                }
                .join-intro img {
                    width: 100%;
                    aspect-ratio: 1 / 1;
                    object-fit: cover;
                    border-radius: 0.5rem;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                }
                .application-card {
                    background: #f9fafb;
                    border-radius: 0.75rem;
                    padding: 2rem;
                }
                .application-card h2 {
                    font-size: 1.875rem;
                    text-align: center;
                    color: #1d4ed8;
                    margin-bottom: 2rem;
                }
                .form-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.5rem;
                    margin-bottom: 2rem;
                }
                .form-field input {
                    width: 100%;
                    padding: 0.5rem 0.75rem;
                    border: 1px solid #d1d5db;
                    border-radius: 0.375rem;
                }
                .form-field input.input-error {
                    border-color: #ef4444;
                }
                .required, .field-error {
                    color: #ef4444;
                }
                .field-error {
                    font-size: 0.875rem;
                    margin-top: 0.25rem;
                }
                .specialization-grid {
                    display: grid;
                    grid-template-columns: repeat(5, 1fr);
                    gap: 1rem;
                    margin: 1rem 0 2rem;
                }
                .specialization {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    cursor: pointer;
                }
                .submit-button {
                    padding: 1rem 2rem;
                    font-size: 1.125rem;
                    color: white;
                    background: #2563eb;
                    border: none;
                    border-radius: 0.375rem;
                    cursor: pointer;
                }
                .submit-button:hover {
                    background: #1d4ed8;
                }
                .submit-button:disabled {
                    opacity: 0.6;
                    cursor: not-allowed;
                }
                @media (max-width: 1024px) {
                    .join-intro { grid-template-columns: 1fr; }
                    .specialization-grid { grid-template-columns: repeat(3, 1fr); }
                }
                @media (max-width: 768px) {
                    .form-grid { grid-template-columns: 1fr; }
                    .specialization-grid { grid-template-columns: repeat(2, 1fr); }
                }
                "#}
            </style>
        </main>
    }
}
