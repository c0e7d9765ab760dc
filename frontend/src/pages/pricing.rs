use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BillingCycle {
    Monthly,
    Annually,
}

impl BillingCycle {
    pub fn label(self) -> &'static str {
        match self {
            BillingCycle::Monthly => "monthly",
            BillingCycle::Annually => "annually",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PricingPlan {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub monthly_price: u32,
    pub annual_price: u32,
    pub additional_time_percentage: f32,
    pub base_hours: u32,
    pub included_additional_hours: f32,
    pub hourly_rate: u32,
    pub color: &'static str,
    pub popular: bool,
}

impl PricingPlan {
    pub fn price(&self, cycle: BillingCycle) -> u32 {
        match cycle {
            BillingCycle::Monthly => self.monthly_price,
            BillingCycle::Annually => self.annual_price,
        }
    }
}

pub const PRICING_PLANS: [PricingPlan; 5] = [
    PricingPlan {
        id: "extra-large",
        name: "The Extra Large",
        description: "60 hours of service per year",
        monthly_price: 400,
        annual_price: 4800,
        additional_time_percentage: 30.0,
        base_hours: 60,
        included_additional_hours: 18.0,
        hourly_rate: 90,
        color: "#4f46e5",
        popular: false,
    },
    PricingPlan {
        id: "upgrader",
        name: "Upgrader",
        description: "8 hours of service per year",
        monthly_price: 60,
        annual_price: 720,
        additional_time_percentage: 25.0,
        base_hours: 8,
        included_additional_hours: 10.0,
        hourly_rate: 90,
        color: "#6366f1",
        popular: false,
    },
    PricingPlan {
        id: "starter",
        name: "Starter",
        description: "4 hours of service per year",
        monthly_price: 40,
        annual_price: 480,
        additional_time_percentage: 20.0,
        base_hours: 4,
        included_additional_hours: 5.0,
        hourly_rate: 90,
        color: "#818cf8",
        popular: false,
    },
    PricingPlan {
        id: "best-value",
        name: "Best Value",
        description: "15 hours of service per year",
        monthly_price: 100,
        annual_price: 1200,
        additional_time_percentage: 20.5,
        base_hours: 15,
        included_additional_hours: 4.5,
        hourly_rate: 90,
        color: "#f59e0b",
        popular: true,
    },
    PricingPlan {
        id: "advanced",
        name: "Advanced",
        description: "45 hours of service per year",
        monthly_price: 300,
        annual_price: 3600,
        additional_time_percentage: 30.0,
        base_hours: 45,
        included_additional_hours: 13.5,
        hourly_rate: 90,
        color: "#4f46e5",
        popular: false,
    },
];

#[derive(Properties, PartialEq)]
struct PlanCardProps {
    plan: PricingPlan,
    cycle: BillingCycle,
}

#[function_component(PlanCard)]
fn plan_card(props: &PlanCardProps) -> Html {
    let plan = &props.plan;

    html! {
        <div class={classes!("pricing-card", plan.popular.then(|| "popular"))}>
            if plan.popular {
                <span class="popular-tag">{"Popular"}</span>
            }
            <div class="card-price" style={format!("background: {};", plan.color)}>
                <h3>{format!("${}", plan.price(props.cycle))}</h3>
                <p class="period">{props.cycle.label()}</p>
                <p class="additional">{format!("{}% additional time paid annually", plan.additional_time_percentage)}</p>
            </div>
            <div class="card-header">
                <h4>{plan.name}</h4>
                <p>{plan.description}</p>
            </div>
            <ul>
                <li>{format!(
                    "✓ {} hours of service per year. Paid plan includes {} additional hours.",
                    plan.base_hours, plan.included_additional_hours
                )}</li>
                <li>{format!("✓ Additional hours at ${} per hour", plan.hourly_rate)}</li>
                <li>{"✓ Upgrade opportunity"}</li>
                <li class="fine-print">{"***Prices reflect the current promotion and are subject to change without notice***"}</li>
            </ul>
            <select class="plan-select">
                <option value={format!("monthly-{}", plan.monthly_price)} selected=true>
                    {format!("Monthly - ${}", plan.monthly_price)}
                </option>
                <option value={format!("annually-{}", plan.annual_price)}>
                    {format!("Annually - ${}", plan.annual_price)}
                </option>
            </select>
            <Link<Route> to={Route::Contact} classes={classes!("plan-button", plan.popular.then(|| "primary"))}>
                {"Select plan"}
            </Link<Route>>
        </div>
    }
}

#[function_component(PricingCards)]
pub fn pricing_cards() -> Html {
    let cycle = use_state(|| BillingCycle::Monthly);

    let cycle_button = |target: BillingCycle, text: &'static str| {
        let onclick = {
            let cycle = cycle.clone();
            Callback::from(move |_: MouseEvent| cycle.set(target))
        };
        html! {
            <button
                class={classes!("cycle-button", (*cycle == target).then(|| "active"))}
                {onclick}
            >
                {text}
            </button>
        }
    };

    html! {
        <section class="pricing-container">
            <header class="pricing-header">
                <h2>{"Service Plans"}</h2>
                <p>{"Choose the plan that best suits your needs. All plans include support and maintenance."}</p>
                <nav class="cycle-toggle">
                    { cycle_button(BillingCycle::Monthly, "Monthly") }
                    { cycle_button(BillingCycle::Annually, "Annually") }
                </nav>
            </header>

            <div class="pricing-grid">
                { for PRICING_PLANS.iter().map(|plan| html! {
                    <PlanCard key={plan.id} plan={plan.clone()} cycle={*cycle} />
                }) }
            </div>

            <footer class="pricing-footer">
                <p>{"Prices are subject to change. Contact us for more details."}</p>
            </footer>

            <style>
                {r#"
                .pricing-container {
                    max-width: 1400px;
                    margin: 0 auto;
                    padding: 3rem 1rem;
                }
                .pricing-header {
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .pricing-header h2 {
                    font-size: 1.875rem;
                    font-weight: bold;
                    margin-bottom: 1rem;
                }
                .pricing-header p {
                    color: #6b7280;
                    max-width: 42rem;
                    margin: 0 auto;
                }
                .cycle-toggle {
                    display: flex;
                    justify-content: center;
                    gap: 1rem;
                    margin-top: 1.5rem;
                }
                .cycle-button {
                    border-radius: 9999px;
                    padding: 0.5rem 1.25rem;
                    border: 1px solid #d1d5db;
                    background: #fff;
                    cursor: pointer;
                }
                .cycle-button.active {
                    background: #111827;
                    color: #fff;
                }
                .pricing-grid {
                    display: grid;
                    grid-template-columns: repeat(5, 1fr);
                    gap: 1.5rem;
                }
                .pricing-card {
                    position: relative;
                    display: flex;
                    flex-direction: column;
                    border: 2px solid #e5e7eb;
                    border-radius: 0.75rem;
                    overflow: hidden;
                    transition: box-shadow 0.2s ease;
                }
                .pricing-card:hover {
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                }
                .pricing-card.popular {
                    border-color: #111827;
                    transform: scale(1.02);
                }
                .popular-tag {
                    position: absolute;
                    top: 0;
                    right: 0;
                    background: #111827;
                    color: #fff;
                    padding: 0.25rem 0.75rem;
                    font-size: 0.75rem;
                    border-bottom-left-radius: 0.5rem;
                }
                .card-price {
                    height: 8rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    color: #fff;
                }
                .card-price h3 {
                    font-size: 1.875rem;
                    font-weight: bold;
                }
                .card-price .additional {
                    font-size: 0.75rem;
                    opacity: 0.8;
                }
                .card-header, .pricing-card ul, .plan-select, .plan-button {
                    margin: 0 1.5rem;
                }
                .card-header {
                    padding: 1.5rem 0 0.5rem;
                }
                .pricing-card ul {
                    flex-grow: 1;
                    list-style: none;
                    padding: 0;
                    font-size: 0.875rem;
                }
                .pricing-card li {
                    margin-bottom: 0.5rem;
                }
                .fine-print {
                    font-size: 0.75rem;
                    color: #6b7280;
                }
                .plan-select {
                    padding: 0.5rem;
                    margin-top: 1rem;
                }
                .plan-button {
                    display: block;
                    text-align: center;
                    padding: 0.6rem;
                    margin-top: 1rem;
                    margin-bottom: 1.5rem;
                    border: 1px solid #111827;
                    border-radius: 0.375rem;
                    color: #111827;
                    text-decoration: none;
                }
                .plan-button.primary {
                    background: #111827;
                    color: #fff;
                }
                .pricing-footer {
                    text-align: center;
                    margin-top: 3rem;
                    font-size: 0.875rem;
                    color: #6b7280;
                }
                @media (max-width: 1280px) {
                    .pricing-grid { grid-template-columns: repeat(3, 1fr); }
                }
                @media (max-width: 1024px) {
                    .pricing-grid { grid-template-columns: repeat(2, 1fr); }
                }
                @media (max-width: 768px) {
                    .pricing-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_switches_between_monthly_and_annual_price() {
        let starter = PRICING_PLANS.iter().find(|p| p.id == "starter").unwrap();
        assert_eq!(starter.price(BillingCycle::Monthly), 40);
        assert_eq!(starter.price(BillingCycle::Annually), 480);
    }

    #[test]
    fn annual_price_is_twelve_months() {
        for plan in PRICING_PLANS.iter() {
            assert_eq!(plan.annual_price, plan.monthly_price * 12, "{}", plan.name);
        }
    }

    #[test]
    fn exactly_one_popular_plan() {
        let popular: Vec<_> = PRICING_PLANS.iter().filter(|p| p.popular).map(|p| p.id).collect();
        assert_eq!(popular, vec!["best-value"]);
    }
}
