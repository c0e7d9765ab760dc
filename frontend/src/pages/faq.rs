use yew::prelude::*;
use web_sys::MouseEvent;

const FAQ_ITEMS: [(&str, &str); 5] = [
    (
        "How can I request a quote for a carpentry project?",
        "You can request a quote by filling out the contact form on our website or by calling our customer service. Provide details about your project, and we will get back to you with a customized estimate.",
    ),
    (
        "What materials do you use for masonry work?",
        "We use high-quality materials such as concrete blocks, bricks, natural stone, and mortar. We ensure all materials meet industry standards for durability and safety.",
    ),
    (
        "Do you provide assembly services for furniture?",
        "Yes, we offer professional assembly services for furniture, including IKEA furniture and custom-built pieces. Our team ensures everything is assembled securely and efficiently.",
    ),
    (
        "Can you handle both residential and commercial construction projects?",
        "Absolutely! We specialize in both residential and commercial construction, including renovations, new builds, and structural repairs. Contact us to discuss your project requirements.",
    ),
    (
        "How long does a typical carpentry project take to complete?",
        "The duration depends on the complexity and size of the project. Small projects like shelving may take a few days, while larger projects like custom cabinetry can take several weeks. We provide a timeline during the planning phase.",
    ),
];

/// Only one answer is open at a time; clicking the open question closes it.
pub fn toggle_open(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: &'static str,
    answer: &'static str,
    is_open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.is_open.then(|| "open"))}>
            <button class="faq-question" onclick={toggle} aria-expanded={props.is_open.to_string()}>
                <span class="question-text">{props.question}</span>
                <span class="toggle-icon">{"⌄"}</span>
            </button>
            <div class="faq-answer">
                <article>{props.answer}</article>
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let open_index = use_state(|| None::<usize>);

    html! {
        <section class="faq-page">
            <header>
                <h2>{"Frequently Asked Questions"}</h2>
            </header>
            <div class="faq-list">
                { for FAQ_ITEMS.iter().enumerate().map(|(index, (question, answer))| {
                    let on_toggle = {
                        let open_index = open_index.clone();
                        Callback::from(move |_: ()| open_index.set(toggle_open(*open_index, index)))
                    };
                    html! {
                        <FaqItem
                            key={index}
                            question={*question}
                            answer={*answer}
                            is_open={*open_index == Some(index)}
                            {on_toggle}
                        />
                    }
                }) }
            </div>

            <style>
                {r#"
                .faq-page {
                    max-width: 56rem;
                    margin: 0 auto 5rem;
                    padding: 2rem 1rem;
                }

                .faq-page h2 {
                    font-size: 1.875rem;
                    font-weight: bold;
                    text-align: center;
                    margin-bottom: 2rem;
                }

                .faq-list {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .faq-item {
                    background: #fff;
                    border-radius: 0.5rem;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                    overflow: hidden;
                }

                .faq-question {
                    width: 100%;
                    padding: 1.5rem;
                    background: none;
                    border: none;
                    font-size: 1.125rem;
                    font-weight: 500;
                    text-align: left;
                    cursor: pointer;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .toggle-icon {
                    font-size: 1.5rem;
                    transition: transform 0.3s ease;
                }

                .faq-item.open .toggle-icon {
                    transform: rotate(180deg);
                }

                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.3s ease;
                    padding: 0 1.5rem;
                    color: #4b5563;
                }

                .faq-item.open .faq-answer {
                    max-height: 600px;
                    padding: 0 1.5rem 1.5rem;
                }

                @media (max-width: 768px) {
                    .faq-question {
                        font-size: 1rem;
                        padding: 1rem;
                    }
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
    fn opening_and_closing() {
        let open = toggle_open(None, 2);
        assert_eq!(open, Some(2));
        assert_eq!(toggle_open(open, 2), None);
    }

    #[test]
    fn opening_another_item_closes_the_first() {
        assert_eq!(toggle_open(Some(0), 3), Some(3));
    }
}
