use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::section::{Section, SectionHeading};
use crate::content::FAQ;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <li class={classes!("faq-item", if *is_open { "open" } else { "" })}>
            <button class="faq-question" aria-expanded={is_open.to_string()} onclick={toggle}>
                <span class="question-text">{props.question.clone()}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            if *is_open {
                <div class="faq-answer">
                    { for props.children.iter() }
                </div>
            }
        </li>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    html! {
        <Section id="faq">
            <SectionHeading kicker="Вопросы" title="FAQ" />
            <ul class="faq-list">
                { for FAQ.iter().map(|(question, answer)| html! {
                    <FaqItem question={*question}>
                        <p>{*answer}</p>
                    </FaqItem>
                }) }
            </ul>
        </Section>
    }
}
