use yew::prelude::*;

use crate::components::cta::QuizCta;
use crate::components::section::{Section, SectionHeading};
use crate::content::{Plan, PLANS};

#[derive(Properties, PartialEq)]
struct PlanCardProps {
    plan: &'static Plan,
}

#[function_component(PlanCard)]
fn plan_card(props: &PlanCardProps) -> Html {
    let Plan { name, price, desc, features, highlight } = props.plan;

    html! {
        <li class={classes!("card", "plan", highlight.then(|| "plan--highlight"))}>
            if *highlight {
                <span class="plan-badge">{"Популярный"}</span>
            }
            <div class="plan-name">{*name}</div>
            <div class="plan-price">{*price}</div>
            <p class="card-text">{*desc}</p>
            <ul class="check-list">
                { for features.iter().map(|feature| html! { <li>{"✓ "}{*feature}</li> }) }
            </ul>
            <QuizCta place="pricing"
                detail={Some((AttrValue::Static("plan"), AttrValue::Static(*name)))}
                class="cta--dark cta--block">
                {"Берем"}
            </QuizCta>
        </li>
    }
}

#[function_component(Pricing)]
pub fn pricing() -> Html {
    html! {
        <Section id="pricing" tone="light">
            <SectionHeading kicker="Прозрачные условия" title="Тарифы" />
            <ul class="plans-grid">
                { for PLANS.iter().map(|plan| html! { <PlanCard {plan} /> }) }
            </ul>
        </Section>
    }
}
