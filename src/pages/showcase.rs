use yew::prelude::*;

use crate::components::cta::QuizCta;
use crate::components::section::{Section, SectionHeading};
use crate::content::{CASES, METRICS, SERVICES, STEPS, TRAFFIC_SOURCES};
use crate::marquee::component::Marquee;

#[function_component(Metrics)]
pub fn metrics() -> Html {
    html! {
        <Section id="metrics" tone="light">
            <ul class="metrics-grid">
                { for METRICS.iter().map(|(value, label)| html! {
                    <li class="card metric">
                        <div class="metric-value">{*value}</div>
                        <div class="metric-label">{*label}</div>
                    </li>
                }) }
            </ul>
        </Section>
    }
}

#[function_component(SourcesBand)]
pub fn sources_band() -> Html {
    let items: Vec<AttrValue> = TRAFFIC_SOURCES.iter().copied().map(AttrValue::Static).collect();
    html! {
        <div class="sources-band">
            <Marquee {items} speed={45.0} gap={40.0} class="sources-marquee" />
        </div>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <Section id="services">
            <SectionHeading kicker="Что мы делаем" title="Услуги" />
            <ul class="services-grid">
                { for SERVICES.iter().map(|group| html! {
                    <li class="card service">
                        <div>
                            <div class="card-title">{group.title}</div>
                            <p class="card-text">{group.desc}</p>
                            <ul class="check-list">
                                { for group.bullets.iter().map(|bullet| html! { <li>{"✓ "}{*bullet}</li> }) }
                            </ul>
                        </div>
                        <QuizCta place="services_card"
                            detail={Some((AttrValue::Static("title"), AttrValue::Static(group.title)))}
                            class="cta--light cta--block">
                            {"Хочу продажи"}
                        </QuizCta>
                    </li>
                }) }
            </ul>
        </Section>
    }
}

/// Two-digit step label: 1 -> "01".
pub fn step_number(index: usize) -> String {
    format!("{:02}", index + 1)
}

#[function_component(Inside)]
pub fn inside() -> Html {
    html! {
        <Section id="inside" tone="light">
            <SectionHeading kicker="Как это устроено" title="Внутри TraffAgent" />
            <ol class="steps">
                { for STEPS.iter().enumerate().map(|(i, (title, desc))| html! {
                    <li class="card step">
                        <div class="card-title">{format!("{}. {}", step_number(i), title)}</div>
                        <p class="card-text">{*desc}</p>
                    </li>
                }) }
            </ol>
        </Section>
    }
}

#[function_component(Cases)]
pub fn cases() -> Html {
    html! {
        <Section id="cases">
            <SectionHeading kicker="Партнеры" title="Кейсы" />
            <ul class="cases-grid">
                { for CASES.iter().map(|(name, result, desc)| html! {
                    <li class="card case">
                        <div class="case-head">
                            <h3>{*name}</h3>
                            <span class="case-result">{*result}</span>
                        </div>
                        <p class="card-text">{*desc}</p>
                    </li>
                }) }
            </ul>
        </Section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_numbers_are_zero_padded() {
        assert_eq!(step_number(0), "01");
        assert_eq!(step_number(4), "05");
        assert_eq!(step_number(11), "12");
    }
}
