use web_sys::MouseEvent;
use yew::prelude::*;

use crate::analytics::use_analytics;
use crate::config;
use crate::controller::use_modal_controller;

#[derive(Properties, PartialEq)]
pub struct QuizCtaProps {
    /// Analytics placement label.
    pub place: AttrValue,
    /// Extra analytics field, e.g. ("plan", "Рост").
    #[prop_or_default]
    pub detail: Option<(AttrValue, AttrValue)>,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Any button that should open the quiz.
#[function_component(QuizCta)]
pub fn quiz_cta(props: &QuizCtaProps) -> Html {
    let modal = use_modal_controller();
    let analytics = use_analytics();

    let onclick = {
        let place = props.place.clone();
        let detail = props.detail.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            match &detail {
                Some((key, value)) => analytics.lead_with(&place, key, value),
                None => analytics.lead(&place),
            }
            modal.open();
        })
    };

    html! {
        <button class={classes!("cta", props.class.clone())} {onclick}>
            { for props.children.iter() }
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct TelegramCtaProps {
    pub place: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Straight to the messenger, skipping the quiz.
#[function_component(TelegramCta)]
pub fn telegram_cta(props: &TelegramCtaProps) -> Html {
    let analytics = use_analytics();
    let onclick = {
        let place = props.place.clone();
        Callback::from(move |_: MouseEvent| analytics.lead(&place))
    };

    html! {
        <a href={config::get_contact_url()} target="_blank" rel="noreferrer noopener"
            class={classes!("cta", props.class.clone())} {onclick}>
            { for props.children.iter() }
        </a>
    }
}
