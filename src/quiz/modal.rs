use std::rc::Rc;

use log::{debug, info};
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use super::flow::{CompletionLatch, Question, QuizFlow};
use super::transmit::{dispatch_lead, Delivery};
use crate::analytics::use_analytics;
use crate::controller::use_modal_controller;

pub enum QuizAction {
    Select(&'static str),
    Back,
    Reset,
}

impl Reducible for QuizFlow {
    type Action = QuizAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let outcome = match action {
            QuizAction::Select(label) => next.select(label).map(|_| ()),
            QuizAction::Back => next.back().map(|_| ()),
            QuizAction::Reset => {
                next.reset();
                if next == *self {
                    return self;
                }
                Ok(())
            }
        };
        match outcome {
            Ok(()) => Rc::new(next),
            Err(err) => {
                debug!("quiz action ignored: {}", err);
                self
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct QuizModalProps {
    pub questions: &'static [Question],
    pub delivery: Delivery,
    pub contact_url: AttrValue,
}

#[function_component(QuizModal)]
pub fn quiz_modal(props: &QuizModalProps) -> Html {
    let modal = use_modal_controller();
    let analytics = use_analytics();
    let questions = props.questions;
    let flow = use_reducer(move || QuizFlow::new(questions));

    // Whatever closed the modal, the next visit starts over.
    {
        let dispatcher = flow.dispatcher();
        use_effect_with_deps(
            move |open| {
                if !*open {
                    dispatcher.dispatch(QuizAction::Reset);
                }
                || ()
            },
            modal.is_open(),
        );
    }

    // Entering the summary hands the lead off exactly once per completion.
    let latch = use_mut_ref(CompletionLatch::default);
    {
        let step = flow.step();
        let current = flow.clone();
        let delivery = props.delivery.clone();
        let analytics = analytics.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(text) = latch.borrow_mut().observe(&current) {
                    info!("Quiz completed: {}", text);
                    analytics.lead("quiz_complete");
                    dispatch_lead(&delivery, current.answers(), &text);
                }
                || ()
            },
            step,
        );
    }

    {
        let modal = modal.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                modal.close();
            }
        });
    }

    if !modal.is_open() {
        return html! {};
    }

    let close = modal.close_callback::<MouseEvent>();
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());
    let (position, total) = flow.progress();
    let answered = flow.answers().len();

    let body = match flow.current_question() {
        Some(question) => {
            let options = question
                .options
                .iter()
                .map(|&label| {
                    let selected = flow.answers().get(question.key) == Some(label);
                    let onclick = {
                        let flow = flow.clone();
                        Callback::from(move |_: MouseEvent| flow.dispatch(QuizAction::Select(label)))
                    };
                    html! {
                        <button class={classes!("quiz-option", selected.then(|| "selected"))} {onclick}>
                            {label}
                        </button>
                    }
                })
                .collect::<Html>();
            let on_back = {
                let flow = flow.clone();
                Callback::from(move |_: MouseEvent| flow.dispatch(QuizAction::Back))
            };

            html! {
                <>
                    <div class="quiz-progress">
                        <span>{format!("Шаг {} из {}", position, total)}</span>
                        <div class="quiz-progress-bar">
                            <div class="quiz-progress-fill"
                                style={format!("width: {}%;", answered * 100 / total.max(1))}></div>
                        </div>
                    </div>
                    <h3 class="quiz-prompt">{question.prompt}</h3>
                    <div class="quiz-options">{options}</div>
                    if position > 1 {
                        <button class="quiz-back" onclick={on_back}>{"← Назад"}</button>
                    }
                </>
            }
        }
        None => {
            let on_handoff = {
                let modal = modal.clone();
                let analytics = analytics.clone();
                Callback::from(move |_: MouseEvent| {
                    analytics.lead("quiz_tg");
                    modal.close();
                })
            };
            let recap = flow
                .questions()
                .iter()
                .map(|question| {
                    let answer = flow.answers().get(question.key).unwrap_or("—");
                    html! {
                        <li>
                            <span class="quiz-recap-prompt">{question.prompt}</span>
                            <span class="quiz-recap-answer">{answer}</span>
                        </li>
                    }
                })
                .collect::<Html>();

            html! {
                <div class="quiz-summary">
                    <h3 class="quiz-prompt">{"Готово! Вот что мы записали:"}</h3>
                    <ul class="quiz-recap">{recap}</ul>
                    <p class="quiz-note">
                        {"Напишите нам в Telegram, чтобы обсудить запуск. Ответы уже у менеджера, но можно продублировать."}
                    </p>
                    <a class="quiz-handoff" href={props.contact_url.clone()} target="_blank"
                        rel="noreferrer noopener" onclick={on_handoff}>
                        {"Написать в Telegram →"}
                    </a>
                </div>
            }
        }
    };

    html! {
        <div class="quiz-backdrop" onclick={close.clone()}>
            <style>
                {r#"
                    .quiz-backdrop {
                        position: fixed;
                        inset: 0;
                        z-index: 60;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1rem;
                        background: rgba(9, 9, 11, 0.8);
                        backdrop-filter: blur(6px);
                    }
                    .quiz-modal {
                        position: relative;
                        width: 100%;
                        max-width: 520px;
                        border-radius: 1.25rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: #09090b;
                        color: #f4f4f5;
                        padding: 1.75rem 1.5rem;
                    }
                    .quiz-close {
                        position: absolute;
                        top: 0.75rem;
                        right: 0.75rem;
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 0.75rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: transparent;
                        color: inherit;
                        font-size: 1.25rem;
                        cursor: pointer;
                    }
                    .quiz-progress {
                        font-size: 0.75rem;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        color: #71717a;
                    }
                    .quiz-progress-bar {
                        margin-top: 0.5rem;
                        height: 4px;
                        border-radius: 2px;
                        background: rgba(255, 255, 255, 0.08);
                        overflow: hidden;
                    }
                    .quiz-progress-fill {
                        height: 100%;
                        background: #fff;
                        transition: width 0.3s ease;
                    }
                    .quiz-prompt {
                        margin: 1.25rem 0 1rem;
                        font-size: 1.25rem;
                        font-weight: 600;
                    }
                    .quiz-options {
                        display: grid;
                        gap: 0.5rem;
                    }
                    .quiz-option {
                        text-align: left;
                        padding: 0.9rem 1rem;
                        border-radius: 0.75rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: transparent;
                        color: inherit;
                        font-size: 1rem;
                        cursor: pointer;
                    }
                    .quiz-option:hover,
                    .quiz-option.selected {
                        border-color: #fff;
                        background: rgba(255, 255, 255, 0.06);
                    }
                    .quiz-back {
                        margin-top: 1rem;
                        border: none;
                        background: none;
                        color: #a1a1aa;
                        cursor: pointer;
                    }
                    .quiz-recap {
                        list-style: none;
                        padding: 0;
                        margin: 0;
                        display: grid;
                        gap: 0.5rem;
                    }
                    .quiz-recap li {
                        display: flex;
                        justify-content: space-between;
                        gap: 1rem;
                        font-size: 0.9rem;
                    }
                    .quiz-recap-prompt { color: #a1a1aa; }
                    .quiz-recap-answer { font-weight: 600; }
                    .quiz-note {
                        margin-top: 1.25rem;
                        font-size: 0.85rem;
                        color: #a1a1aa;
                    }
                    .quiz-handoff {
                        display: flex;
                        justify-content: center;
                        margin-top: 1rem;
                        padding: 0.9rem 1rem;
                        border-radius: 0.75rem;
                        background: #fff;
                        color: #09090b;
                        font-weight: 700;
                        text-decoration: none;
                    }
                "#}
            </style>
            <div class="quiz-modal" role="dialog" aria-modal="true" onclick={keep_open}>
                <button class="quiz-close" aria-label="Закрыть" onclick={close}>{"×"}</button>
                { body }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::flow::Step;

    static QUESTIONS: &[Question] = &[
        Question {
            key: "budget",
            prompt: "Бюджет",
            options: &["до $1k", "$1k-$5k"],
        },
        Question {
            key: "niche",
            prompt: "Ниша",
            options: &["E-com", "SaaS"],
        },
    ];

    fn start() -> Rc<QuizFlow> {
        Rc::new(QuizFlow::new(QUESTIONS))
    }

    #[test]
    fn test_reducer_walks_forward_and_back() {
        let flow = start()
            .reduce(QuizAction::Select("до $1k"))
            .reduce(QuizAction::Back);
        assert_eq!(flow.step(), Step::Question(0));
        assert_eq!(flow.answers().get("budget"), Some("до $1k"));
    }

    #[test]
    fn test_reducer_ignores_invalid_actions() {
        let flow = start();
        let same = flow.clone().reduce(QuizAction::Back);
        assert!(Rc::ptr_eq(&flow, &same));

        let same = flow.clone().reduce(QuizAction::Select("nope"));
        assert!(Rc::ptr_eq(&flow, &same));
    }

    #[test]
    fn test_reset_after_completion_starts_clean() {
        let done = start()
            .reduce(QuizAction::Select("$1k-$5k"))
            .reduce(QuizAction::Select("SaaS"));
        assert_eq!(done.step(), Step::Summary);

        let reopened = done.reduce(QuizAction::Reset);
        assert_eq!(reopened.step(), Step::Question(0));
        assert!(reopened.answers().is_empty());
    }

    #[test]
    fn test_reset_of_fresh_flow_keeps_same_state() {
        let flow = start();
        let same = flow.clone().reduce(QuizAction::Reset);
        assert!(Rc::ptr_eq(&flow, &same));
    }
}
