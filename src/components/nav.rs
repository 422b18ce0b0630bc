use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::cta::QuizCta;
use crate::content::{BRAND, NAV_LINKS};

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let scroll_callback = {
                let window = window.clone();
                Closure::wrap(Box::new(move || {
                    let scroll_y = window.as_ref().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
                    is_scrolled.set(scroll_y > 24.0);
                }) as Box<dyn FnMut()>)
            };

            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = &window {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Anchor links keep their default jump; only the menu folds away.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let links = |class: &'static str| {
        NAV_LINKS
            .iter()
            .map(|(href, label)| html! {
                <a href={*href} class={class} onclick={close_menu.clone()}>{*label}</a>
            })
            .collect::<Html>()
    };

    html! {
        <header class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <nav class="nav-content">
                <a href="#home" class="nav-logo">{BRAND}</a>
                <div class="nav-links">
                    { links("nav-link") }
                </div>
                <div class="nav-actions">
                    <QuizCta place="header_start" class="cta--light nav-start">
                        {"Начать →"}
                    </QuizCta>
                    <button class="burger-menu" aria-label="Открыть меню" onclick={toggle_menu}>
                        { if *menu_open { "✕" } else { "☰" } }
                    </button>
                </div>
            </nav>
            if *menu_open {
                <div class="mobile-menu">
                    { links("mobile-link") }
                </div>
            }
        </header>
    }
}
