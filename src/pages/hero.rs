use yew::prelude::*;

use crate::components::cta::{QuizCta, TelegramCta};
use crate::content::BRAND;

const TAGLINE: &str = "Трафик без границ";
const PITCH: &str = "Выходим за пределы стандартного таргета: медиабаинг, креативы, аналитика и автоматизация, которые превращают клики в прибыль.";

#[function_component(UrgentStrip)]
fn urgent_strip() -> Html {
    html! {
        <div class="urgent-strip">
            <span class="urgent-label">{"Срочно"}</span>
            <span>{"Объявление"}</span>
        </div>
    }
}

/// Phone-sized announcement card; the desktop hero is hidden below 640px and this one above.
#[function_component(MobileHero)]
fn mobile_hero() -> Html {
    html! {
        <section class="hero hero--mobile">
            <div class="announcement">
                <UrgentStrip />
                <div class="announcement-body">
                    <div class="announcement-meta">
                        <span class="badge">{"Эксклюзив"}</span>
                        <span>{format!("{} • медиа баинг", BRAND)}</span>
                    </div>
                    <h1 class="hero-title hero-title--caps">{TAGLINE}</h1>
                    <p class="hero-subtitle">{PITCH}</p>
                    <div class="hero-cta-group hero-cta-group--stacked">
                        <QuizCta place="kp_mobile_start" class="cta--dark cta--block">
                            {"Хочу продажи"}
                        </QuizCta>
                        <TelegramCta place="kp_mobile_tg" class="cta--outline cta--block">
                            {"Похуй, делаем!"}
                        </TelegramCta>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(DesktopHero)]
fn desktop_hero() -> Html {
    html! {
        <section class="hero hero--desktop">
            <div class="hero-content">
                <UrgentStrip />
                <span class="kicker kicker--light">{"✦ "}{TAGLINE}</span>
                <h1 class="hero-title">{format!("{} - трафик без границ", BRAND)}</h1>
                <p class="hero-subtitle">{PITCH}</p>
                <div class="hero-cta-group">
                    <QuizCta place="hero_start" class="cta--dark">
                        {"Хочу продажи"}
                    </QuizCta>
                    <TelegramCta place="hero_tg" class="cta--outline">
                        {"Похуй, делаем!"}
                    </TelegramCta>
                </div>
            </div>
        </section>
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <div id="home">
            <MobileHero />
            <DesktopHero />
        </div>
    }
}
