use chrono::Datelike;
use serde_json::json;
use yew::prelude::*;

use crate::analytics::use_analytics;
use crate::components::nav::Nav;
use crate::config::{self, LeadConfig};
use crate::content::{BRAND, QUIZ_QUESTIONS};
use crate::controller::ModalController;
use crate::pages::faq::Faq;
use crate::pages::hero::Hero;
use crate::pages::pricing::Pricing;
use crate::pages::showcase::{Cases, Inside, Metrics, Services, SourcesBand};
use crate::quiz::modal::QuizModal;
use crate::quiz::transmit::Delivery;

#[function_component(Footer)]
fn footer() -> Html {
    let year = chrono::Local::now().year();
    html! {
        <footer class="footer">
            <div class="band-inner footer-inner">
                <div class="footer-brand">{BRAND}</div>
                <p>{format!("(c) {} {}. Все права защищены.", year, BRAND)}</p>
            </div>
        </footer>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let analytics = use_analytics();
    let quiz_open = use_state_eq(|| false);
    let modal = ModalController::new(quiz_open);
    let delivery = use_memo(|_| Delivery::from_config(&LeadConfig::from_env()), ());

    {
        let analytics = analytics.clone();
        use_effect_with_deps(
            move |_| {
                analytics.track("ViewContent", json!({ "content_name": "TraffAgent Landing" }));
                || ()
            },
            (),
        );
    }

    html! {
        <ContextProvider<ModalController> context={modal}>
            <div class="landing-page">
                <Nav />
                <main>
                    <Hero />
                    <Metrics />
                    <SourcesBand />
                    <Services />
                    <Inside />
                    <Cases />
                    <Pricing />
                    <Faq />
                </main>
                <Footer />
                <QuizModal
                    questions={QUIZ_QUESTIONS}
                    delivery={(*delivery).clone()}
                    contact_url={config::get_contact_url()}
                />
                <style>
                    {r#"
                    * { box-sizing: border-box; }
                    body {
                        margin: 0;
                        font-family: Inter, -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                        background: #09090b;
                        color: #e4e4e7;
                    }
                    a { color: inherit; }

                    .landing-page { min-height: 100vh; }

                    .top-nav {
                        position: sticky;
                        top: 0;
                        z-index: 40;
                        border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                        background: rgba(9, 9, 11, 0.7);
                        backdrop-filter: blur(8px);
                        transition: background 0.2s ease;
                    }
                    .top-nav.scrolled { background: rgba(9, 9, 11, 0.95); }
                    .nav-content {
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 0.75rem 1rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo { font-weight: 600; text-decoration: none; color: #fff; }
                    .nav-links { display: none; gap: 1.5rem; font-size: 0.875rem; }
                    .nav-link { color: #a1a1aa; text-decoration: none; }
                    .nav-link:hover { color: #f4f4f5; }
                    .nav-actions { display: flex; align-items: center; gap: 0.5rem; }
                    .nav-start { display: none; }
                    .burger-menu {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 0.5rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: transparent;
                        color: inherit;
                        cursor: pointer;
                    }
                    .mobile-menu {
                        display: grid;
                        padding: 0.75rem 1rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(9, 9, 11, 0.95);
                    }
                    .mobile-link { padding: 0.75rem 0; text-decoration: none; }

                    .band { padding: 2.5rem 0; }
                    .band--light { background: #fff; color: #18181b; }
                    .band--dark { background: #09090b; color: #f4f4f5; }
                    .band-inner { max-width: 72rem; margin: 0 auto; padding: 0 1rem; }
                    .kicker {
                        display: inline-flex;
                        gap: 0.5rem;
                        font-size: 0.7rem;
                        text-transform: uppercase;
                        letter-spacing: 0.12em;
                        color: #71717a;
                    }
                    .section-title { margin: 0.5rem 0 0; font-size: 1.5rem; font-weight: 600; }

                    .card {
                        border-radius: 1rem;
                        border: 1px solid rgba(127, 127, 127, 0.2);
                        padding: 1rem;
                        list-style: none;
                    }
                    .card-title { font-weight: 500; }
                    .card-text { margin: 0.25rem 0 0; font-size: 0.875rem; opacity: 0.7; }
                    .check-list { margin: 0.75rem 0 0; padding: 0; list-style: none; font-size: 0.8rem; opacity: 0.7; }

                    .cta {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.5rem;
                        padding: 0.75rem 1.25rem;
                        border-radius: 0.75rem;
                        border: 1px solid transparent;
                        font-size: 0.95rem;
                        font-weight: 600;
                        text-decoration: none;
                        cursor: pointer;
                    }
                    .cta--dark { background: #18181b; color: #fff; }
                    .cta--light { background: #fff; color: #09090b; }
                    .cta--outline { background: transparent; color: inherit; border-color: currentColor; }
                    .cta--block { width: 100%; margin-top: 1rem; }

                    .hero { background: #fff; color: #09090b; }
                    .hero--mobile { padding: 2rem 0 3rem; min-height: 82vh; display: flex; flex-direction: column; justify-content: center; }
                    .hero--desktop { display: none; padding: 4rem 1rem; }
                    .hero-content { max-width: 72rem; margin: 0 auto; }
                    .urgent-strip {
                        display: flex;
                        justify-content: space-between;
                        padding: 0.5rem 0.75rem;
                        background: #dc2626;
                        color: #fff;
                        font-size: 0.7rem;
                        font-weight: 600;
                    }
                    .urgent-label { font-weight: 800; text-transform: uppercase; letter-spacing: 0.1em; }
                    .announcement { border: 1px solid #e4e4e7; overflow: hidden; }
                    .announcement-body { padding: 1.5rem 1rem; display: grid; gap: 1.5rem; }
                    .announcement-meta { display: inline-flex; align-items: center; gap: 0.5rem; font-size: 0.65rem; color: #52525b; }
                    .badge { background: #facc15; color: #000; font-weight: 800; text-transform: uppercase; padding: 0.1rem 0.5rem; border-radius: 0.25rem; }
                    .hero-title { margin: 0.5rem 0 0; font-size: 2.25rem; font-weight: 800; line-height: 1.1; }
                    .hero-title--caps { text-transform: uppercase; }
                    .hero-subtitle { max-width: 46ch; color: #52525b; font-size: 1rem; line-height: 1.4; }
                    .hero-cta-group { display: flex; flex-wrap: wrap; gap: 0.75rem; margin-top: 2rem; }
                    .hero-cta-group--stacked { display: grid; gap: 0.5rem; margin-top: 0.5rem; }
                    .hero-cta-group--stacked .cta--block { margin-top: 0; text-transform: uppercase; font-weight: 800; }

                    .metrics-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 0.75rem; padding: 0; margin: 0; }
                    .metric { text-align: center; border-color: #e4e4e7; }
                    .metric-value { font-size: 1.5rem; font-weight: 600; }
                    .metric-label { margin-top: 0.25rem; font-size: 0.7rem; color: #71717a; }

                    .sources-band {
                        border-top: 1px solid rgba(255, 255, 255, 0.08);
                        border-bottom: 1px solid rgba(255, 255, 255, 0.08);
                        background: #09090b;
                        padding: 1rem 0;
                    }
                    .marquee-item {
                        font-size: 1.1rem;
                        font-weight: 600;
                        text-transform: uppercase;
                        letter-spacing: 0.08em;
                        color: #a1a1aa;
                    }

                    .services-grid, .cases-grid, .plans-grid, .steps, .faq-list {
                        display: grid;
                        gap: 0.75rem;
                        margin: 1.5rem 0 0;
                        padding: 0;
                    }
                    .service { display: flex; flex-direction: column; justify-content: space-between; }
                    .case-head { display: flex; justify-content: space-between; align-items: baseline; }
                    .case-head h3 { margin: 0; font-size: 1rem; font-weight: 500; }
                    .case-result { font-size: 0.75rem; font-weight: 600; color: #34d399; }

                    .plan { padding: 1.25rem; border-color: #e4e4e7; }
                    .plan--highlight { border-color: #a1a1aa; }
                    .plan-badge { display: inline-block; margin-bottom: 0.75rem; padding: 0.1rem 0.5rem; border-radius: 999px; border: 1px solid #d4d4d8; font-size: 0.75rem; }
                    .plan-name { font-size: 1.1rem; font-weight: 600; }
                    .plan-price { margin-top: 0.25rem; font-size: 1.5rem; font-weight: 700; }

                    .faq-list { border: 1px solid rgba(255, 255, 255, 0.1); border-radius: 1rem; gap: 0; }
                    .faq-item { list-style: none; border-bottom: 1px solid rgba(255, 255, 255, 0.1); }
                    .faq-item:last-child { border-bottom: none; }
                    .faq-question {
                        width: 100%;
                        display: flex;
                        justify-content: space-between;
                        padding: 1rem;
                        background: none;
                        border: none;
                        color: inherit;
                        font-size: 0.9rem;
                        font-weight: 500;
                        text-align: left;
                        cursor: pointer;
                    }
                    .faq-answer { padding: 0 1rem 1rem; font-size: 0.875rem; color: #a1a1aa; }
                    .faq-answer p { margin: 0; }

                    .footer { border-top: 1px solid rgba(255, 255, 255, 0.05); padding: 2rem 0; color: #a1a1aa; }
                    .footer-inner { display: flex; flex-wrap: wrap; justify-content: space-between; align-items: center; gap: 0.75rem; }
                    .footer-brand { font-size: 0.875rem; font-weight: 600; color: #f4f4f5; }
                    .footer p { font-size: 0.75rem; margin: 0; }

                    @media (min-width: 640px) {
                        .hero--mobile { display: none; }
                        .hero--desktop { display: block; }
                        .hero-title { font-size: 3.5rem; }
                        .nav-start { display: inline-flex; }
                        .metrics-grid { grid-template-columns: repeat(4, 1fr); }
                        .services-grid { grid-template-columns: repeat(2, 1fr); }
                    }
                    @media (min-width: 768px) {
                        .nav-links { display: flex; }
                        .burger-menu, .mobile-menu { display: none; }
                        .cases-grid, .plans-grid { grid-template-columns: repeat(3, 1fr); }
                        .section-title { font-size: 2.25rem; }
                    }
                    @media (min-width: 1024px) {
                        .services-grid { grid-template-columns: repeat(4, 1fr); }
                    }
                    "#}
                </style>
            </div>
        </ContextProvider<ModalController>>
    }
}
