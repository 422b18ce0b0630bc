use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{
    Event, HtmlElement, IntersectionObserver, IntersectionObserverEntry, MediaQueryList,
    PointerEvent, ResizeObserver,
};
use yew::prelude::*;
use yew_hooks::prelude::*;

use super::frame::FrameLoop;
use super::state::{Gate, MarqueeState};

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

#[derive(Properties, PartialEq)]
pub struct MarqueeProps {
    pub items: Vec<AttrValue>,
    /// Pixels per second.
    #[prop_or(60.0)]
    pub speed: f64,
    /// Pixels between items and between the end of one cycle and the next.
    #[prop_or(48.0)]
    pub gap: f64,
    #[prop_or_default]
    pub class: Classes,
}

#[derive(Clone)]
struct Strips {
    lead: NodeRef,
    trail: NodeRef,
}

impl Strips {
    fn measure(&self) -> f64 {
        self.lead
            .cast::<HtmlElement>()
            .map(|el| el.get_bounding_client_rect().width())
            .unwrap_or(0.0)
    }

    fn paint(&self, state: &MarqueeState) {
        let (lead_x, trail_x) = state.strip_positions();
        for (node, x) in [(&self.lead, lead_x), (&self.trail, trail_x)] {
            if let Some(el) = node.cast::<HtmlElement>() {
                let _ = el
                    .style()
                    .set_property("transform", &format!("translate3d({}px, 0, 0)", x));
            }
        }
    }
}

type Shared<T> = Rc<RefCell<T>>;

/// Brings the frame loop in line with the state: running while animating, parked otherwise.
fn sync(state: &Shared<MarqueeState>, frames: &Shared<Option<FrameLoop>>) {
    let animating = state.borrow().is_animating();
    if let Some(frames) = frames.borrow().as_ref() {
        if animating {
            frames.resume();
        } else {
            frames.pause();
        }
    }
}

fn set_gate(state: &Shared<MarqueeState>, frames: &Shared<Option<FrameLoop>>, gate: Gate, active: bool) {
    let changed = state.borrow_mut().set_gate(gate, active);
    if changed {
        debug!("marquee gate {:?} -> {}", gate, active);
        sync(state, frames);
    }
}

fn remeasure(state: &Shared<MarqueeState>, frames: &Shared<Option<FrameLoop>>, strips: &Strips) {
    {
        let mut state = state.borrow_mut();
        let previous = state.width();
        state.set_width(strips.measure());
        if state.width() != previous {
            debug!("marquee strip {}px, offset {}px", state.width(), state.offset());
        }
        strips.paint(&state);
    }
    sync(state, frames);
}

/// Touch taps fire `pointerenter` with no matching leave, so only mice and pens hover.
pub fn pointer_hovers(pointer_type: &str) -> bool {
    pointer_type != "touch"
}

/// Everything the marquee hooked into the page, torn down together on unmount.
struct Subscriptions {
    resize: Option<ResizeObserver>,
    intersection: Option<IntersectionObserver>,
    motion_query: Option<(MediaQueryList, Closure<dyn FnMut()>)>,
    visibility: Option<Closure<dyn FnMut()>>,
    // Kept alive for as long as the observers above hold them.
    _resize_callback: Closure<dyn FnMut()>,
    _intersection_callback: Closure<dyn FnMut(Array)>,
}

impl Subscriptions {
    fn disconnect(self) {
        if let Some(observer) = self.resize {
            observer.disconnect();
        }
        if let Some(observer) = self.intersection {
            observer.disconnect();
        }
        if let Some((query, callback)) = &self.motion_query {
            let _ = query
                .remove_event_listener_with_callback("change", callback.as_ref().unchecked_ref());
        }
        if let Some(callback) = &self.visibility {
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                let _ = document.remove_event_listener_with_callback(
                    "visibilitychange",
                    callback.as_ref().unchecked_ref(),
                );
            }
        }
    }
}

fn subscribe(
    container: &NodeRef,
    strips: &Strips,
    state: &Shared<MarqueeState>,
    frames: &Shared<Option<FrameLoop>>,
) -> Subscriptions {
    let window = web_sys::window();
    let document = window.as_ref().and_then(|w| w.document());

    // Size changes of the strip or its container.
    let resize_callback = {
        let (state, frames, strips) = (state.clone(), frames.clone(), strips.clone());
        Closure::wrap(Box::new(move || remeasure(&state, &frames, &strips)) as Box<dyn FnMut()>)
    };
    let resize = ResizeObserver::new(resize_callback.as_ref().unchecked_ref())
        .map_err(|err| debug!("ResizeObserver unavailable: {:?}", err))
        .ok();
    if let Some(observer) = &resize {
        if let Some(el) = container.cast::<HtmlElement>() {
            observer.observe(&el);
        }
        if let Some(el) = strips.lead.cast::<HtmlElement>() {
            observer.observe(&el);
        }
    }

    // Viewport visibility.
    let intersection_callback = {
        let (state, frames) = (state.clone(), frames.clone());
        Closure::wrap(Box::new(move |entries: Array| {
            let visible = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .last()
                .map(|entry| entry.is_intersecting());
            if let Some(visible) = visible {
                set_gate(&state, &frames, Gate::OutOfView, !visible);
            }
        }) as Box<dyn FnMut(Array)>)
    };
    let intersection = IntersectionObserver::new(intersection_callback.as_ref().unchecked_ref())
        .map_err(|err| debug!("IntersectionObserver unavailable: {:?}", err))
        .ok();
    if let (Some(observer), Some(el)) = (&intersection, container.cast::<HtmlElement>()) {
        observer.observe(&el);
    }

    // Accessibility preference.
    let motion_query = window
        .as_ref()
        .and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok().flatten())
        .map(|query| {
            set_gate(state, frames, Gate::ReducedMotion, query.matches());
            let callback = {
                let (state, frames, query) = (state.clone(), frames.clone(), query.clone());
                Closure::wrap(Box::new(move || {
                    set_gate(&state, &frames, Gate::ReducedMotion, query.matches());
                }) as Box<dyn FnMut()>)
            };
            let _ = query.add_event_listener_with_callback("change", callback.as_ref().unchecked_ref());
            (query, callback)
        });

    // Background tab.
    let visibility = document.map(|document| {
        set_gate(state, frames, Gate::TabHidden, document.hidden());
        let callback = {
            let (state, frames, document) = (state.clone(), frames.clone(), document.clone());
            Closure::wrap(Box::new(move || {
                set_gate(&state, &frames, Gate::TabHidden, document.hidden());
            }) as Box<dyn FnMut()>)
        };
        let _ = document
            .add_event_listener_with_callback("visibilitychange", callback.as_ref().unchecked_ref());
        callback
    });

    Subscriptions {
        resize,
        intersection,
        motion_query,
        visibility,
        _resize_callback: resize_callback,
        _intersection_callback: intersection_callback,
    }
}

/// Endless left-scrolling band of short labels.
#[function_component(Marquee)]
pub fn marquee(props: &MarqueeProps) -> Html {
    let container = use_node_ref();
    let lead = use_node_ref();
    let trail = use_node_ref();
    let strips = Strips { lead, trail };
    let state = use_mut_ref(MarqueeState::new);
    let frames = use_mut_ref(|| None::<FrameLoop>);

    {
        let (state, frames) = (state.clone(), frames.clone());
        use_event(container.clone(), "pointerenter", move |e: PointerEvent| {
            if pointer_hovers(&e.pointer_type()) {
                set_gate(&state, &frames, Gate::Hovered, true);
            }
        });
    }
    {
        let (state, frames) = (state.clone(), frames.clone());
        use_event(container.clone(), "pointerleave", move |e: PointerEvent| {
            if pointer_hovers(&e.pointer_type()) {
                set_gate(&state, &frames, Gate::Hovered, false);
            }
        });
    }
    {
        let (state, frames, strips) = (state.clone(), frames.clone(), strips.clone());
        use_event_with_window("resize", move |_: Event| {
            remeasure(&state, &frames, &strips);
        });
    }

    {
        let (container, strips) = (container.clone(), strips.clone());
        let (state, frames) = (state.clone(), frames.clone());
        use_effect_with_deps(
            move |(_, speed, _)| {
                let speed = *speed;
                state.borrow_mut().attach();

                let frame_loop = {
                    let (state, strips) = (state.clone(), strips.clone());
                    FrameLoop::new(move |dt| {
                        let mut state = state.borrow_mut();
                        if state.advance(speed, dt) {
                            strips.paint(&state);
                        }
                        state.is_animating()
                    })
                };
                *frames.borrow_mut() = Some(frame_loop);

                let subscriptions = subscribe(&container, &strips, &state, &frames);
                remeasure(&state, &frames, &strips);

                move || {
                    state.borrow_mut().detach();
                    subscriptions.disconnect();
                    frames.borrow_mut().take();
                }
            },
            (props.items.clone(), props.speed, props.gap),
        );
    }

    let strip_style = if props.items.is_empty() {
        "display: inline-flex; white-space: nowrap;".to_string()
    } else {
        format!(
            "display: inline-flex; white-space: nowrap; gap: {gap}px; padding-right: {gap}px;",
            gap = props.gap
        )
    };
    let render_items = || {
        props
            .items
            .iter()
            .map(|item| html! { <span class="marquee-item">{ item.to_string() }</span> })
            .collect::<Html>()
    };

    html! {
        <div ref={container} class={classes!("marquee", props.class.clone())}
            style="position: relative; overflow: hidden; width: 100%;">
            <div ref={strips.lead.clone()} class="marquee-strip"
                style={format!("{} will-change: transform;", strip_style)}>
                { render_items() }
            </div>
            <div ref={strips.trail.clone()} class="marquee-strip" aria-hidden="true"
                style={format!("{} position: absolute; top: 0; left: 0; transform: translate3d(100%, 0, 0); will-change: transform;", strip_style)}>
                { render_items() }
            </div>
        </div>
    }
}
