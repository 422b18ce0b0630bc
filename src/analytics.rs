use std::rc::Rc;

use log::debug;
use serde::Serialize;
use serde_json::{json, Value};
use wasm_bindgen::prelude::*;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    // Facebook pixel loader puts this on window; may be missing or blocked.
    #[wasm_bindgen(js_namespace = window, js_name = fbq, catch)]
    fn fbq(command: &str, event: &str, params: JsValue) -> Result<(), JsValue>;
}

type Sink = Rc<dyn Fn(&str, &Value)>;

/// Tracking handle handed down through context. Defaults to doing nothing.
#[derive(Clone, Default)]
pub struct Analytics {
    sink: Option<Sink>,
}

impl PartialEq for Analytics {
    fn eq(&self, other: &Self) -> bool {
        match (&self.sink, &other.sink) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl Analytics {
    pub fn new(sink: impl Fn(&str, &Value) + 'static) -> Self {
        Self { sink: Some(Rc::new(sink)) }
    }

    pub fn facebook_pixel() -> Self {
        Self::new(|event, params| {
            // Plain JS object rather than a Map, which is what fbq reads.
            let params = match params.serialize(&serde_wasm_bindgen::Serializer::json_compatible()) {
                Ok(params) => params,
                Err(err) => {
                    debug!("analytics params not convertible: {}", err);
                    return;
                }
            };
            if let Err(err) = fbq("track", event, params) {
                debug!("fbq unavailable for {}: {:?}", event, err);
            }
        })
    }

    pub fn track(&self, event: &str, params: Value) {
        if let Some(sink) = &self.sink {
            sink(event, &params);
        }
    }

    /// Call-to-action click, identified by where on the page it happened.
    pub fn lead(&self, place: &str) {
        self.track("Lead", json!({ "place": place }));
    }

    pub fn lead_with(&self, place: &str, key: &str, value: &str) {
        self.track("Lead", json!({ "place": place, key: value }));
    }
}

#[hook]
pub fn use_analytics() -> Analytics {
    use_context::<Analytics>().unwrap_or_default()
}
