use yew::prelude::*;

/// Shared open/close switch for the single quiz modal on the page.
#[derive(Clone, PartialEq)]
pub struct ModalController {
    open: UseStateHandle<bool>,
}

impl ModalController {
    pub fn new(open: UseStateHandle<bool>) -> Self {
        Self { open }
    }

    // Setting true while already open is a no-op render-wise, so there is never a second modal.
    pub fn open(&self) {
        self.open.set(true);
    }

    pub fn close(&self) {
        self.open.set(false);
    }

    pub fn is_open(&self) -> bool {
        *self.open
    }

    pub fn close_callback<E: 'static>(&self) -> Callback<E> {
        let controller = self.clone();
        Callback::from(move |_: E| controller.close())
    }
}

#[hook]
pub fn use_modal_controller() -> ModalController {
    let fallback = use_state(|| false);
    use_context::<ModalController>().unwrap_or_else(|| ModalController::new(fallback))
}
