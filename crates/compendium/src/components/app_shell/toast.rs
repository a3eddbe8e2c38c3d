use std::time::Duration;

use compendium_core::config::ACKNOWLEDGEMENT_MS;
use compendium_core::platform::sleep;
use dioxus::prelude::*;

use crate::components::use_toast;

/// The acknowledgement currently on screen
#[derive(Clone, Debug, PartialEq)]
pub struct Acknowledgement {
    id: u64,
    pub message: String,
}

/// Transient acknowledgement toast.
///
/// Each acknowledgement gets its own id so that an older dismissal timer
/// never hides a newer message.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastState {
    next_id: u64,
    current: Option<Acknowledgement>,
}

impl ToastState {
    fn show(&mut self, message: String) -> u64 {
        self.next_id += 1;
        self.current = Some(Acknowledgement {
            id: self.next_id,
            message,
        });
        self.next_id
    }

    fn dismiss(&mut self, id: u64) {
        if self.current.as_ref().is_some_and(|ack| ack.id == id) {
            self.current = None;
        }
    }

    pub fn current(&self) -> Option<&Acknowledgement> {
        self.current.as_ref()
    }
}

/// Shows `message` and hides it again after [`ACKNOWLEDGEMENT_MS`].
pub fn acknowledge(mut toast: Signal<ToastState>, message: String) {
    let id = toast.write().show(message);
    spawn(async move {
        sleep(Duration::from_millis(ACKNOWLEDGEMENT_MS)).await;
        toast.write().dismiss(id);
    });
}

#[component]
pub fn Toast() -> Element {
    let mut toast = use_toast();
    let current = toast.read().current().cloned();

    rsx! {
        if let Some(ack) = current {
            div {
                class: "cp-toast",
                role: "status",
                onclick: move |_| toast.write().dismiss(ack.id),
                "{ack.message}"
            }
        }
    }
}
