use leptos::{ev, html, prelude::*, reactive::owner::LocalStorage};
use wasm_bindgen::JsCast;
use web_sys::Node;

use super::icons::{ChevronIcon, CloseIcon, EmailIcon, WhatsAppIcon};
use crate::contact::{Dismissal, ModalHost, ModalLifecycle, ModalVisibility};
use crate::content::{email_link, whatsapp_link, EMAIL, WHATSAPP_DISPLAY};

/// Listeners and scroll lock on the live document.
struct DocumentHost {
    modal_ref: NodeRef<html::Div>,
    on_dismiss: Callback<Dismissal>,
}

impl ModalHost for DocumentHost {
    type Listeners = [WindowListenerHandle; 2];

    fn attach_listeners(&mut self) -> Self::Listeners {
        let modal_ref = self.modal_ref;
        let on_dismiss = self.on_dismiss;
        let pointer = window_event_listener(ev::mousedown, move |ev| {
            let Some(root) = modal_ref.get_untracked() else {
                return;
            };
            let target = ev.target();
            let inside = root.contains(target.as_ref().and_then(|t| t.dyn_ref::<Node>()));
            if let Some(reason) = Dismissal::from_pointer_down(inside) {
                on_dismiss.run(reason);
            }
        });
        let key = window_event_listener(ev::keydown, move |ev| {
            if let Some(reason) = Dismissal::from_key(&ev.key()) {
                on_dismiss.run(reason);
            }
        });
        [pointer, key]
    }

    fn detach_listeners(&mut self, listeners: Self::Listeners) {
        for handle in listeners {
            handle.remove();
        }
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        let Some(body) = document().body() else {
            return;
        };
        let overflow = if locked { "hidden" } else { "auto" };
        if body.style().set_property("overflow", overflow).is_err() {
            log::warn!("couldn't set body overflow to {overflow}");
        }
    }
}

type Lifecycle = StoredValue<Option<ModalLifecycle<DocumentHost>>, LocalStorage>;

/// Runs `f` on the lifecycle unless the modal has been torn down.
fn with_lifecycle<T>(
    lifecycle: Lifecycle,
    f: impl FnOnce(&mut ModalLifecycle<DocumentHost>) -> T,
) -> Option<T> {
    lifecycle.try_update_value(|l| l.as_mut().map(f)).flatten()
}

#[component]
pub fn ContactModal(#[prop(into)] is_open: Signal<bool>, on_close: Callback<()>) -> impl IntoView {
    let modal_ref = NodeRef::<html::Div>::new();
    let visibility = RwSignal::new(ModalVisibility::CLOSED);
    let lifecycle: Lifecycle = StoredValue::new_local(None);

    let refresh = move || {
        let current = lifecycle
            .try_with_value(|l| l.as_ref().map(ModalLifecycle::visibility))
            .flatten();
        if let Some(current) = current {
            visibility.try_set(current);
        }
    };
    // Every way out goes through here, so the lifecycle sees the reason.
    let dismiss = Callback::new(move |reason: Dismissal| {
        if with_lifecycle(lifecycle, |l| l.dismiss(reason)).unwrap_or(false) {
            refresh();
            on_close.run(());
        }
    });
    lifecycle.set_value(Some(ModalLifecycle::new(DocumentHost {
        modal_ref,
        on_dismiss: dismiss,
    })));

    Effect::new(move |_| {
        let open = is_open.get();
        with_lifecycle(lifecycle, |l| l.sync(open));
        refresh();
        if open {
            // first frame mounts the dialog, the entrance styles land on the next
            request_animation_frame(move || {
                request_animation_frame(move || {
                    with_lifecycle(lifecycle, ModalLifecycle::start_animation);
                    refresh();
                });
            });
        }
    });
    on_cleanup(move || {
        with_lifecycle(lifecycle, |l| l.dismiss(Dismissal::Parent));
    });

    let animating = move || visibility.get().is_animating;

    view! {
        <Show when=move || visibility.get().is_open>
            <div class=move || {
                if animating() {
                    "fixed inset-0 z-50 flex items-center justify-center p-4 transition-all duration-500 bg-black/70 backdrop-blur-sm"
                } else {
                    "fixed inset-0 z-50 flex items-center justify-center p-4 transition-all duration-500 bg-transparent"
                }
            }>
                <div
                    node_ref=modal_ref
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby="contact-modal-title"
                    class=move || {
                        if animating() {
                            "w-full max-w-md bg-black/95 border border-white/20 rounded-2xl shadow-2xl transform transition-all duration-700 ease-out modal-glow scale-100 opacity-100"
                        } else {
                            "w-full max-w-md bg-black/95 border border-white/20 rounded-2xl shadow-2xl transform transition-all duration-700 ease-out modal-glow scale-95 opacity-0"
                        }
                    }
                >
                    <div class="relative p-6 sm:p-8">
                        <button
                            on:click=move |_| dismiss.run(Dismissal::CloseButton)
                            class="absolute top-3 right-3 sm:top-4 sm:right-4 text-white/70 hover:text-white transition-all duration-300 hover:scale-110 hover:rotate-90"
                            aria-label="Fechar modal de contato"
                        >
                            <CloseIcon class="w-5 h-5 sm:w-6 sm:h-6" />
                        </button>

                        <h2
                            id="contact-modal-title"
                            class="text-2xl sm:text-3xl font-bold text-white font-poppins mb-6 text-center pr-8"
                        >
                            "Entre em Contato"
                        </h2>

                        <div class="space-y-3 sm:space-y-4">
                            <a
                                href=whatsapp_link()
                                target="_blank"
                                rel="noopener noreferrer"
                                class="block bg-gradient-to-r from-green-600 to-green-500 hover:from-green-500 hover:to-green-400 text-white p-4 sm:p-6 rounded-xl transition-all duration-300 hover:scale-105 hover:shadow-glow group"
                            >
                                <div class="flex items-center space-x-3 sm:space-x-4">
                                    <WhatsAppIcon class="w-8 h-8 sm:w-10 sm:h-10 flex-shrink-0" />
                                    <div class="flex-1 min-w-0">
                                        <h3 class="text-lg sm:text-xl font-bold mb-1">"WhatsApp"</h3>
                                        <p class="text-green-100 text-xs sm:text-sm truncate">
                                            {WHATSAPP_DISPLAY}
                                        </p>
                                    </div>
                                    <ChevronIcon />
                                </div>
                            </a>

                            <a
                                href=email_link()
                                target="_blank"
                                rel="noopener noreferrer"
                                class="block bg-gradient-to-r from-blue-600 to-blue-500 hover:from-blue-500 hover:to-blue-400 text-white p-4 sm:p-6 rounded-xl transition-all duration-300 hover:scale-105 hover:shadow-glow group"
                            >
                                <div class="flex items-center space-x-3 sm:space-x-4">
                                    <EmailIcon class="w-8 h-8 sm:w-10 sm:h-10 flex-shrink-0" />
                                    <div class="flex-1 min-w-0">
                                        <h3 class="text-lg sm:text-xl font-bold mb-1">"Email"</h3>
                                        <p class="text-blue-100 text-xs sm:text-sm truncate">{EMAIL}</p>
                                    </div>
                                    <ChevronIcon />
                                </div>
                            </a>
                        </div>

                        <p class="text-gray-400 text-xs sm:text-sm text-center mt-4 sm:mt-6">
                            "Escolha a melhor forma de entrar em contato"
                        </p>
                    </div>
                </div>
            </div>
        </Show>
    }
}
