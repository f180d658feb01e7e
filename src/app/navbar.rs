use leptos::prelude::*;

use super::icons::{MenuIcon, PaperPlaneIcon};
use crate::nav::Section;

#[component]
pub fn NavBar(
    #[prop(into)] active: Signal<Section>,
    menu_open: RwSignal<bool>,
    on_navigate: Callback<Section>,
    on_contact: Callback<()>,
) -> impl IntoView {
    let desktop_link_class = move |section: Section| {
        if active.get() == section {
            "px-4 lg:px-5 py-2 rounded-lg transition-all uppercase tracking-wider text-sm lg:text-base bg-white/10 transform -translate-y-0.5"
        } else {
            "px-4 lg:px-5 py-2 rounded-lg transition-all uppercase tracking-wider text-sm lg:text-base hover:bg-white/5"
        }
    };
    let mobile_link_class = move |section: Section| {
        if active.get() == section {
            "px-4 py-3 rounded-lg transition-all uppercase tracking-wider text-sm bg-white/10"
        } else {
            "px-4 py-3 rounded-lg transition-all uppercase tracking-wider text-sm hover:bg-white/5"
        }
    };

    view! {
        <nav class="fixed top-0 left-0 w-full bg-black/50 z-50 backdrop-blur-sm shadow-md">
            <div class="flex justify-between items-center p-4 md:p-5">
                <div class="flex items-center">
                    <PaperPlaneIcon size=32 class="md:w-10 md:h-10 text-white" />
                </div>

                <div class="hidden md:flex gap-6 lg:gap-10">
                    {Section::LINKED
                        .into_iter()
                        .map(|section| {
                            view! {
                                <a
                                    href=section.href()
                                    class=move || desktop_link_class(section)
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        on_navigate.run(section);
                                    }
                                >
                                    {section.label()}
                                </a>
                            }
                        })
                        .collect_view()}
                    <button
                        on:click=move |_| on_contact.run(())
                        class="px-4 lg:px-5 py-2 rounded-lg transition-all duration-300 uppercase tracking-wider text-sm lg:text-base bg-white text-black hover:bg-gray-200 hover:transform hover:-translate-y-0.5 hover:scale-105 active:scale-95"
                    >
                        "Contato"
                    </button>
                </div>

                <button
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                    class="md:hidden p-2 text-white focus:outline-none"
                    aria-label="Menu"
                    aria-expanded=move || menu_open.get().to_string()
                >
                    <MenuIcon open=menu_open />
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <div class="md:hidden bg-black/95 backdrop-blur-md border-t border-white/10">
                    <div class="flex flex-col p-4 space-y-2">
                        {Section::LINKED
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <a
                                        href=section.href()
                                        class=move || mobile_link_class(section)
                                        on:click=move |ev| {
                                            ev.prevent_default();
                                            on_navigate.run(section);
                                        }
                                    >
                                        {section.label()}
                                    </a>
                                }
                            })
                            .collect_view()}
                        <button
                            on:click=move |_| on_contact.run(())
                            class="px-4 py-3 rounded-lg transition-all duration-300 uppercase tracking-wider text-sm bg-white text-black hover:bg-gray-200 text-left"
                        >
                            "Contato"
                        </button>
                    </div>
                </div>
            </Show>
        </nav>
    }
}
