use leptos::prelude::*;

use super::icons::SocialIcon;
use crate::content::{HoveredProject, Project, Social};

#[component]
pub fn ProjectCard(project: Project, hovered: RwSignal<HoveredProject>) -> impl IntoView {
    let Project {
        slug,
        title,
        description,
        image,
        image_alt,
        url,
    } = project;
    let is_hovered = move || hovered.with(|h| h.is(slug));

    view! {
        <a
            href=url
            target="_blank"
            rel="noopener noreferrer"
            on:mouseenter=move |_| hovered.update(|h| h.enter(slug))
            on:mouseleave=move |_| hovered.update(HoveredProject::leave)
            class=move || {
                let base = "group relative bg-black/50 backdrop-blur-md rounded-2xl border overflow-hidden transition-all duration-300 hover:transform hover:scale-105";
                if is_hovered() {
                    format!("{base} border-white/40 shadow-glow")
                } else {
                    format!("{base} border-white/20")
                }
            }
        >
            <div class="relative h-48 sm:h-56 md:h-64 w-full overflow-hidden">
                <img
                    src=image
                    alt=image_alt
                    loading="lazy"
                    class="absolute inset-0 w-full h-full object-cover transition-transform duration-500 group-hover:scale-110"
                />
                <div class="absolute inset-0 bg-gradient-to-t from-black via-black/50 to-transparent opacity-60 group-hover:opacity-80 transition-opacity duration-300" />
            </div>
            <div class="p-4 sm:p-5 md:p-6">
                <h3 class="text-xl sm:text-2xl font-bold mb-2 md:mb-3 text-white font-poppins group-hover:text-gray-100 transition-colors">
                    {title}
                </h3>
                <p class="text-sm sm:text-base text-gray-300 font-open-sans leading-relaxed mb-3 md:mb-4">
                    {description}
                </p>
                <div class="inline-flex items-center text-sm sm:text-base text-white font-semibold group-hover:translate-x-2 transition-transform duration-300">
                    "Visitar Site →"
                </div>
            </div>
        </a>
    }
}

#[component]
pub fn SocialCard(social: Social) -> impl IntoView {
    view! {
        <a
            href=social.url
            target="_blank"
            rel="noopener noreferrer"
            class="group relative bg-black/50 backdrop-blur-md rounded-2xl border border-white/20 p-6 md:p-8 hover:border-white/40 transition-all duration-300 hover:transform hover:scale-105 hover:shadow-glow"
        >
            <div class="flex flex-col sm:flex-row items-start space-y-4 sm:space-y-0 sm:space-x-4">
                <div class="flex-shrink-0">
                    <SocialIcon kind=social.kind />
                </div>
                <div class="flex-1">
                    <h3 class="text-xl sm:text-2xl font-bold mb-2 md:mb-3 text-white font-poppins group-hover:text-gray-100 transition-colors">
                        {social.title}
                    </h3>
                    <p class="text-sm sm:text-base text-gray-300 font-open-sans leading-relaxed mb-3 md:mb-4">
                        {social.description}
                    </p>
                    <div class="inline-flex items-center text-sm sm:text-base text-white font-semibold group-hover:translate-x-2 transition-transform duration-300">
                        "Conectar →"
                    </div>
                </div>
            </div>
        </a>
    }
}
