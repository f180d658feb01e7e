use leptos::{either::Either, prelude::*};
use leptos_use::{use_window_scroll, use_window_size, UseWindowSizeReturn};

use super::cards::{ProjectCard, SocialCard};
use super::contact_modal::ContactModal;
use super::galaxy::GalaxyCanvas;
use super::icons::{EmailIcon, PaperPlaneIcon, WhatsAppIcon};
use super::navbar::NavBar;
use super::spotlight::MouseSpotlight;
use super::viewport::BrowserViewport;
use crate::content::{
    whatsapp_plain_link, HoveredProject, Span, BIO, BIO_CLOSING, BUILD_YEAR, EMAIL, FULL_NAME,
    NAME, NICKNAME, PROJECTS, SKILLS, SOCIALS, WHATSAPP_DISPLAY,
};
use crate::nav::{scroll_to_section, Section};

#[component]
pub fn HomePage() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let UseWindowSizeReturn { height, .. } = use_window_size();
    let active_section = Memo::new(move |_| Section::from_scroll(scroll_y.get(), height.get()));

    let menu_open = RwSignal::new(false);
    let contact_open = RwSignal::new(false);
    let hovered = RwSignal::new(HoveredProject::default());

    let on_navigate = Callback::new(move |section: Section| {
        scroll_to_section(&BrowserViewport, section, || menu_open.set(false));
    });
    let on_contact = Callback::new(move |_: ()| {
        contact_open.set(true);
        menu_open.set(false);
    });

    view! {
        <main class="min-h-screen bg-black text-white">
            <MouseSpotlight />
            <ContactModal is_open=contact_open on_close=Callback::new(move |_: ()| contact_open.set(false)) />
            <NavBar active=active_section menu_open on_navigate on_contact />
            <Hero on_navigate />
            <About />
            <Projects hovered />
            <Footer />
        </main>
    }
}

#[component]
fn Hero(on_navigate: Callback<Section>) -> impl IntoView {
    view! {
        <section id=Section::Home.id() class="relative h-screen flex items-center justify-center px-4">
            <GalaxyCanvas id="homeCanvas" with_constellations=true />
            <div class="relative z-10 text-center flex flex-col items-center">
                <div class="mb-6 animate-pulse-slow">
                    <PaperPlaneIcon
                        size=80
                        class="sm:w-24 sm:h-24 md:w-28 md:h-28 lg:w-32 lg:h-32 text-white"
                    />
                </div>
                <h1 class="text-4xl sm:text-5xl md:text-6xl lg:text-7xl xl:text-8xl font-medium font-poppins animate-title px-4">
                    {NAME}
                </h1>
                <p class="text-2xl sm:text-3xl md:text-4xl lg:text-5xl text-gray-300 font-light font-poppins mt-2 px-4">
                    {NICKNAME}
                </p>
            </div>
            <button
                on:click=move |_| on_navigate.run(Section::About)
                class="absolute bottom-10 left-1/2 transform -translate-x-1/2 z-10 w-8 h-8 md:w-10 md:h-10 border-r-2 border-b-2 border-white rotate-45 animate-bounce opacity-80 hover:opacity-100 transition-opacity"
                aria-label="Rolar para baixo"
            />
        </section>
    }
}

#[component]
fn About() -> impl IntoView {
    let paragraphs = BIO
        .iter()
        .map(|spans| {
            let spans = spans
                .iter()
                .map(|span| match *span {
                    Span::Plain(text) => Either::Left(text),
                    Span::Strong(text) => {
                        Either::Right(view! { <span class="text-white font-semibold">{text}</span> })
                    }
                })
                .collect_view();
            view! { <p>{spans}</p> }
        })
        .collect_view();

    view! {
        <section
            id=Section::About.id()
            class="relative min-h-screen flex items-center justify-center p-4 sm:p-6 md:p-8 py-20"
        >
            <GalaxyCanvas id="aboutCanvas" with_constellations=true />
            <div class="relative z-10 max-w-4xl w-full">
                <h2 class="text-3xl sm:text-4xl md:text-5xl lg:text-6xl font-bold mb-8 md:mb-12 text-white font-poppins animate-title text-center">
                    "Sobre Mim"
                </h2>

                <div class="flex flex-col items-center space-y-6 md:space-y-8">
                    <div class="relative">
                        <div class="absolute inset-0 bg-gradient-to-r from-white/20 to-gray-300/20 rounded-full blur-2xl"></div>
                        <div class="relative z-10 w-48 h-48 sm:w-56 sm:h-56 md:w-64 md:h-64 lg:w-72 lg:h-72 rounded-full overflow-hidden border-4 border-white/30 shadow-glow">
                            <img
                                src="/images/tayara-photo.jpeg"
                                alt=format!("{FULL_NAME} - Tayfly")
                                class="absolute inset-0 w-full h-full object-cover"
                            />
                        </div>
                    </div>

                    <div class="w-full space-y-4 md:space-y-6">
                        <div class="bg-black/50 backdrop-blur-md p-6 md:p-8 rounded-2xl border border-white/20 shadow-glow hover:border-white/30 transition-all duration-300">
                            <div class="space-y-4 text-gray-100 font-open-sans text-base sm:text-lg leading-relaxed">
                                {paragraphs}
                                <p class="text-white font-semibold italic">{BIO_CLOSING}</p>
                            </div>
                        </div>

                        <div class="bg-black/50 backdrop-blur-md p-6 md:p-8 rounded-2xl border border-white/20 shadow-glow hover:border-white/30 transition-all duration-300">
                            <h3 class="text-xl sm:text-2xl font-bold mb-4 text-white font-poppins">
                                "Habilidades Técnicas"
                            </h3>
                            <div class="flex flex-wrap gap-2 md:gap-3">
                                {SKILLS
                                    .iter()
                                    .map(|skill| {
                                        view! {
                                            <span class="px-3 py-1.5 md:px-4 md:py-2 bg-white/10 border border-white/20 rounded-full text-xs sm:text-sm text-white font-open-sans hover:bg-white/20 transition-colors">
                                                {*skill}
                                            </span>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Projects(hovered: RwSignal<HoveredProject>) -> impl IntoView {
    view! {
        <section id=Section::Projects.id() class="relative min-h-screen py-16 md:py-20">
            <GalaxyCanvas id="projectsCanvas" />

            <div class="relative z-10 max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <h2 class="text-3xl sm:text-4xl md:text-5xl lg:text-6xl font-bold mb-12 md:mb-16 text-white font-poppins animate-title text-center">
                    "Projetos"
                </h2>

                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6 md:gap-8 mb-12 md:mb-16">
                    {PROJECTS
                        .iter()
                        .map(|project| view! { <ProjectCard project=*project hovered /> })
                        .collect_view()}
                </div>

                <div class="mt-16 md:mt-20">
                    <h2 class="text-3xl sm:text-4xl md:text-5xl lg:text-6xl font-bold mb-12 md:mb-16 text-white font-poppins animate-title text-center">
                        "Conecte-se Comigo"
                    </h2>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6 md:gap-8 max-w-4xl mx-auto">
                        {SOCIALS
                            .iter()
                            .map(|social| view! { <SocialCard social=*social /> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="relative bg-black/80 py-6 md:py-8 px-4 text-center">
            <div class="container mx-auto flex flex-col items-center">
                <PaperPlaneIcon size=40 class="md:w-12 md:h-12 mb-4 text-white" />
                <p class="text-white/70 text-xs sm:text-sm px-4">
                    {format!(
                        "© {} {NAME} {NICKNAME}. Todos os direitos reservados.",
                        BUILD_YEAR,
                    )}
                </p>
                <div class="mt-4 flex flex-col sm:flex-row items-center gap-3 md:gap-4 text-white/70 text-xs sm:text-sm">
                    <a
                        href=format!("mailto:{EMAIL}")
                        class="hover:text-white transition-colors flex items-center gap-2"
                    >
                        <EmailIcon class="w-4 h-4 md:w-5 md:h-5" />
                        <span class="break-all">{EMAIL}</span>
                    </a>
                    <span class="hidden sm:inline">"•"</span>
                    <a
                        href=whatsapp_plain_link()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="hover:text-white transition-colors flex items-center gap-2"
                    >
                        <WhatsAppIcon class="w-4 h-4 md:w-5 md:h-5" />
                        {WHATSAPP_DISPLAY}
                    </a>
                </div>
                <div class="mt-4 flex flex-wrap justify-center gap-4 text-xs sm:text-sm">
                    {SOCIALS
                        .iter()
                        .map(|social| {
                            view! {
                                <a
                                    href=social.url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="text-white/70 hover:text-white transition-colors"
                                >
                                    {social.title}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </footer>
    }
}
