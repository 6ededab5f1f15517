use gloo_timers::callback::Timeout;
use log::info;
use yew::prelude::*;

mod config;
mod content;
mod random;
mod timeline;
mod visibility;
mod sections {
    pub mod hero;
    pub mod story;
    pub mod gallery;
    pub mod proposal;
}

use sections::{
    hero::HeroSection,
    story::StorySection,
    gallery::GallerySection,
    proposal::ProposalSection,
};
use timeline::{Reveal, Show};


#[function_component]
fn App() -> Html {
    let shell = use_reducer(Reveal::default);

    // Fade the whole page in shortly after mount
    {
        let shell = shell.dispatcher();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(config::PAGE_FADE_IN_DELAY_MS, move || shell.dispatch(Show));
                move || drop(timeout)
            },
            (),
        );
    }

    html! {
        <main class={classes!("page", shell.is_visible().then(|| "shown"))}>
            <style>
                {r#"
                    * { box-sizing: border-box; }
                    body { margin: 0; }
                    .page {
                        min-height: 100vh;
                        opacity: 0;
                        transition: opacity 1s ease;
                    }
                    .page.shown { opacity: 1; }
                "#}
            </style>
            <HeroSection />
            <StorySection />
            <GallerySection />
            <ProposalSection />
        </main>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if let Err(err) = console_log::init_with_level(config::log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {}", err).into());
    }

    info!("Starting proposal page");
    yew::Renderer::<App>::new().render();
}
