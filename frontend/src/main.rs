use yew::prelude::*;
use log::{error, info};

mod config;
mod content;
mod cycle;
mod hooks;
mod platform;
mod reveal;
#[cfg(test)]
mod testing;
mod components {
    pub mod animated_section;
    pub mod icons;
}
mod pages {
    pub mod tribute;
}

use content::SiteContent;
use hooks::use_document_setup;
use pages::tribute::Tribute;


#[function_component]
fn App() -> Html {
    use_document_setup(&config::FONT_STYLESHEETS);
    let content = use_memo(|_| SiteContent::load(), ());

    match &*content {
        Ok(content) => {
            info!("Rendering tribute page");
            html! { <Tribute content={content.clone()} /> }
        }
        Err(err) => {
            error!("{}", err);
            html! {}
        }
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
