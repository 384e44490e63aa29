use crate::dom;
use folio_core::{FolioConfig, Parallax};
use gloo::events::EventListener;
use web_sys::{Document, HtmlElement, Window};

/// Hero translation driven by scroll.
pub(crate) struct HeroParallax {
    _listener: EventListener,
}

impl HeroParallax {
    pub(crate) fn attach(
        window: &Window,
        document: &Document,
        config: &FolioConfig,
    ) -> Option<Self> {
        let Some(hero) = dom::query_one::<HtmlElement>(document, &config.selectors.hero) else {
            log::debug!("Parallax: no hero element, feature disabled");
            return None;
        };
        let parallax = Parallax::new(&config.parallax);

        let listener = {
            let scroll_source = window.clone();
            EventListener::new(window, "scroll", move |_| {
                let transform = parallax.transform(dom::scroll_y(&scroll_source));
                dom::set_styles(&hero, &[("transform", transform)]);
            })
        };

        Some(Self {
            _listener: listener,
        })
    }
}
