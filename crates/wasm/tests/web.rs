//! WebAssembly integration tests.
//!
//! These tests run in a headless browser using wasm-bindgen-test.
//!
//! Run with: wasm-pack test --headless --chrome crates/wasm

use folio_wasm::{Folio, Page};
use gloo_timers::future::TimeoutFuture;
use js_sys::{Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlElement, Navigator};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window()
        .and_then(|w| w.document())
        .expect("test page has a document")
}

/// Markup inserted at the top of the body, removed on drop.
struct Fixture {
    root: Element,
}

impl Fixture {
    fn new(html: &str) -> Self {
        let document = document();
        let root = document.create_element("div").expect("create fixture");
        root.set_inner_html(html);
        let body = document.body().expect("test page has a body");
        body.prepend_with_node_1(&root).expect("insert fixture");
        Self { root }
    }

    fn find(&self, selector: &str) -> HtmlElement {
        self.root
            .query_selector(selector)
            .expect("valid selector")
            .expect("fixture element")
            .dyn_into()
            .expect("html element")
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        self.root.remove();
    }
}

fn mount() -> Page {
    Folio::new().mount().expect("page mounts")
}

fn mount_with(config: &str) -> Page {
    Folio::new()
        .with_config_json(config)
        .expect("valid config")
        .mount()
        .expect("page mounts")
}

/// `navigator.clipboard` replaced by an object whose `writeText` resolves
/// and remembers the text. The real clipboard is restored on drop.
struct ClipboardStub {
    navigator: Navigator,
    clipboard: Object,
}

impl ClipboardStub {
    fn install() -> Self {
        let navigator = web_sys::window().unwrap().navigator();
        let clipboard = Object::new();
        let write_text =
            Function::new_with_args("text", "this.lastText = text; return Promise.resolve();");
        Reflect::set(&clipboard, &"writeText".into(), &write_text).unwrap();

        let descriptor = Object::new();
        Reflect::set(&descriptor, &"value".into(), &clipboard).unwrap();
        Reflect::set(&descriptor, &"configurable".into(), &JsValue::TRUE).unwrap();
        Object::define_property(&navigator, &"clipboard".into(), &descriptor);

        Self {
            navigator,
            clipboard,
        }
    }

    fn last_text(&self) -> Option<String> {
        Reflect::get(&self.clipboard, &"lastText".into())
            .ok()
            .and_then(|text| text.as_string())
    }
}

impl Drop for ClipboardStub {
    fn drop(&mut self) {
        Reflect::delete_property(&self.navigator, &"clipboard".into()).ok();
    }
}

const TOAST_MESSAGE: &str = "Copied in a browser test";

/// Toast nodes currently attached to the body.
fn toasts() -> Vec<HtmlElement> {
    let nodes = document().query_selector_all("body > div").unwrap();
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter(|node| node.text_content().as_deref() == Some(TOAST_MESSAGE))
        .filter_map(|node| node.dyn_into().ok())
        .collect()
}

#[wasm_bindgen_test]
fn test_init() {
    let version = folio_wasm::get_version();
    assert!(!version.is_empty());
}

#[wasm_bindgen_test]
fn test_default_config_is_valid() {
    let folio = Folio::new();
    assert!(folio.config().validate().is_ok());
}

#[wasm_bindgen_test]
fn test_invalid_config_object_is_rejected() {
    let config = js_sys::JSON::parse(r#"{ "stats": { "tickMs": 0 } }"#).unwrap();
    assert!(Folio::new().with_config(config).is_err());

    let config = js_sys::JSON::parse(r#"{ "parallax": { "maxOffset": 50 } }"#).unwrap();
    assert!(Folio::new().with_config(config).is_ok());
}

#[wasm_bindgen_test]
fn test_invalid_config_json_is_rejected() {
    assert!(Folio::new().with_config_json("{ nope").is_err());
}

#[wasm_bindgen_test]
fn test_mount_without_markup_disables_features() {
    let page = mount();
    assert!(page.is_mounted());
    assert!(!page.is_pending());
    assert!(!page.has_parallax());
    assert!(!page.toast_visible());
    page.unmount();
    assert!(!page.is_mounted());
}

#[wasm_bindgen_test]
fn test_styles_injected_once_and_removed() {
    let document = document();
    let page = mount();
    assert!(document.get_element_by_id("folio-active-link-style").is_some());
    assert!(document.get_element_by_id("folio-toast-style").is_some());

    let second = mount();
    let count = document
        .query_selector_all("#folio-toast-style")
        .unwrap()
        .length();
    assert_eq!(count, 1);

    second.unmount();
    assert!(document.get_element_by_id("folio-toast-style").is_some());
    page.unmount();
    assert!(document.get_element_by_id("folio-toast-style").is_none());
    assert!(document.get_element_by_id("folio-active-link-style").is_none());
}

#[wasm_bindgen_test]
fn test_reveal_targets_start_hidden() {
    let fixture = Fixture::new(
        r#"<div class="project-card" style="height: 40px">card</div>
           <div class="skill-category" style="height: 40px">skills</div>"#,
    );
    let page = mount();

    let card = fixture.find(".project-card");
    let style = card.style();
    assert_eq!(style.get_property_value("opacity").unwrap(), "0");
    assert_eq!(
        style.get_property_value("transform").unwrap(),
        "translateY(20px)"
    );
    assert!(
        style
            .get_property_value("transition")
            .unwrap()
            .contains("0.6s")
    );
    page.unmount();
}

#[wasm_bindgen_test]
async fn test_visible_reveal_target_is_shown() {
    let fixture = Fixture::new(r#"<div class="timeline-item" style="height: 60px">item</div>"#);
    let page = mount();

    TimeoutFuture::new(200).await;
    let item = fixture.find(".timeline-item");
    assert_eq!(item.style().get_property_value("opacity").unwrap(), "1");
    assert!(page.revealed_count() >= 1);
    page.unmount();
}

#[wasm_bindgen_test]
fn test_first_section_active_at_top() {
    let fixture = Fixture::new(
        r##"<nav><a class="nav-link" href="#intro">Intro</a><a class="nav-link" href="#work">Work</a></nav>
            <div class="section" id="intro" style="height: 50px"></div>
            <div class="section" id="work" style="height: 50px"></div>"##,
    );
    let window = web_sys::window().unwrap();
    window.scroll_to_with_x_and_y(0.0, 0.0);

    let page = mount();
    assert_eq!(page.active_section().as_deref(), Some("intro"));

    let intro_link = fixture.find(r##"a[href="#intro"]"##);
    let work_link = fixture.find(r##"a[href="#work"]"##);
    assert!(intro_link.class_list().contains("active"));
    assert!(!work_link.class_list().contains("active"));
    page.unmount();
}

#[wasm_bindgen_test]
fn test_parallax_follows_scroll_event() {
    let fixture = Fixture::new(r#"<div class="hero" style="height: 40px">hero</div>"#);
    let window = web_sys::window().unwrap();
    window.scroll_to_with_x_and_y(0.0, 0.0);

    let page = mount();
    assert!(page.has_parallax());
    let event = web_sys::Event::new("scroll").unwrap();
    window.dispatch_event(&event).unwrap();

    let hero = fixture.find(".hero");
    assert_eq!(
        hero.style().get_property_value("transform").unwrap(),
        "translateY(0px)"
    );

    page.unmount();
    hero.style().remove_property("transform").unwrap();
    window.dispatch_event(&event).unwrap();
    assert_eq!(hero.style().get_property_value("transform").unwrap(), "");
}

#[wasm_bindgen_test]
fn test_anchor_click_without_target_keeps_location() {
    let fixture = Fixture::new(r##"<a class="jump" href="#does-not-exist">jump</a>"##);
    let window = web_sys::window().unwrap();
    let hash_before = window.location().hash().unwrap();

    let page = mount();
    assert!(page.has_smooth_scroll());
    fixture.find(".jump").click();
    assert_eq!(window.location().hash().unwrap(), hash_before);
    page.unmount();
}

#[wasm_bindgen_test]
async fn test_stats_count_up_to_exact_target() {
    let fixture = Fixture::new(
        r#"<div class="stats" style="height: 60px">
             <span class="stat-number">120+</span>
             <span class="stat-number">24/7</span>
           </div>"#,
    );
    let config = js_sys::JSON::parse(r#"{ "stats": { "durationMs": 160, "tickMs": 16 } }"#)
        .unwrap();
    let page = Folio::new()
        .with_config(config)
        .unwrap()
        .mount()
        .unwrap();

    TimeoutFuture::new(800).await;
    assert!(page.stats_started());
    assert_eq!(page.running_counters(), 0);

    let document = document();
    let numbers = document.query_selector_all(".stat-number").unwrap();
    let texts: Vec<String> = (0..numbers.length())
        .filter_map(|i| numbers.get(i))
        .filter_map(|n| n.text_content())
        .collect();
    assert_eq!(texts, vec!["120+".to_string(), "24/7".to_string()]);

    page.unmount();
    drop(fixture);
}

#[wasm_bindgen_test]
async fn test_unmount_cancels_pending_mail_navigation() {
    let fixture = Fixture::new(r#"<a class="mail" href="mailto:jane@example.com">mail</a>"#);
    let window = web_sys::window().unwrap();
    let href_before = window.location().href().unwrap();

    let page = mount();
    fixture.find(".mail").click();
    page.unmount();

    TimeoutFuture::new(700).await;
    assert_eq!(window.location().href().unwrap(), href_before);
    assert!(!page.toast_visible());
}

#[wasm_bindgen_test]
fn test_feature_without_observer_support_leaves_content_visible() {
    let fixture = Fixture::new(
        r#"<div class="project-card" style="height: 40px">card</div>
           <div class="stats"><span class="stat-number">5+</span></div>
           <div class="hero" style="height: 40px">hero</div>"#,
    );
    let window = web_sys::window().unwrap();
    let key = JsValue::from_str("IntersectionObserver");
    let original = Reflect::get(&window, &key).unwrap();
    Reflect::set(&window, &key, &JsValue::UNDEFINED).unwrap();

    let mounted = Folio::new().mount();
    Reflect::set(&window, &key, &original).unwrap();

    let page = mounted.expect("page mounts without IntersectionObserver");
    assert!(page.is_mounted());
    assert!(page.has_parallax());
    assert!(!page.stats_started());
    assert_eq!(page.revealed_count(), 0);

    let card = fixture.find(".project-card");
    assert_eq!(card.style().get_property_value("opacity").unwrap(), "");
    page.unmount();
}

#[wasm_bindgen_test]
async fn test_toast_enters_exits_and_is_removed() {
    let clipboard = ClipboardStub::install();
    let fixture = Fixture::new(r#"<a class="mail" href="mailto:jane@example.com">mail</a>"#);
    let page = mount_with(&format!(
        r#"{{
            "email": {{ "navigationDelayMs": 60000 }},
            "toast": {{ "message": "{TOAST_MESSAGE}", "displayMs": 150, "exitMs": 150 }}
        }}"#
    ));

    fixture.find(".mail").click();
    TimeoutFuture::new(50).await;
    assert_eq!(clipboard.last_text().as_deref(), Some("jane@example.com"));
    let shown = toasts();
    assert_eq!(shown.len(), 1);
    assert!(page.toast_visible());
    let style = shown[0].style();
    assert_eq!(style.get_property_value("position").unwrap(), "fixed");
    assert_eq!(style.get_property_value("animation-name").unwrap(), "slideUp");

    // Exit starts at 150ms, removal at 300ms.
    TimeoutFuture::new(170).await;
    let exiting = toasts();
    assert_eq!(exiting.len(), 1);
    assert_eq!(
        exiting[0].style().get_property_value("animation-name").unwrap(),
        "slideDown"
    );

    TimeoutFuture::new(230).await;
    assert!(toasts().is_empty());
    assert!(!page.toast_visible());
    page.unmount();
}

#[wasm_bindgen_test]
async fn test_second_click_replaces_toast() {
    let _clipboard = ClipboardStub::install();
    let fixture = Fixture::new(r#"<a class="mail" href="mailto:jane@example.com">mail</a>"#);
    let page = mount_with(&format!(
        r#"{{
            "email": {{ "navigationDelayMs": 60000 }},
            "toast": {{ "message": "{TOAST_MESSAGE}", "displayMs": 5000 }}
        }}"#
    ));

    fixture.find(".mail").click();
    TimeoutFuture::new(30).await;
    let first = toasts();
    assert_eq!(first.len(), 1);

    fixture.find(".mail").click();
    TimeoutFuture::new(30).await;
    let second = toasts();
    assert_eq!(second.len(), 1);
    assert!(!first[0].is_connected());
    assert!(second[0].is_connected());

    page.unmount();
    assert!(toasts().is_empty());
}

#[wasm_bindgen_test]
async fn test_mail_navigation_fires_after_configured_delay() {
    let _clipboard = ClipboardStub::install();
    let fixture = Fixture::new(r##"<a class="mail-nav" href="#folio-mail-nav">mail</a>"##);
    let window = web_sys::window().unwrap();
    let page = mount_with(
        r#"{
            "selectors": { "emailLink": ".mail-nav" },
            "email": { "navigationDelayMs": 250 }
        }"#,
    );

    fixture.find(".mail-nav").click();
    TimeoutFuture::new(100).await;
    assert_ne!(window.location().hash().unwrap(), "#folio-mail-nav");

    TimeoutFuture::new(300).await;
    assert_eq!(window.location().hash().unwrap(), "#folio-mail-nav");

    page.unmount();
    window.location().set_hash("").unwrap();
}

#[wasm_bindgen_test]
async fn test_anchor_click_scrolls_below_nav_bar() {
    let fixture = Fixture::new(
        r##"<div class="nav-bar" style="height: 50px">nav</div>
            <a class="jump" href="#scroll-target">jump</a>
            <div style="height: 1500px"></div>
            <div id="scroll-target" style="height: 40px">target</div>
            <div style="height: 3000px"></div>"##,
    );
    let window = web_sys::window().unwrap();
    window.scroll_to_with_x_and_y(0.0, 0.0);

    let target = fixture.find("#scroll-target");
    let nav = fixture.find(".nav-bar");
    let expected = target.get_bounding_client_rect().top() + window.scroll_y().unwrap()
        - f64::from(nav.offset_height())
        - 20.0;

    let page = mount();
    fixture.find(".jump").click();
    TimeoutFuture::new(1500).await;

    let scrolled = window.scroll_y().unwrap();
    assert!(
        (scrolled - expected).abs() <= 1.0,
        "scrolled to {scrolled}, expected {expected}"
    );

    page.unmount();
    window.scroll_to_with_x_and_y(0.0, 0.0);
}
