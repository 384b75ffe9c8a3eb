//! Page widgets: nav, typing text, skill bars, reveal, resume viewer,
//! contact form, back-to-top and theme toggle.
//!
//! These live as long as the page, so their closures are leaked with
//! `forget` rather than tracked.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement,
    NodeList, ScrollBehavior, ScrollToOptions, Window,
};

use super::web::{document, report, set_styles, viewport_size, window};
use crate::config::{FxConfig, TypingConfig};
use crate::contact::{ContactSubmission, field_fallback};
use crate::error::Result;
use crate::nav::NavMenu;
use crate::resume::{self, ModalClick};
use crate::sim::{
    SectionBounds, TypingEffect, active_section, back_to_top_visible, link_is_active,
    should_reveal, skill_width, skills_triggered,
};
use crate::storage::{KeyValueStore, LocalStore, MemoryStore};
use crate::theme::{Theme, ThemeController};

/// Sections forced visible at startup in case CSS hid them
const MAIN_SECTIONS: [&str; 6] = ["about", "skills", "projects", "certifications", "resume", "contact"];
const REVEAL_SELECTOR: &str =
    ".about-section, .project-card, .cert-card, .resume-container, .contact-section";

/// Wire every widget present on the page
pub fn setup_all(config: &FxConfig) {
    let (Ok(window), Ok(document)) = (window(), document()) else {
        log::error!("No window/document, page widgets disabled");
        return;
    };

    report("Navbar", setup_navbar(&window, &document));
    report("Typing effect", setup_typing(&document, &config.typing));
    report("Skill bars", setup_skill_bars(&window, &document));
    report("Scroll reveal", setup_scroll_reveal(&window, &document));
    report("Resume viewer", setup_resume_modal(&document, &config.resume.default_path));
    report("Contact form", setup_contact_form(&document));
    report("Back to top", setup_back_to_top(&window, &document));
    report("Theme toggle", setup_theme_toggle(&document));
    reveal_main_sections(&document);
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn set_class(el: &Element, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}

/// Attach a page-lifetime listener
fn listen(
    target: &web_sys::EventTarget,
    event: &str,
    handler: impl FnMut(web_sys::Event) + 'static,
) -> Result<()> {
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

fn setup_navbar(window: &Window, document: &Document) -> Result<()> {
    let hamburger = document.query_selector(".hamburger")?;
    let nav_links = document.query_selector(".nav-links")?;
    let links = elements(&document.query_selector_all(".nav-links a")?);
    let menu = Rc::new(Cell::new(NavMenu::default()));

    let show = {
        let hamburger = hamburger.clone();
        let nav_links = nav_links.clone();
        move |open: bool| {
            for el in hamburger.iter().chain(nav_links.iter()) {
                set_class(el, "active", open);
            }
        }
    };

    if let Some(h) = &hamburger {
        let menu = menu.clone();
        let show = show.clone();
        listen(h, "click", move |_| {
            let mut m = menu.get();
            let open = m.toggle();
            menu.set(m);
            show(open);
        })?;
    }

    for link in &links {
        let menu = menu.clone();
        let show = show.clone();
        listen(link, "click", move |_| {
            let mut m = menu.get();
            m.close();
            menu.set(m);
            show(false);
        })?;
    }

    // Highlight the link for the section in view
    let sections = elements(&document.query_selector_all("section[id]")?);
    let win = window.clone();
    listen(window, "scroll", move |_| {
        let bounds: Vec<SectionBounds> = sections
            .iter()
            .filter_map(|s| {
                let el = s.dyn_ref::<HtmlElement>()?;
                Some(SectionBounds {
                    id: s.id(),
                    offset_top: el.offset_top() as f64,
                    height: el.offset_height() as f64,
                })
            })
            .collect();
        let current = active_section(&bounds, scroll_y(&win));
        for link in &links {
            let href = link.get_attribute("href").unwrap_or_default();
            let on = link_is_active(&href, current);
            set_class(link, "active", on);
        }
    })?;

    Ok(())
}

fn setup_typing(document: &Document, config: &TypingConfig) -> Result<()> {
    let Some(el) = document.get_element_by_id("typed-text") else {
        return Ok(());
    };
    let effect = Rc::new(RefCell::new(TypingEffect::new(config.clone())));
    typing_tick(el, effect);
    Ok(())
}

fn typing_tick(el: Element, effect: Rc<RefCell<TypingEffect>>) {
    let Some(frame) = effect.borrow_mut().tick() else {
        return;
    };
    el.set_text_content(Some(&frame.text));

    let Some(window) = web_sys::window() else {
        return;
    };
    let next = Closure::once_into_js(move || typing_tick(el, effect));
    if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        next.unchecked_ref::<js_sys::Function>(),
        frame.delay_ms as i32,
    ) {
        log::warn!("Typing effect stopped: {:?}", e);
    }
}

/// Fill the bars if the skills section is in view. Returns true once done.
fn fill_skill_bars(window: &Window, document: &Document, bars: &[Element]) -> bool {
    let Ok(Some(section)) = document.query_selector(".skills-section") else {
        return false;
    };
    let (_, vh) = viewport_size(window);
    if !skills_triggered(section.get_bounding_client_rect().top(), vh as f64) {
        return false;
    }
    for bar in bars {
        let width = skill_width(
            bar.get_attribute("data-progress").as_deref(),
            bar.get_attribute("data-value").as_deref(),
        );
        if let Some(bar) = bar.dyn_ref::<HtmlElement>() {
            let _ = set_styles(bar, &[("width", width.as_str())]);
        }
    }
    true
}

fn setup_skill_bars(window: &Window, document: &Document) -> Result<()> {
    let bars = elements(&document.query_selector_all(".skill-progress")?);
    if bars.is_empty() {
        return Ok(());
    }
    if fill_skill_bars(window, document, &bars) {
        return Ok(());
    }

    // One-shot: the listener removes itself after filling the bars
    let handle: Rc<RefCell<Option<js_sys::Function>>> = Rc::new(RefCell::new(None));
    let closure = {
        let handle = handle.clone();
        let document = document.clone();
        Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
            let Some(window) = web_sys::window() else {
                return;
            };
            if fill_skill_bars(&window, &document, &bars) {
                if let Some(f) = handle.borrow_mut().take() {
                    let _ = window.remove_event_listener_with_callback("scroll", &f);
                }
            }
        })
    };
    let f: js_sys::Function = closure.as_ref().unchecked_ref::<js_sys::Function>().clone();
    window.add_event_listener_with_callback("scroll", &f)?;
    *handle.borrow_mut() = Some(f);
    closure.forget();
    Ok(())
}

fn setup_scroll_reveal(window: &Window, document: &Document) -> Result<()> {
    let targets = elements(&document.query_selector_all(REVEAL_SELECTOR)?);
    let win = window.clone();
    let reveal = move || {
        let (_, vh) = viewport_size(&win);
        for el in &targets {
            if should_reveal(el.get_bounding_client_rect().top(), vh as f64) {
                let _ = el.class_list().add_1("revealed");
            }
        }
    };
    reveal();
    listen(window, "scroll", move |_| reveal())
}

fn reveal_main_sections(document: &Document) {
    for id in MAIN_SECTIONS {
        if let Some(el) = document.get_element_by_id(id) {
            let _ = el.class_list().add_1("revealed");
        }
    }
}

fn set_body_scroll_locked(document: &Document, locked: bool) {
    if let Some(body) = document.body() {
        let _ = set_styles(&body, &[("overflow", if locked { "hidden" } else { "" })]);
    }
}

/// Where a click landed relative to an open resume overlay
fn classify_modal_click(target: &Element) -> Option<(Element, ModalClick)> {
    let modal = target.closest(".modal.modal-open").ok()??;
    let kind = if *target == modal {
        ModalClick::Backdrop
    } else if matches!(target.closest(".modal-close"), Ok(Some(_))) {
        ModalClick::CloseButton
    } else {
        ModalClick::Content
    };
    Some((modal, kind))
}

fn setup_resume_modal(document: &Document, default_path: &str) -> Result<()> {
    let Some(button) = document.get_element_by_id("viewResume") else {
        return Ok(());
    };

    {
        let document = document.clone();
        let default_path = default_path.to_string();
        let btn = button.clone();
        listen(&button, "click", move |_| {
            let data_src = btn.get_attribute("data-src");
            let src = resume::resolve_source(data_src.as_deref(), &default_path);
            let (Ok(modal), Some(body)) = (document.create_element("div"), document.body())
            else {
                return;
            };
            modal.set_class_name(resume::MODAL_CLASS);
            modal.set_inner_html(&resume::modal_markup(src));
            if body.append_child(&modal).is_ok() {
                set_body_scroll_locked(&document, true);
                log::info!("Resume viewer opened: {}", src);
            }
        })?;
    }

    // One delegated listener closes whichever overlay is open
    if let Some(body) = document.body() {
        let document = document.clone();
        listen(&body, "click", move |event| {
            let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            if let Some((modal, kind)) = classify_modal_click(&target) {
                if kind.closes() {
                    modal.remove();
                    set_body_scroll_locked(&document, false);
                }
            }
        })?;
    }

    Ok(())
}

/// Value of a form field by `name`, falling back to `#id`
fn field_value(form: &Element, name: &str) -> String {
    let read = |selector: String| -> Option<String> {
        let el = form.query_selector(&selector).ok().flatten()?;
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            Some(input.value())
        } else {
            el.dyn_ref::<HtmlTextAreaElement>().map(|area| area.value())
        }
    };
    let by_name = read(format!("[name={}]", name));
    let by_id = match &by_name {
        Some(value) if !value.is_empty() => None,
        _ => read(format!("#{}", name)),
    };
    field_fallback(by_name, by_id)
}

fn setup_contact_form(document: &Document) -> Result<()> {
    let Some(form) = document.get_element_by_id("contactForm") else {
        return Ok(());
    };
    let target = form.clone();
    listen(&form, "submit", move |event| {
        event.prevent_default();
        let submission = ContactSubmission::new(
            field_value(&target, "name"),
            field_value(&target, "email"),
            field_value(&target, "message"),
        );
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(&submission.acknowledgment());
        }
        if let Some(form) = target.dyn_ref::<HtmlFormElement>() {
            form.reset();
        }
    })
}

fn setup_back_to_top(window: &Window, document: &Document) -> Result<()> {
    let Some(button) = document.get_element_by_id("backToTop") else {
        return Ok(());
    };

    {
        let win = window.clone();
        let btn = button.clone();
        listen(window, "scroll", move |_| {
            set_class(&btn, "active", back_to_top_visible(scroll_y(&win)));
        })?;
    }

    let win = window.clone();
    listen(&button, "click", move |_| {
        let opts = ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(ScrollBehavior::Smooth);
        win.scroll_to_with_scroll_to_options(&opts);
    })
}

fn apply_theme(root: &Element, button: &Element, theme: Theme) {
    set_class(root, "light", theme.root_has_light_class());
    button.set_text_content(Some(theme.icon()));
}

fn setup_theme_toggle(document: &Document) -> Result<()> {
    let Some(button) = document.get_element_by_id("themeToggle") else {
        return Ok(());
    };
    let Some(root) = document.document_element() else {
        return Ok(());
    };

    let store: Box<dyn KeyValueStore> = match LocalStore::open() {
        Ok(store) => Box::new(store),
        Err(e) => {
            log::warn!("LocalStorage unavailable, theme won't persist: {}", e);
            Box::new(MemoryStore::new())
        }
    };
    let controller = ThemeController::load(store)?;
    apply_theme(&root, &button, controller.theme());
    let controller = Rc::new(RefCell::new(controller));

    let btn = button.clone();
    listen(&button, "click", move |_| {
        let mut controller = controller.borrow_mut();
        if let Err(e) = controller.toggle() {
            log::warn!("Could not save theme: {}", e);
        }
        apply_theme(&root, &btn, controller.theme());
    })
}
