//! Browser glue: boots the page shell and wires every rendered element.
//!
//! Listeners are bound per element right after each render. Each info button
//! captures its own `Tool` and each download button its own `DownloadLink`, so
//! nothing has to be reachable from the page's global scope.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, HtmlAnchorElement, HtmlElement, KeyboardEvent, Window};

use crate::boot::{BootSequencer, BootStep};
use crate::catalog::Catalog;
use crate::disclosure::Expansion;
use crate::download::DownloadLink;
use crate::error::{Error, Result};
use crate::modal::{InfoModal, ModalEvent};
use crate::page::{
    APP_ID, CONTAINER_ID, LOADER_ID, MODAL_BODY_ID, MODAL_CLOSE_SELECTOR, MODAL_ID, MODAL_TITLE_ID,
};
use crate::tree;

impl From<Error> for JsValue {
    fn from(err: Error) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

fn dom_err(value: JsValue) -> Error {
    Error::Dom(format!("{:?}", value))
}

/// Listener failures have no caller to return to, so they go to the console.
fn warn(action: &str, err: &Error) {
    web_sys::console::warn_1(&JsValue::from_str(&err.context(action)));
}

/// Elements of the page shell, resolved once at start-up.
struct Page {
    window: Window,
    document: Document,
    loader: HtmlElement,
    app: HtmlElement,
    modal: HtmlElement,
    modal_title: Element,
    modal_body: Element,
    container: Element,
}

impl Page {
    fn resolve() -> Result<Self> {
        let window = web_sys::window().ok_or(Error::MissingElement("window"))?;
        let document = window.document().ok_or(Error::MissingElement("document"))?;

        Ok(Self {
            loader: html_by_id(&document, LOADER_ID)?,
            app: html_by_id(&document, APP_ID)?,
            modal: html_by_id(&document, MODAL_ID)?,
            modal_title: by_id(&document, MODAL_TITLE_ID)?,
            modal_body: by_id(&document, MODAL_BODY_ID)?,
            container: by_id(&document, CONTAINER_ID)?,
            window,
            document,
        })
    }
}

struct App {
    page: Page,
    catalog: Catalog,
    modal: RefCell<InfoModal>,
}

fn by_id(document: &Document, id: &'static str) -> Result<Element> {
    document
        .get_element_by_id(id)
        .ok_or(Error::MissingElement(id))
}

fn html_by_id(document: &Document, id: &'static str) -> Result<HtmlElement> {
    by_id(document, id)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| Error::Dom(format!("#{} is not an HTML element", id)))
}

fn query(root: &Element, selector: &str) -> Result<Element> {
    root.query_selector(selector)
        .map_err(dom_err)?
        .ok_or_else(|| Error::Dom(format!("nothing matches {}", selector)))
}

fn set_style(element: &HtmlElement, property: &str, value: &str) -> Result<()> {
    element
        .style()
        .set_property(property, value)
        .map_err(dom_err)
}

/// Attach `handler` for `kind` events on `target` for the lifetime of the page.
fn listen<F>(target: &EventTarget, kind: &str, handler: F) -> Result<()>
where
    F: FnMut(web_sys::Event) + 'static,
{
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    target
        .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref::<js_sys::Function>())
        .map_err(dom_err)?;
    closure.forget();
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> std::result::Result<(), JsValue> {
    let app = Rc::new(App {
        page: Page::resolve()?,
        catalog: Catalog::embedded()?,
        modal: RefCell::new(InfoModal::default()),
    });

    bind_modal_close(&app)?;
    schedule_boot(app, BootSequencer::default())?;
    Ok(())
}

fn sync_modal(page: &Page, modal: &InfoModal) -> Result<()> {
    match modal.content() {
        Some(content) => {
            page.modal_title.set_text_content(Some(&content.title));
            page.modal_body.set_inner_html(&content.body_html);
            set_style(&page.modal, "display", "block")
        }
        None => set_style(&page.modal, "display", "none"),
    }
}

fn dispatch(app: &App, event: ModalEvent) {
    let closed = app.modal.borrow_mut().handle(event);
    if closed {
        if let Err(err) = sync_modal(&app.page, &app.modal.borrow()) {
            warn("Failed to hide info modal", &err);
        }
    }
}

fn bind_modal_close(app: &Rc<App>) -> Result<()> {
    if let Some(close) = app
        .page
        .document
        .query_selector(MODAL_CLOSE_SELECTOR)
        .map_err(dom_err)?
    {
        let handle = Rc::clone(app);
        listen(&close, "click", move |_| dispatch(&handle, ModalEvent::CloseClicked))?;
    }

    let handle = Rc::clone(app);
    listen(&app.page.window, "click", move |event| {
        let on_backdrop = event.target().map_or(false, |target| {
            let target: &JsValue = target.as_ref();
            let modal: &JsValue = handle.page.modal.as_ref();
            target == modal
        });
        if on_backdrop {
            dispatch(&handle, ModalEvent::BackdropClicked);
        }
    })?;

    let handle = Rc::clone(app);
    listen(&app.page.window, "keydown", move |event| {
        if let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) {
            dispatch(&handle, ModalEvent::KeyDown(key));
        }
    })
}

/// Arm the timer for the next boot step.
fn schedule_boot(app: Rc<App>, mut boot: BootSequencer) -> Result<()> {
    let Some(delay) = boot.next_delay() else {
        return Ok(());
    };
    let window = app.page.window.clone();

    let callback = Closure::once(move || {
        let transition = boot.schedule().fade_transition;
        let Some(step) = boot.advance() else {
            return;
        };
        if let Err(err) = run_boot_step(&app, step, transition).and_then(|_| schedule_boot(app, boot)) {
            wasm_bindgen::throw_str(&err.to_string());
        }
    });

    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref::<js_sys::Function>(),
            delay.as_millis() as i32,
        )
        .map_err(dom_err)?;
    callback.forget();
    Ok(())
}

fn run_boot_step(app: &Rc<App>, step: BootStep, transition: &str) -> Result<()> {
    let loader = &app.page.loader;
    match step {
        BootStep::FadeLoader => {
            set_style(loader, "opacity", "0")?;
            set_style(loader, "transition", transition)
        }
        BootStep::RevealAndRender => {
            set_style(loader, "display", "none")?;
            set_style(&app.page.app, "display", "block")?;
            render_catalog(app)
        }
    }
}

fn render_catalog(app: &Rc<App>) -> Result<()> {
    let tree = tree::render(&app.catalog, &Expansion::default());
    let container = &app.page.container;
    container.set_inner_html(&tree.to_html());

    for (p, phase) in tree.phases().iter().enumerate() {
        let phase_el = query(container, &format!("[data-phase=\"{}\"]", p))?;
        let header = query(&phase_el, ":scope > .phase-header")?;
        toggle_on_click(&header, phase_el.clone(), false)?;

        for c in 0..phase.categories.len() {
            let category_el = query(&phase_el, &format!("[data-category=\"{}\"]", c))?;
            let header = query(&category_el, ":scope > .category-header")?;
            toggle_on_click(&header, category_el.clone(), true)?;
        }
    }

    for row in tree.rows() {
        let info = query(
            container,
            &format!("button[data-action=\"info\"][data-row=\"{}\"]", row.index),
        )?;
        let tool = row.tool.clone();
        let handle = Rc::clone(app);
        listen(&info, "click", move |_| {
            handle.modal.borrow_mut().show(&tool);
            if let Err(err) = sync_modal(&handle.page, &handle.modal.borrow()) {
                warn(&format!("Failed to show info for {}", tool.name), &err);
            }
        })?;

        let download = query(
            container,
            &format!("button[data-action=\"download\"][data-row=\"{}\"]", row.index),
        )?;
        let link = row.download();
        let document = app.page.document.clone();
        listen(&download, "click", move |_| {
            if let Some(link) = &link {
                if let Err(err) = trigger_download(&document, link) {
                    warn(&format!("Download of {} failed to start", link.href), &err);
                }
            }
        })?;
    }

    Ok(())
}

fn toggle_on_click(header: &Element, node: Element, stop_propagation: bool) -> Result<()> {
    listen(header, "click", move |event| {
        if stop_propagation {
            event.stop_propagation();
        }
        if let Err(err) = node.class_list().toggle("open") {
            warn("Failed to toggle section", &dom_err(err));
        }
    })
}

/// Start a browser download through a transient hidden anchor.
fn trigger_download(document: &Document, link: &DownloadLink) -> Result<()> {
    let anchor = document
        .create_element("a")
        .map_err(dom_err)?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| Error::Dom("created element is not an anchor".to_string()))?;
    anchor.set_href(&link.href);
    anchor.set_download(&link.save_as);
    set_style(&anchor, "display", "none")?;

    let body = document.body().ok_or(Error::MissingElement("body"))?;
    body.append_child(&anchor).map_err(dom_err)?;
    anchor.click();
    body.remove_child(&anchor).map_err(dom_err)?;
    Ok(())
}
