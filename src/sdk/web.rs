//! Binding to the global `mapboxgl` object for browser builds.

use crate::sdk::{EventSink, MapHandle, MapRenderer, RendererOptions, SdkError};
use js_sys::{Array, Object, Reflect};
use log::debug;
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::HtmlElement;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = mapboxgl, js_name = supported, catch)]
    fn mapbox_supported() -> Result<bool, JsValue>;

    #[wasm_bindgen(js_namespace = mapboxgl, js_name = Map)]
    type JsMap;

    #[wasm_bindgen(constructor, js_namespace = mapboxgl, js_class = "Map", catch)]
    fn new(options: &Object) -> Result<JsMap, JsValue>;

    #[wasm_bindgen(method, js_class = "Map", catch)]
    fn remove(this: &JsMap) -> Result<(), JsValue>;

    #[wasm_bindgen(method, js_class = "Map", js_name = addControl, catch)]
    fn add_control(
        this: &JsMap,
        control: &NavigationControl,
        position: &str,
    ) -> Result<(), JsValue>;

    #[wasm_bindgen(method, js_class = "Map", js_name = removeControl, catch)]
    fn remove_control(this: &JsMap, control: &NavigationControl) -> Result<(), JsValue>;

    #[wasm_bindgen(js_namespace = mapboxgl)]
    type NavigationControl;

    #[wasm_bindgen(constructor, js_namespace = mapboxgl, js_class = "NavigationControl")]
    fn new() -> NavigationControl;

    #[wasm_bindgen(method, js_class = "Map")]
    fn on(this: &JsMap, event: &str, listener: &Closure<dyn FnMut(JsValue)>);
}

/// Installs the panic hook so Rust panics show up in the browser console.
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Looks up a mount point by element id.
pub fn container_by_id(id: &str) -> Result<HtmlElement, SdkError> {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
        .ok_or_else(|| SdkError::new(format!("no element with id {id:?}")))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| SdkError::new(format!("element {id:?} is not an HTML element")))
}

/// [`MapRenderer`] over mapbox-gl-js, which must already be loaded on the page.
#[derive(Debug, Default, Clone, Copy)]
pub struct WebRenderer;

impl WebRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl MapRenderer for WebRenderer {
    type Container = HtmlElement;
    type Handle = WebMapHandle;

    fn supported(&self) -> bool {
        mapbox_supported().unwrap_or(false)
    }

    fn construct(
        &self,
        options: RendererOptions<'_, HtmlElement>,
        events: EventSink,
    ) -> Result<WebMapHandle, SdkError> {
        let js_options = Object::new();
        let center = Array::of2(
            &JsValue::from_f64(options.center[0]),
            &JsValue::from_f64(options.center[1]),
        );
        for (key, value) in [
            ("accessToken", JsValue::from_str(options.credential)),
            ("container", options.container.clone().into()),
            ("style", JsValue::from_str(options.style)),
            ("center", center.into()),
            ("zoom", JsValue::from_f64(options.zoom)),
        ] {
            Reflect::set(&js_options, &JsValue::from_str(key), &value).map_err(js_error)?;
        }

        let map = JsMap::new(&js_options).map_err(js_error)?;

        let load_sink = events.clone();
        let on_load = Closure::wrap(Box::new(move |_event: JsValue| {
            load_sink.loaded();
        }) as Box<dyn FnMut(JsValue)>);

        let on_error = Closure::wrap(Box::new(move |event: JsValue| {
            events.failed(error_message(&event));
        }) as Box<dyn FnMut(JsValue)>);

        map.on("load", &on_load);
        map.on("error", &on_error);

        Ok(WebMapHandle {
            map,
            navigation: None,
            _listeners: [on_load, on_error],
        })
    }
}

/// A live mapbox-gl map. Listeners stay alive as long as the handle does.
pub struct WebMapHandle {
    map: JsMap,
    navigation: Option<NavigationControl>,
    _listeners: [Closure<dyn FnMut(JsValue)>; 2],
}

impl MapHandle for WebMapHandle {
    fn remove(&mut self) -> Result<(), SdkError> {
        debug!("Removing mapbox-gl map");
        self.map.remove().map_err(js_error)
    }

    fn add_navigation_control(&mut self) -> Result<(), SdkError> {
        let control = NavigationControl::new();
        self.map.add_control(&control, "top-right").map_err(js_error)?;
        self.navigation = Some(control);
        Ok(())
    }

    fn remove_navigation_control(&mut self) -> Result<(), SdkError> {
        match self.navigation.take() {
            Some(control) => self.map.remove_control(&control).map_err(js_error),
            None => Ok(()),
        }
    }
}

fn js_error(value: JsValue) -> SdkError {
    match value.dyn_ref::<js_sys::Error>() {
        Some(error) => SdkError::new(String::from(error.message())),
        None => SdkError::new(format!("{value:?}")),
    }
}

/// mapbox-gl error events carry the underlying `Error` in `event.error`.
fn error_message(event: &JsValue) -> String {
    Reflect::get(event, &JsValue::from_str("error"))
        .ok()
        .and_then(|error| error.dyn_into::<js_sys::Error>().ok())
        .map(|error| String::from(error.message()))
        .unwrap_or_else(|| "map reported an error".to_string())
}
