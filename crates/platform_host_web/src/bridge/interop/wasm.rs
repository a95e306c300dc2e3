use js_sys::Promise;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use super::*;

#[wasm_bindgen(inline_js = r#"
function fullscreenElement() {
  return document.fullscreenElement || document.webkitFullscreenElement || null;
}

export function jsRequestFullscreen() {
  const root = document.documentElement;
  const request = root.requestFullscreen || root.webkitRequestFullscreen;
  if (!request) {
    return Promise.reject(new Error('Fullscreen API is unavailable in this browser context'));
  }
  try {
    return Promise.resolve(request.call(root));
  } catch (err) {
    return Promise.reject(err);
  }
}

export function jsExitFullscreen() {
  if (!fullscreenElement()) {
    return Promise.resolve();
  }
  const exit = document.exitFullscreen || document.webkitExitFullscreen;
  if (!exit) {
    return Promise.reject(new Error('Fullscreen API is unavailable in this browser context'));
  }
  try {
    return Promise.resolve(exit.call(document));
  } catch (err) {
    return Promise.reject(err);
  }
}

export function jsIsFullscreen() {
  return fullscreenElement() !== null;
}

export function jsOnFullscreenChange(callback) {
  const notify = () => callback(fullscreenElement() !== null);
  document.addEventListener('fullscreenchange', notify);
  document.addEventListener('webkitfullscreenchange', notify);
}

export function jsOpenExternalUrl(url, target) {
  window.open(url, target, target === '_blank' ? 'noopener' : '');
}
"#)]
extern "C" {
    #[wasm_bindgen(catch, js_name = jsRequestFullscreen)]
    fn js_request_fullscreen() -> Result<Promise, JsValue>;
    #[wasm_bindgen(catch, js_name = jsExitFullscreen)]
    fn js_exit_fullscreen() -> Result<Promise, JsValue>;
    #[wasm_bindgen(js_name = jsIsFullscreen)]
    fn js_is_fullscreen() -> bool;
    #[wasm_bindgen(catch, js_name = jsOnFullscreenChange)]
    fn js_on_fullscreen_change(callback: &Closure<dyn Fn(bool)>) -> Result<(), JsValue>;
    #[wasm_bindgen(catch, js_name = jsOpenExternalUrl)]
    fn js_open_external_url(url: &str, target: &str) -> Result<(), JsValue>;
}

async fn await_promise(promise: Promise) -> Result<JsValue, String> {
    JsFuture::from(promise).await.map_err(js_error_to_string)
}

fn js_error_to_string(err: JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    if let Ok(message) = js_sys::Reflect::get(&err, &JsValue::from_str("message")) {
        if let Some(text) = message.as_string() {
            return text;
        }
    }
    format!("{err:?}")
}

pub fn open_external_url(url: &str, target: &str) -> Result<(), String> {
    js_open_external_url(url, target).map_err(js_error_to_string)
}

pub async fn request_fullscreen() -> Result<(), String> {
    let promise = js_request_fullscreen().map_err(js_error_to_string)?;
    await_promise(promise).await.map(|_| ())
}

pub async fn exit_fullscreen() -> Result<(), String> {
    let promise = js_exit_fullscreen().map_err(js_error_to_string)?;
    await_promise(promise).await.map(|_| ())
}

pub fn is_fullscreen() -> bool {
    js_is_fullscreen()
}

pub fn on_fullscreen_change(handler: FullscreenChangeHandler) -> Result<(), String> {
    let callback = Closure::<dyn Fn(bool)>::new(move |active: bool| handler(active));
    js_on_fullscreen_change(&callback).map_err(js_error_to_string)?;
    // The listener stays registered for the page lifetime.
    callback.forget();
    Ok(())
}
