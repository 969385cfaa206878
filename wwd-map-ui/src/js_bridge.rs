//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! Leaflet and Chart.js glue lives in `assets/js/*.js` and is evaluated at
//! runtime as globals (no ES modules), once both libraries have loaded.
//! This module serializes arguments and calls those globals.

use wasm_bindgen::prelude::*;

// Embed the map and chart JS at compile time
static LEAFLET_MAP_JS: &str = include_str!("../assets/js/leaflet-map.js");
static LINE_CHART_JS: &str = include_str!("../assets/js/line-chart.js");

const LEAFLET_CSS_URL: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS_URL: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const CHART_JS_URL: &str = "https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js";

/// Window property the map click handler is installed under.
const CLICK_HANDLER: &str = "__wwdMapClick";

/// Quote a string as a JS string literal.
pub fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('WWD JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Interval between readiness checks, in milliseconds.
const POLL_INTERVAL_MS: u32 = 100;

/// Readiness checks before a pending call is abandoned (30 s).
const MAX_POLL_ATTEMPTS: u32 = 300;

/// Wrap `body` in a poll that waits for the glue scripts and (optionally) a
/// DOM element before running it once. Gives up after `MAX_POLL_ATTEMPTS`.
fn when_ready(element_id: Option<&str>, body: &str) -> String {
    let element_check = element_id
        .map(|id| format!(" && document.getElementById({})", js_string(id)))
        .unwrap_or_default();
    let target = js_string(element_id.unwrap_or("glue scripts"));
    format!(
        r#"
        (function() {{
            var attempts = 0;
            var poll = setInterval(function() {{
                if (window.__wwdReady{element_check}) {{
                    clearInterval(poll);
                    try {{ {body} }} catch(e) {{ console.error('[WWD]', e); }}
                }} else if (++attempts >= {MAX_POLL_ATTEMPTS}) {{
                    clearInterval(poll);
                    console.warn('[WWD] Gave up waiting for', {target});
                }}
            }}, {POLL_INTERVAL_MS});
        }})();
        "#
    )
}

/// Load Leaflet and Chart.js (if the page did not), then evaluate the glue
/// scripts at global scope. Call once at app startup.
pub fn init_scripts() {
    let glue = [LEAFLET_MAP_JS, LINE_CHART_JS].join("\n");

    // Store the scripts on window so the polling callback can eval them
    // at global scope (not block-scoped inside setInterval).
    let store_js = format!("window.__wwdScripts = {};", js_string(&glue));
    let _ = js_sys::eval(&store_js);

    let init_js = format!(
        r#"
        (function() {{
            function addTag(tag, attrs) {{
                var el = document.createElement(tag);
                for (var k in attrs) {{ el[k] = attrs[k]; }}
                document.head.appendChild(el);
            }}
            if (typeof L === 'undefined') {{
                addTag('link', {{ rel: 'stylesheet', href: {leaflet_css} }});
                addTag('script', {{ src: {leaflet_js} }});
            }}
            if (typeof Chart === 'undefined') {{
                addTag('script', {{ src: {chart_js} }});
            }}
            var waitForLibs = setInterval(function() {{
                if (typeof L !== 'undefined' && typeof Chart !== 'undefined') {{
                    clearInterval(waitForLibs);
                    (0, eval)(window.__wwdScripts);
                    delete window.__wwdScripts;
                    window.wwdInitMap = wwdInitMap;
                    window.wwdPlaceMarker = wwdPlaceMarker;
                    window.wwdRemoveMarker = wwdRemoveMarker;
                    window.wwdInitLineChart = wwdInitLineChart;
                    window.wwdUpdateLineChart = wwdUpdateLineChart;
                    window.__wwdReady = true;
                    console.log('WWD map and charts initialized');
                }}
            }}, 100);
        }})();
        "#,
        leaflet_css = js_string(LEAFLET_CSS_URL),
        leaflet_js = js_string(LEAFLET_JS_URL),
        chart_js = js_string(CHART_JS_URL),
    );
    let _ = js_sys::eval(&init_js);
}

/// Create the Leaflet map inside `container_id` once it exists.
pub fn init_map(container_id: &str, config_json: &str) {
    call_js(&when_ready(
        Some(container_id),
        &format!(
            "window.wwdInitMap({}, {});",
            js_string(container_id),
            js_string(config_json)
        ),
    ));
}

/// Create an empty line chart on `canvas_id` once the canvas exists.
pub fn init_line_chart(canvas_id: &str, config_json: &str) {
    call_js(&when_ready(
        Some(canvas_id),
        &format!(
            "window.wwdInitLineChart({}, {});",
            js_string(canvas_id),
            js_string(config_json)
        ),
    ));
}

/// Replace a chart's labels and data, then redraw it.
pub fn update_line_chart(canvas_id: &str, labels_json: &str, data_json: &str) {
    call_js(&when_ready(
        Some(canvas_id),
        &format!(
            "window.wwdUpdateLineChart({}, {}, {});",
            js_string(canvas_id),
            js_string(labels_json),
            js_string(data_json)
        ),
    ));
}

/// Add a marker with an open popup. `popup` is rendered as HTML.
pub fn place_marker(container_id: &str, marker_id: u32, lat: f64, lng: f64, popup: &str) {
    call_js(&format!(
        "if (window.__wwdReady) window.wwdPlaceMarker({}, {}, {}, {}, {});",
        js_string(container_id),
        marker_id,
        lat,
        lng,
        js_string(popup)
    ));
}

pub fn remove_marker(container_id: &str, marker_id: u32) {
    call_js(&format!(
        "if (window.__wwdReady) window.wwdRemoveMarker({}, {});",
        js_string(container_id),
        marker_id
    ));
}

/// Install the Rust handler the map calls with `(lat, lng)` on every click.
pub fn register_map_click(handler: impl FnMut(f64, f64) + 'static) {
    let closure = Closure::<dyn FnMut(f64, f64)>::new(handler);
    if let Some(window) = web_sys::window() {
        if js_sys::Reflect::set(&window, &JsValue::from_str(CLICK_HANDLER), closure.as_ref())
            .is_err()
        {
            log::error!("Failed to install map click handler");
        }
    }
    // Lives as long as the page.
    closure.forget();
}

/// Blocking browser alert.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Origin of the page (`scheme://host[:port]`), used to reach the server.
pub fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}
