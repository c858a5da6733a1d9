//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The Chart.js glue lives in `assets/js/line-chart.js` and is evaluated as
//! globals (no ES modules) once the Chart.js script tag has loaded.
//! Arguments are passed as JSON string literals so any payload survives
//! the trip into the generated JS source.

static LINE_CHART_JS: &str = include_str!("../assets/js/line-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('GHCN JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote `s` as a JS string literal.
fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

/// Evaluate the chart glue once `Chart` is defined. Safe to call repeatedly.
pub fn init_charts() {
    let store_js = format!(
        "if (!window.__ghcnChartScripts && !window.__ghcnChartsReady) {{ window.__ghcnChartScripts = {}; }}",
        js_string(LINE_CHART_JS)
    );
    call_js(&store_js);

    let init_js = r#"
        (function() {
            if (window.__ghcnChartsPolling || window.__ghcnChartsReady) return;
            window.__ghcnChartsPolling = true;
            var waitForChart = setInterval(function() {
                if (typeof Chart !== 'undefined') {
                    clearInterval(waitForChart);
                    // Eval at global scope via indirect eval
                    (0, eval)(window.__ghcnChartScripts);
                    delete window.__ghcnChartScripts;
                    if (typeof renderWeatherChart !== 'undefined') window.renderWeatherChart = renderWeatherChart;
                    if (typeof destroyWeatherChart !== 'undefined') window.destroyWeatherChart = destroyWeatherChart;
                    if (typeof renderChartPlaceholder !== 'undefined') window.renderChartPlaceholder = renderChartPlaceholder;
                    window.__ghcnChartsReady = true;
                    console.log('GHCN charts initialized');
                }
            }, 100);
        })();
    "#;
    call_js(init_js);
}

/// Script that runs `call` once the glue is loaded and the canvas is in
/// the DOM. Each canvas has at most one pending call: scheduling a new one
/// clears the previous handle, so an older render can never land last.
fn pending_render_js(canvas_id: &str, call: &str) -> String {
    let id = js_string(canvas_id);
    format!(
        r#"
        (function() {{
            var pending = window.__ghcnPendingRender || (window.__ghcnPendingRender = {{}});
            if (pending[{id}]) clearInterval(pending[{id}]);
            var poll = setInterval(function() {{
                if (window.__ghcnChartsReady && document.getElementById({id})) {{
                    clearInterval(poll);
                    if (pending[{id}] === poll) delete pending[{id}];
                    try {{ {call} }} catch(e) {{ console.error('[GHCN] chart error:', e); }}
                }}
            }}, 100);
            pending[{id}] = poll;
        }})();
        "#,
    )
}

/// Script that drops the pending call for `canvas_id` and destroys its chart.
fn destroy_js(canvas_id: &str) -> String {
    let id = js_string(canvas_id);
    format!(
        r#"
        (function() {{
            var pending = window.__ghcnPendingRender;
            if (pending && pending[{id}]) {{
                clearInterval(pending[{id}]);
                delete pending[{id}];
            }}
            if (window.destroyWeatherChart) window.destroyWeatherChart({id});
        }})();
        "#,
    )
}

fn when_canvas_ready(canvas_id: &str, call: &str) {
    call_js(&pending_render_js(canvas_id, call));
}

/// Render a line chart into the canvas `canvas_id`.
pub fn render_line_chart(canvas_id: &str, data_json: &str, options_json: &str) {
    let call = format!(
        "window.renderWeatherChart({}, {}, {});",
        js_string(canvas_id),
        js_string(data_json),
        js_string(options_json)
    );
    when_canvas_ready(canvas_id, &call);
}

/// Draw centered placeholder text instead of a chart.
pub fn render_placeholder(canvas_id: &str, text: &str) {
    let call = format!(
        "window.renderChartPlaceholder({}, {});",
        js_string(canvas_id),
        js_string(text)
    );
    when_canvas_ready(canvas_id, &call);
}

/// Destroy the chart instance bound to `canvas_id`, if any, and cancel a
/// render still waiting on it.
pub fn destroy_chart(canvas_id: &str) {
    call_js(&destroy_js(canvas_id));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_render_replaces_previous_handle() {
        let js = pending_render_js("weather-chart", "draw();");
        let clear = js
            .find(r#"if (pending["weather-chart"]) clearInterval(pending["weather-chart"]);"#)
            .unwrap();
        let schedule = js.find("setInterval").unwrap();
        let store = js.find(r#"pending["weather-chart"] = poll;"#).unwrap();
        assert!(clear < schedule && schedule < store);
        assert!(js.contains(r#"if (pending["weather-chart"] === poll) delete pending["weather-chart"];"#));
        assert!(js.contains("try { draw(); }"));
    }

    #[test]
    fn test_destroy_cancels_pending_render() {
        let js = destroy_js("weather-chart");
        let cancel = js.find(r#"clearInterval(pending["weather-chart"])"#).unwrap();
        let destroy = js.find(r#"window.destroyWeatherChart("weather-chart")"#).unwrap();
        assert!(cancel < destroy);
    }

    #[test]
    fn test_canvas_id_is_quoted() {
        let js = pending_render_js("a\"b", "x();");
        assert!(js.contains(r#"pending["a\"b"]"#));
    }
}
