//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions are split across `assets/js/*.js` and loaded at runtime.
//! They are evaluated as globals (no ES modules) and exposed via `window.*`.
//! This module serializes panel views and calls those globals.

use wasm_bindgen::JsCast;

// Embed all chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");
static LINE_CHART_JS: &str = include_str!("../assets/js/line-chart.js");
static PIE_CHART_JS: &str = include_str!("../assets/js/pie-chart.js");
static PANEL_CHART_JS: &str = include_str!("../assets/js/panel-chart.js");
static EXPORT_PDF_JS: &str = include_str!("../assets/js/export-pdf.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('EDA JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote a string as a JS string literal.
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "''".to_string())
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The scripts are evaluated at global scope once D3 is ready and each
/// entry point is promoted to `window.*` explicitly.
pub fn init_charts() {
    let all_js = [
        TOOLTIP_JS,
        BAR_CHART_JS,
        LINE_CHART_JS,
        PIE_CHART_JS,
        PANEL_CHART_JS,
        EXPORT_PDF_JS,
    ]
    .join("\n");

    let store_js = format!("window.__edaChartScripts = {};", js_string(&all_js));
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__edaChartScripts);
                    delete window.__edaChartScripts;
                    if (typeof renderBarChart !== 'undefined') window.renderBarChart = renderBarChart;
                    if (typeof renderLineChart !== 'undefined') window.renderLineChart = renderLineChart;
                    if (typeof renderPieChart !== 'undefined') window.renderPieChart = renderPieChart;
                    if (typeof renderPanelChart !== 'undefined') window.renderPanelChart = renderPanelChart;
                    if (typeof renderNoData !== 'undefined') window.renderNoData = renderNoData;
                    if (typeof exportDashboardPdf !== 'undefined') window.exportDashboardPdf = exportDashboardPdf;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof renderLegend !== 'undefined') window.renderLegend = renderLegend;
                    window.__edaChartsReady = true;
                    console.log('EDA charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Poll until charts are initialized and `container_id` exists, then run `call`.
fn when_ready(container_id: &str, call: &str) {
    let id = js_string(container_id);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__edaChartsReady && document.getElementById({id})) {{
                    clearInterval(poll);
                    try {{ {call} }} catch(e) {{ console.error('[EDA] chart render error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render a panel chart from its serialized `ChartSpec` (bar, line or pie).
pub fn render_panel_chart(container_id: &str, spec_json: &str) {
    let call = format!(
        "window.renderPanelChart({}, {});",
        js_string(container_id),
        js_string(spec_json)
    );
    when_ready(container_id, &call);
}

/// Replace the chart in `container_id` with a centred message.
pub fn render_no_data(container_id: &str, message: &str) {
    let call = format!(
        "window.renderNoData({}, {});",
        js_string(container_id),
        js_string(message)
    );
    when_ready(container_id, &call);
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById({}); if (el) el.innerHTML = '';",
        js_string(container_id)
    ));
}

/// Capture the element `target_id` (the panel grid) into a PDF download.
pub fn export_pdf(target_id: &str, filename: &str) {
    call_js(&format!(
        "if (window.exportDashboardPdf) {{ window.exportDashboardPdf({}, {}); }} else {{ console.warn('[EDA] PDF export not loaded'); }}",
        js_string(target_id),
        js_string(filename)
    ));
}

/// Move keyboard focus to the element `id`, if present.
pub fn focus_element(id: &str) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
    if let Some(el) = element {
        let _ = el.focus();
    }
}
