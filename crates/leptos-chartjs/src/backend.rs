//! Chart backends
//!
//! `ChartJs` drives the global `Chart` constructor from chart.umd.js.

use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::{ChartConfig, ChartData};

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("canvas #{0} not found")]
    CanvasNotFound(String),
    #[error("chart.js error: {0}")]
    Js(String),
    #[error("failed to serialize chart config: {0}")]
    Serialize(String),
}

/// Something that can build a chart on a canvas and swap its data later
pub trait ChartBackend {
    type Instance;

    /// Build a new chart on the canvas with the given id
    fn create(&self, canvas_id: &str, config: &ChartConfig) -> Result<Self::Instance, ChartError>;

    /// Replace the data object wholesale and redraw
    fn replace_data(
        &self,
        instance: &mut Self::Instance,
        data: &ChartData,
    ) -> Result<(), ChartError>;
}

#[wasm_bindgen]
extern "C" {
    #[derive(Clone, Debug)]
    #[wasm_bindgen(js_name = Chart)]
    pub type JsChart;

    #[wasm_bindgen(constructor, js_class = "Chart", catch)]
    fn new(canvas: &web_sys::HtmlCanvasElement, config: &JsValue) -> Result<JsChart, JsValue>;

    #[wasm_bindgen(method, setter, js_class = "Chart")]
    fn set_data(this: &JsChart, data: &JsValue);

    #[wasm_bindgen(method, catch, js_class = "Chart")]
    fn update(this: &JsChart) -> Result<(), JsValue>;
}

/// Chart.js backend (requires chart.umd.js loaded on the page)
#[derive(Clone, Copy, Debug, Default)]
pub struct ChartJs;

impl ChartBackend for ChartJs {
    type Instance = JsChart;

    fn create(&self, canvas_id: &str, config: &ChartConfig) -> Result<JsChart, ChartError> {
        let canvas = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.get_element_by_id(canvas_id))
            .and_then(|el| el.dyn_into::<web_sys::HtmlCanvasElement>().ok())
            .ok_or_else(|| ChartError::CanvasNotFound(canvas_id.to_string()))?;

        let js_config = to_js(config)?;
        JsChart::new(&canvas, &js_config).map_err(|e| ChartError::Js(js_message(e)))
    }

    fn replace_data(&self, instance: &mut JsChart, data: &ChartData) -> Result<(), ChartError> {
        instance.set_data(&to_js(data)?);
        instance.update().map_err(|e| ChartError::Js(js_message(e)))
    }
}

/// Plain JS objects (not `Map`s) so Chart.js can read the options
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, ChartError> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| ChartError::Serialize(e.to_string()))
}

fn js_message(value: JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
