use std::panic;

use larentals_core::{engine, BuyFilters, FeatureCollection, LeaseFilters};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::info;
use wasm_bindgen::{prelude::wasm_bindgen, JsValue};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    tracing_wasm::set_as_global_default();
    panic::set_hook(Box::new(console_error_panic_hook::hook));
    info!("listing filters ready");
    Ok(())
}

fn from_js<T: DeserializeOwned>(value: JsValue) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    value.serialize(&serde_wasm_bindgen::Serializer::json_compatible()).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn respond(result: &FeatureCollection<'_>) -> Result<JsValue, JsValue> { to_js(result) }

/// Filters a rental FeatureCollection with the lease panel's controls.
///
/// `filters` uses the camelCase control names (`price`, `sqftIncludeMissing`, `rentalTerms`, ...);
/// absent controls admit everything.
#[wasm_bindgen(js_name = filterLease)]
pub fn filter_lease(filters: JsValue, collection: JsValue) -> Result<JsValue, JsValue> {
    let filters: LeaseFilters = from_js(filters)?;
    let collection: Value = from_js(collection)?;
    respond(&engine::filter_lease(&collection, &filters)?)
}

/// Filters a for-sale FeatureCollection with the buy panel's controls.
#[wasm_bindgen(js_name = filterBuy)]
pub fn filter_buy(filters: JsValue, collection: JsValue) -> Result<JsValue, JsValue> {
    let filters: BuyFilters = from_js(filters)?;
    let collection: Value = from_js(collection)?;
    respond(&engine::filter_buy(&collection, &filters)?)
}

/// Lists the excluded lease listings with the criterion each one failed, for debugging a panel.
#[wasm_bindgen(js_name = explainLease)]
pub fn explain_lease(filters: JsValue, collection: JsValue) -> Result<JsValue, JsValue> {
    let filters: LeaseFilters = from_js(filters)?;
    let collection: Value = from_js(collection)?;
    to_js(&engine::explain(&collection, &filters.to_spec()?))
}

#[wasm_bindgen(js_name = explainBuy)]
pub fn explain_buy(filters: JsValue, collection: JsValue) -> Result<JsValue, JsValue> {
    let filters: BuyFilters = from_js(filters)?;
    let collection: Value = from_js(collection)?;
    to_js(&engine::explain(&collection, &filters.to_spec()?))
}
