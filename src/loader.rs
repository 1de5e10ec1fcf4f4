//! Fetching the record over HTTP from the browser.

use log::info;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::model::{Record, parse_record};

/// Why the record could not be loaded.
#[allow(missing_docs)]
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LoadError {
	#[error("no browser window available")]
	NoWindow,
	/// The request was rejected (network error, CORS, ...).
	#[error("request for {url} failed: {reason}")]
	Fetch { url: String, reason: String },
	#[error("{url} answered with HTTP {status}")]
	Status { url: String, status: u16 },
	#[error("could not read body of {url}: {reason}")]
	Body { url: String, reason: String },
	#[error("malformed record: {0}")]
	Parse(String),
}

fn describe(value: &JsValue) -> String {
	value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Decodes record text, mapping decode failures into [`LoadError::Parse`].
pub fn decode_record(text: &str) -> Result<Record, LoadError> {
	parse_record(text).map_err(|e| LoadError::Parse(e.to_string()))
}

/// Fetches and decodes the record at `url`. Fire once, no retry.
pub async fn fetch_record(url: String) -> Result<Record, LoadError> {
	let window = web_sys::window().ok_or(LoadError::NoWindow)?;
	let fetch_err = |e: JsValue| LoadError::Fetch {
		url: url.clone(),
		reason: describe(&e),
	};
	let response: Response = JsFuture::from(window.fetch_with_str(&url))
		.await
		.map_err(fetch_err)?
		.dyn_into()
		.map_err(fetch_err)?;
	if !response.ok() {
		return Err(LoadError::Status {
			url,
			status: response.status(),
		});
	}

	let body_err = |e: JsValue| LoadError::Body {
		url: url.clone(),
		reason: describe(&e),
	};
	let text = JsFuture::from(response.text().map_err(body_err)?)
		.await
		.map_err(body_err)?
		.as_string()
		.ok_or_else(|| LoadError::Body {
			url: url.clone(),
			reason: "body is not text".into(),
		})?;

	let record = decode_record(&text)?;
	info!(
		"loaded record from {url}: {} categories",
		record.person.categories.len()
	);
	Ok(record)
}
