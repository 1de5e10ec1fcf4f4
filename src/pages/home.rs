use leptos::prelude::*;
use log::error;

use crate::components::force_graph::ForceGraphCanvas;
use crate::config::GraphSettings;
use crate::loader::fetch_record;

/// Default Home Page: fetches the record once and shows it as a graph of
/// collapsed categories.
#[component]
pub fn Home() -> impl IntoView {
	let settings = GraphSettings::default();
	let url = settings.record_url.clone();
	let record = LocalResource::new(move || fetch_record(url.clone()));

	let graph = move || match record.get() {
		None => view! { <p class="loading">"Loading…"</p> }.into_any(),
		Some(Ok(record)) => {
			let settings = settings.clone();
			view! { <ForceGraphCanvas record=record settings=settings fullscreen=true /> }.into_any()
		}
		Some(Err(err)) => {
			error!("{err}");
			view! { <p class="error">{err.to_string()}</p> }.into_any()
		}
	};

	view! {
		<div class="fullscreen-graph">
			{graph}
			<div class="graph-overlay">
				<h1>"Résumé"</h1>
				<p class="subtitle">"Click a node to open or close it. Hover to trace its links. Scroll to zoom."</p>
			</div>
		</div>
	}
}
