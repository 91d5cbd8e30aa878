use leptos::prelude::*;

use crate::components::trust_graph::{Theme, TrustGraphCanvas};

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	// The graph never reaches for ambient color state; the page hands it an
	// explicit palette.
	let theme = Theme::default();

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<main style="max-width: 56rem; margin: 0 auto; padding: 2rem 1rem; font-family: sans-serif;">
				<h1>"Trust Network Graph"</h1>
				<p class="subtitle">
					"Synthetic relationship data rendered as a force-directed graph. Hover a node for details, click to pin a selection ring, drag to reposition, scroll to zoom."
				</p>
				<TrustGraphCanvas theme=theme />
			</main>
		</ErrorBoundary>
	}
}
