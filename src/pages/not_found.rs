use leptos::prelude::*;

/// 404 - Not Found
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<main style="text-align: center; padding: 4rem 1rem; font-family: sans-serif;">
			<h1>"404"</h1>
			<p>"Page not found."</p>
			<a href="/">"Back to the graph"</a>
		</main>
	}
}
