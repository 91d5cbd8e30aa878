//! CSR entry point.

// The dependency list belongs to the library target.
#![allow(unused_crate_dependencies)]

use trust_graph_canvas::{App, init_logging};

fn main() {
	init_logging();
	leptos::mount::mount_to_body(App);
}
