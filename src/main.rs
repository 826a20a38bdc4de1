mod api;
mod auth;
mod components;
mod config;
mod data;
mod index;
mod page;
mod query;
mod route;
mod session;
mod storage;
mod tasks;
mod util;
mod validate;

fn main() {
	wasm_logger::init(wasm_logger::Config::default());
	console_error_panic_hook::set_once();
	yew::Renderer::<index::Root>::new().render();
}
