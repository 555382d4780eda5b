// Browser-side tests (run with `wasm-pack test --headless`).

mod list_render;
mod session_store;
