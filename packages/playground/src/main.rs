//! Mounts the drop zone onto `index.html`.
//!
//! Build with `cargo build --target wasm32-unknown-unknown -p dropzone-playground`, run `wasm-bindgen --target web
//! --out-dir packages/playground/pkg` on the output, then serve `packages/playground` with any static file server.

use dropzone::{web, Config};

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default_with_config(
        tracing_wasm::WASMLayerConfigBuilder::default()
            .set_max_level(tracing::Level::DEBUG)
            .build(),
    );

    match web::initialize(Config::new()) {
        Ok(zone) => zone.forget(),
        Err(err) => tracing::error!("failed to mount the drop zone: {err}"),
    }
}
