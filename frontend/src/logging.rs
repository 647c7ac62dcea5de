//! Browser logging: `tracing` events go to the developer console, and panics
//! print their message instead of a bare `unreachable` trap.

use tracing::Level;
use tracing_wasm::WASMLayerConfigBuilder;

/// Installs the panic hook and the console subscriber. Must run once,
/// before the app renders.
pub fn init(level: Level) {
    console_error_panic_hook::set_once();
    let config = WASMLayerConfigBuilder::new().set_max_level(level).build();
    tracing_wasm::set_as_global_default_with_config(config);
}
