//! Forwards `tracing` events to the browser console

use tracing::Level;
use tracing_subscriber::prelude::*;
use tracing_wasm::{WASMLayer, WASMLayerConfigBuilder};

/// Install the console subscriber; later calls are no-ops
pub fn init(max_level: Level) {
    let config = WASMLayerConfigBuilder::new()
        .set_max_level(max_level)
        .build();

    let installed = tracing_subscriber::registry()
        .with(WASMLayer::new(config))
        .try_init()
        .is_ok();
    if installed {
        tracing::debug!(level = %max_level, "console logging installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_init_twice_is_harmless() {
        init(Level::DEBUG);
        init(Level::INFO);
        tracing::info!("still logging");
    }
}
