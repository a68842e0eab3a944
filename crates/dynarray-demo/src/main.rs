//! dynarray demo: push 1, 2, 3, remove, pop, and print every state.
//!
//! Run with:
//!   cargo run -p dynarray-demo
//!
//! Set `DYNARRAY_DEMO_SHOW_CAPACITY=1` to include length and capacity in
//! each printed state, and `RUST_LOG=dynarray=trace,dynarray_demo=debug`
//! to watch every operation and storage growth on stderr.

use std::io;

use anyhow::Result;
use dynarray_demo::{logging, run_script, DemoConfig, DEMO_SCRIPT};

fn main() -> Result<()> {
    let config = DemoConfig::from_env();
    logging::init(&config);
    tracing::info!(steps = DEMO_SCRIPT.len(), "running demo script");

    let mut out = io::stdout().lock();
    match run_script(DEMO_SCRIPT, &mut out, &config) {
        Ok(array) => {
            tracing::info!(
                len = array.len(),
                capacity = array.capacity(),
                "demo script finished"
            );
            Ok(())
        }
        Err(err) => {
            tracing::error!("demo script failed: {err:#}");
            Err(err)
        }
    }
}
