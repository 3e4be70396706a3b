//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the global `tracing` subscriber: compact output without
//! module paths (`with_target(false)`), filtered by `RUST_LOG` and defaulting to `info`.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup, shutdown, and final store size
//! - **Store Operations**: Create, Get, and technology Actions, keyed by username
//! - **HTTP**: one span per request, plus an error log for every 500
//!
//! ```bash
//! # Show every request sent to the actor
//! RUST_LOG=debug cargo run
//!
//! # Only warnings and errors
//! RUST_LOG=warn cargo run
//! ```
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO Actor started entity_type="User"
//! INFO Listening addr=0.0.0.0:3000
//! INFO Created entity_type="User" key=alice size=1
//! INFO Action ok entity_type="User" key=alice
//! ```

use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
