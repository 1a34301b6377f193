//! Connection and pool defaults.

use std::time::Duration;

/// Default PostgreSQL port.
pub const N_PORT_DEFAULT: u16 = 5432;
/// Connections opened eagerly when the pool is built.
pub const N_POOL_MIN_DEFAULT: u32 = 1;
/// Upper bound on pooled connections.
pub const N_POOL_MAX_DEFAULT: u32 = 10;
/// How long a checkout waits for a free connection.
pub const DUR_CONNECTION_TIMEOUT_DEFAULT: Duration = Duration::from_secs(30);
/// Characters of query text echoed into logs.
pub const N_LEN_QUERY_PREVIEW: usize = 100;
