pub mod config;
pub mod drainer;
pub mod error;
pub mod inspector;
pub mod probe;
pub mod publisher;
pub mod run;
pub mod session;

pub use config::Config;
pub use drainer::{drain, DrainReport};
pub use error::{InspectError, SmokeError, SmokeResult};
pub use inspector::{fetch_queue_stats, inspect, QueueInfo, QueueStats};
pub use probe::{probe, try_connect};
pub use publisher::{publish, PublishReport};
pub use run::{run, RunReport};
