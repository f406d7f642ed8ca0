use clap::Parser;
use lapin::uri::{AMQPAuthority, AMQPUri, AMQPUserInfo};
use std::time::Duration;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 5672;
pub const DEFAULT_USER: &str = "admin";
pub const DEFAULT_PASS: &str = "admin";
pub const DEFAULT_VHOST: &str = "/";
pub const DEFAULT_QUEUE: &str = "test_queue";
pub const DEFAULT_MANAGEMENT_PORT: u16 = 15672;
pub const DEFAULT_MESSAGE_COUNT: u32 = 5;
pub const DEFAULT_MAX_DRAIN_MESSAGES: u64 = 10_000;
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 5;

#[derive(Parser, Clone, Debug, PartialEq)]
#[command(name = "rmq-smoke", version, about = "Checks that a RabbitMQ broker works end to end")]
pub struct Config {
    /// Broker host
    #[arg(long, env = "RABBITMQ_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// AMQP port
    #[arg(long, env = "RABBITMQ_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// User for AMQP and the management API
    #[arg(long, env = "RABBITMQ_USER", default_value = DEFAULT_USER)]
    pub username: String,

    /// Password for AMQP and the management API
    #[arg(long, env = "RABBITMQ_PASS", default_value = DEFAULT_PASS, hide_env_values = true)]
    pub password: String,

    /// Virtual host to connect to and inspect
    #[arg(long, default_value = DEFAULT_VHOST)]
    pub vhost: String,

    /// Durable queue to publish to and drain
    #[arg(long, default_value = DEFAULT_QUEUE)]
    pub queue: String,

    /// Port of the management HTTP API
    #[arg(long, default_value_t = DEFAULT_MANAGEMENT_PORT)]
    pub management_port: u16,

    /// Number of messages to publish
    #[arg(short = 'n', long = "count", default_value_t = DEFAULT_MESSAGE_COUNT)]
    pub message_count: u32,

    /// Upper bound on messages taken while draining
    #[arg(
        long,
        default_value_t = DEFAULT_MAX_DRAIN_MESSAGES,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub max_drain_messages: u64,

    /// Timeout for the management API request, in seconds
    #[arg(long = "http-timeout", default_value_t = DEFAULT_HTTP_TIMEOUT_SECS)]
    pub http_timeout_secs: u64,

    /// Skip the management API statistics step
    #[arg(long)]
    pub skip_stats: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
            username: DEFAULT_USER.to_owned(),
            password: DEFAULT_PASS.to_owned(),
            vhost: DEFAULT_VHOST.to_owned(),
            queue: DEFAULT_QUEUE.to_owned(),
            management_port: DEFAULT_MANAGEMENT_PORT,
            message_count: DEFAULT_MESSAGE_COUNT,
            max_drain_messages: DEFAULT_MAX_DRAIN_MESSAGES,
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            skip_stats: false,
        }
    }
}

impl Config {
    // Built field by field so credentials never need URL escaping.
    pub fn amqp_uri(&self) -> AMQPUri {
        AMQPUri {
            authority: AMQPAuthority {
                userinfo: AMQPUserInfo {
                    username: self.username.clone(),
                    password: self.password.clone(),
                },
                host: self.host.clone(),
                port: self.port,
            },
            vhost: self.vhost.clone(),
            ..AMQPUri::default()
        }
    }

    pub fn broker_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn management_base(&self) -> String {
        format!("http://{}:{}", self.host, self.management_port)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}



#[cfg(test)]
impl Config {
    pub(crate) fn local(queue: &str) -> Self {
        Self {
            host: test_utils::HOST.to_owned(),
            username: test_utils::USER.to_owned(),
            password: test_utils::PASS.to_owned(),
            queue: queue.to_owned(),
            ..Self::default()
        }
    }
}
