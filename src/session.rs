use crate::config::Config;
use lapin::{Channel, Connection, ConnectionProperties};
use tokio_amqp::*;

pub(crate) const REPLY_SUCCESS: u16 = 200;

pub async fn connect(config: &Config) -> Result<Connection, lapin::Error> {
    log::debug!(
        "Connecting to amqp://{}@{}/{}",
        config.username,
        config.broker_addr(),
        config.vhost
    );
    Connection::connect_uri(
        config.amqp_uri(),
        ConnectionProperties::default().with_tokio(),
    )
    .await
}

pub struct Session {
    conn: Connection,
    pub channel: Channel,
}

impl Session {
    pub async fn open(config: &Config) -> Result<Self, lapin::Error> {
        let conn = connect(config).await?;
        let channel = conn.create_channel().await?;

        Ok(Self { conn, channel })
    }

    pub async fn close(self) -> Result<(), lapin::Error> {
        self.channel.close(REPLY_SUCCESS, "OK").await?;
        self.conn.close(REPLY_SUCCESS, "OK").await?;
        log::debug!("Session closed");
        Ok(())
    }
}
