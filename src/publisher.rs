use crate::{config::Config, error::SmokeResult, session::Session};
use lapin::{
    options::{BasicPublishOptions, QueueDeclareOptions},
    types::FieldTable,
    BasicProperties, Channel,
};

const PERSISTENT: u8 = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct PublishReport {
    pub bodies: Vec<String>,
}

impl PublishReport {
    pub fn count(&self) -> usize {
        self.bodies.len()
    }

    pub fn summary(&self) -> String {
        format!("📊 {} messages publiés avec succès !", self.count())
    }
}

pub fn message_body(seq: u32) -> String {
    format!("Test message {}", seq)
}

pub async fn declare_queue(channel: &Channel, queue: &str) -> SmokeResult<()> {
    let declared = channel
        .queue_declare(
            queue,
            QueueDeclareOptions {
                durable: true,
                exclusive: false,
                auto_delete: false,
                ..QueueDeclareOptions::default()
            },
            FieldTable::default(),
        )
        .await?;
    log::debug!(
        "Queue \"{}\" declared, {} message(s) ready",
        queue,
        declared.message_count()
    );
    Ok(())
}

pub async fn send_message(channel: &Channel, routing_key: &str, body: &str) -> SmokeResult<()> {
    // No confirm select on the channel, so the returned confirm is not awaited.
    channel
        .basic_publish(
            "",
            routing_key,
            BasicPublishOptions::default(),
            body.as_bytes().to_vec(),
            BasicProperties::default()
                .with_content_type("text/plain".into())
                .with_delivery_mode(PERSISTENT),
        )
        .await?;
    Ok(())
}

pub async fn publish(config: &Config, count: u32) -> SmokeResult<PublishReport> {
    println!("\n📤 Publication de {} messages...", count);

    let session = Session::open(config).await?;
    declare_queue(&session.channel, &config.queue).await?;

    let mut bodies = Vec::new();
    for seq in 1..=count {
        let body = message_body(seq);
        send_message(&session.channel, &config.queue, &body).await?;
        println!("  ✅ Envoyé : {}", body);
        bodies.push(body);
    }

    session.close().await?;

    let report = PublishReport { bodies };
    println!("{}", report.summary());
    Ok(report)
}
