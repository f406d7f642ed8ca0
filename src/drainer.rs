use crate::{config::Config, error::SmokeResult, publisher::declare_queue, session::Session};
use lapin::{
    options::{BasicGetOptions, QueueDeclareOptions},
    types::FieldTable,
    Channel,
};

#[derive(Debug, Clone, PartialEq)]
pub struct DrainReport {
    pub bodies: Vec<String>,
    pub exhausted: bool,
}

impl DrainReport {
    pub fn count(&self) -> usize {
        self.bodies.len()
    }

    pub fn summary(&self) -> String {
        if self.bodies.is_empty() && self.exhausted {
            "⚠️  Aucun message dans la queue".to_owned()
        } else {
            format!("📊 {} message(s) consommé(s) avec succès !", self.count())
        }
    }
}

async fn ready_count(channel: &Channel, queue: &str) -> SmokeResult<u32> {
    let declared = channel
        .queue_declare(
            queue,
            QueueDeclareOptions {
                passive: true,
                ..QueueDeclareOptions::default()
            },
            FieldTable::default(),
        )
        .await?;
    Ok(declared.message_count())
}

/// Takes messages with auto-ack `basic.get` until the queue answers empty or
/// `max_messages` have been taken. In the latter case a passive declare
/// decides `exhausted` without consuming anything more.
pub async fn drain_channel(
    channel: &Channel,
    queue: &str,
    max_messages: u64,
) -> SmokeResult<DrainReport> {
    let mut bodies = Vec::new();

    while (bodies.len() as u64) < max_messages {
        match channel
            .basic_get(queue, BasicGetOptions { no_ack: true })
            .await?
        {
            Some(msg) => {
                let body = String::from_utf8_lossy(&msg.delivery.data).into_owned();
                println!("  ✅ Reçu : {}", body);
                bodies.push(body);
            }
            None => {
                return Ok(DrainReport {
                    bodies,
                    exhausted: true,
                })
            }
        }
    }

    let left = ready_count(channel, queue).await?;
    if left > 0 {
        log::warn!(
            "Stopped draining \"{}\" after {} message(s), {} still ready",
            queue,
            max_messages,
            left
        );
    }
    Ok(DrainReport {
        bodies,
        exhausted: left == 0,
    })
}

pub async fn drain(config: &Config) -> SmokeResult<DrainReport> {
    println!("\n📥 Consommation des messages...\n");

    let session = Session::open(config).await?;
    declare_queue(&session.channel, &config.queue).await?;
    let report = drain_channel(&session.channel, &config.queue, config.max_drain_messages).await?;
    session.close().await?;

    if !report.exhausted {
        println!(
            "\n⚠️  Limite de {} message(s) atteinte, la queue n'est pas vide",
            config.max_drain_messages
        );
    }
    println!("\n{}", report.summary());
    Ok(report)
}

#[cfg(test)]
mod summary {
    use super::*;

    #[test]
    fn reports_consumed_count() {
        let report = DrainReport {
            bodies: vec!["a".to_owned(), "b".to_owned()],
            exhausted: true,
        };

        assert!(report.summary().contains("2 message(s) consommé(s)"));
    }

    #[test]
    fn warns_on_empty_queue() {
        let report = DrainReport {
            bodies: Vec::new(),
            exhausted: true,
        };

        assert!(report.summary().contains("Aucun message"));
    }

    #[test]
    fn empty_but_unfinished_is_not_reported_as_empty_queue() {
        let report = DrainReport {
            bodies: Vec::new(),
            exhausted: false,
        };

        assert!(!report.summary().contains("Aucun message"));
        assert!(report.summary().contains("0 message(s) consommé(s)"));
    }
}
