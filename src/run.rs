use crate::{
    config::Config,
    drainer::{drain, DrainReport},
    error::{SmokeError, SmokeResult},
    inspector::{inspect, print_queue_info, QueueInfo},
    probe::probe,
    publisher::{publish, PublishReport},
};

#[derive(Debug)]
pub struct RunReport {
    pub published: PublishReport,
    pub stats: Option<QueueInfo>,
    pub drained: DrainReport,
}

pub async fn run(config: &Config) -> SmokeResult<RunReport> {
    if !probe(config).await {
        return Err(SmokeError::Unreachable(config.broker_addr()));
    }

    let published = publish(config, config.message_count).await?;

    let stats = if config.skip_stats {
        log::info!("Skipping management API statistics");
        None
    } else {
        let info = inspect(config).await;
        print_queue_info(&info);
        Some(info)
    };

    let drained = drain(config).await?;

    Ok(RunReport {
        published,
        stats,
        drained,
    })
}
