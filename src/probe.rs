use crate::{config::Config, error::SmokeResult, session};

pub async fn try_connect(config: &Config) -> SmokeResult<()> {
    let conn = session::connect(config).await?;
    conn.close(session::REPLY_SUCCESS, "OK").await?;
    Ok(())
}

pub async fn probe(config: &Config) -> bool {
    println!("🔌 Test de connexion à RabbitMQ ({})...", config.broker_addr());
    match try_connect(config).await {
        Ok(()) => {
            println!("✅ Connexion réussie !");
            true
        }
        Err(e) => {
            println!("❌ Erreur de connexion : {}", e);
            log::debug!("Probe of {} failed: {:?}", config.broker_addr(), e);
            false
        }
    }
}
