use clap::Parser;
use rmq_smoke::{run, Config, SmokeError};
use std::process::ExitCode;

const RULE_WIDTH: usize = 60;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    let config = Config::parse();
    let rule = "=".repeat(RULE_WIDTH);

    println!("{}", rule);
    println!("🐰 Test RabbitMQ - {}", config.broker_addr());
    println!("{}", rule);

    match run(&config).await {
        Ok(_) => {
            println!("\n{}", rule);
            println!("✅ Tous les tests sont passés avec succès !");
            println!("{}", rule);
            ExitCode::SUCCESS
        }
        Err(SmokeError::Unreachable(_)) => {
            println!("\n❌ Impossible de se connecter. Vérifiez que RabbitMQ est démarré.");
            ExitCode::FAILURE
        }
        Err(e) => {
            log::error!("{}", e);
            println!("\n❌ {}", e);
            ExitCode::FAILURE
        }
    }
}
