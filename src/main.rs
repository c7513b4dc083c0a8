use buildwatch::{
    cli::Cli,
    core::{
        manager::{run_tick, supervisor_loop},
        watcher::TickContext,
    },
    exec::BuildCommand,
    logging::Logger,
    notifications::sender::{MailConfig, SmtpMailer},
};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    Logger::init_logs().await?;

    let mail = MailConfig::from_env()?;
    let mailer = SmtpMailer::new(mail)?;
    let command = BuildCommand::default();

    let ctx = TickContext {
        command: &command,
        notifier: &mailer,
    };

    if cli.once {
        return run_tick(&cli.config, &ctx).await;
    }

    println!(
        "buildwatch started: config {:?}, tick every {}s",
        cli.config, cli.interval
    );
    supervisor_loop(&cli.config, ctx, cli.interval).await;

    Ok(())
}
