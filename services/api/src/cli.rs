use crate::demo::{
    run_chat, run_portfolio, run_scenario, run_uploads, ChatArgs, PortfolioArgs, ScenarioArgs,
    UploadsArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use ergosight::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "ErgoSight",
    about = "Serve and explore vehicle ingress/egress ergonomics ratings from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print the portfolio summary, rating heatmap and weakest vehicles per profile
    Portfolio(PortfolioArgs),
    /// Predict the rating for proposed design parameter changes
    Scenario(ScenarioArgs),
    /// Ask one of the assistants a series of questions
    Chat(ChatArgs),
    /// Simulate processing of queued STEP uploads
    Uploads(UploadsArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Portfolio(args) => run_portfolio(args),
        Command::Scenario(args) => run_scenario(args),
        Command::Chat(args) => run_chat(args),
        Command::Uploads(args) => run_uploads(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ergosight::workflows::assistant::AssistantKind;
    use ergosight::workflows::catalog::AnthroProfile;
    use ergosight::workflows::scenario::ParameterKey;

    #[test]
    fn no_subcommand_defaults_to_serve() {
        let cli = Cli::try_parse_from(["ergosight"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn scenario_flags_parse_into_typed_values() {
        let cli = Cli::try_parse_from([
            "ergosight",
            "scenario",
            "--profile",
            "senior",
            "--baseline",
            "6.8",
            "--set",
            "sill_height=555",
            "--set",
            "doorWidth=730",
            "--analyze",
            "--seed",
            "7",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Scenario(args)) => {
                assert_eq!(args.profile, Some(AnthroProfile::Senior));
                assert_eq!(args.baseline, Some(6.8));
                assert_eq!(args.set.len(), 2);
                assert_eq!(args.set[1].key, ParameterKey::DoorWidth);
                assert!(args.analyze);
                assert_eq!(args.seed, Some(7));
            }
            other => panic!("expected scenario command, got {other:?}"),
        }
    }

    #[test]
    fn chat_requires_known_assistant() {
        let cli = Cli::try_parse_from(["ergosight", "chat", "--assistant", "cad", "--no-delay", "seat h-point?"])
            .expect("parses");
        match cli.command {
            Some(Command::Chat(args)) => {
                assert_eq!(args.assistant, AssistantKind::Cad);
                assert!(args.no_delay);
                assert_eq!(args.queries, vec!["seat h-point?".to_string()]);
            }
            other => panic!("expected chat command, got {other:?}"),
        }

        assert!(Cli::try_parse_from(["ergosight", "chat", "--assistant", "oracle"]).is_err());
        assert!(Cli::try_parse_from(["ergosight", "scenario", "--baseline", "12"]).is_err());
    }

    #[test]
    fn uploads_collect_queued_files() {
        let cli = Cli::try_parse_from([
            "ergosight",
            "uploads",
            "--add",
            "Door_Ring.step:1048576",
            "--seed",
            "3",
            "--no-delay",
        ])
        .expect("parses");
        match cli.command {
            Some(Command::Uploads(args)) => {
                assert_eq!(args.add.len(), 1);
                assert_eq!(args.add[0].name, "Door_Ring.step");
                assert_eq!(args.add[0].size_bytes, 1_048_576);
                assert_eq!(args.ticks, 40);
                assert_eq!(args.seed, Some(3));
            }
            other => panic!("expected uploads command, got {other:?}"),
        }

        assert!(Cli::try_parse_from(["ergosight", "uploads", "--add", "door.stp"]).is_err());
    }
}
