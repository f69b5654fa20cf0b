use std::path::PathBuf;

use clap::{Parser, Subcommand};
use neuroassess::{
    config::{Settings, log_filter},
    repl,
    schema_util::derive_input_schema,
    session::Session,
    types::{patient::PatientRecord, prompts::format_analysis_prompt, transcript::Transcript},
};
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "neuroassess")]
#[command(about = "Disease progression analysis for neurodegenerative disorders")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a patient record pre-filled with the form defaults
    Template,
    /// Print the JSON schema of a patient record
    Schema,
    /// Print the analysis prompt for a patient record without sending it
    Prompt {
        /// Patient record (JSON)
        patient: PathBuf,
    },
    /// Analyze a patient record once and print the report
    Analyze {
        /// Patient record (JSON)
        patient: PathBuf,
    },
    /// Interactive session with follow-up questions
    Chat {
        /// Analyze this patient record before the first prompt
        #[arg(long)]
        patient: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(log_filter(
            std::env::var(tracing_subscriber::EnvFilter::DEFAULT_ENV)
                .ok()
                .as_deref(),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Template => {
            println!("{}", PatientRecord::default().to_json_pretty()?);
        }
        Commands::Schema => {
            let schema = derive_input_schema::<PatientRecord>()?;
            println!("{}", serde_json::to_string_pretty(&schema)?);
        }
        Commands::Prompt { patient } => {
            let record = repl::load_record(&patient).await?;
            print!("{}", format_analysis_prompt(&Transcript::new(), &record));
        }
        Commands::Analyze { patient } => {
            let record = repl::load_record(&patient).await?;
            let mut session = Session::new(Settings::from_env()?.completion_client()?);
            println!("{}", session.analyze(&record).await?);
        }
        Commands::Chat { patient } => {
            let settings = Settings::from_env()?;
            tracing::debug!(?settings, "starting chat");
            let mut session = Session::new(settings.completion_client()?);

            if let Some(patient) = patient {
                let record = repl::load_record(&patient).await?;
                println!("{}", session.analyze(&record).await?);
            }

            repl::run(
                &mut session,
                BufReader::new(tokio::io::stdin()),
                tokio::io::stdout(),
            )
            .await?;
        }
    }

    Ok(())
}
