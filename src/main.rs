use clap::{Parser, Subcommand};
use serde::Serialize;
use uuid::Uuid;
use wiz_adapters::WizardRequest;
use wizflow_rust::logging::init_logging;
use wizflow_rust::{describe_flow, parse_field, AppError, WizardService, CONFIG};

#[derive(Parser)]
#[command(name = "wizflow")]
#[command(about = "Step-by-step onboarding wizard backed by JSON session files")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new session and print its id
    Start,
    /// Render the current step of a session
    Show { session: Uuid },
    /// Submit fields and a navigation intent to the current step
    Submit {
        session: Uuid,

        /// Go back to the previous eligible step
        #[arg(long, conflicts_with_all = ["next", "goto"])]
        back: bool,

        /// Validate the step and advance (default)
        #[arg(long, conflicts_with = "goto")]
        next: bool,

        /// Jump to a step by name (`%root%.company.details`, or `.` to stay)
        #[arg(long, value_name = "STEP")]
        goto: Option<String>,

        /// Fields as key=value (values are parsed as JSON when possible)
        #[arg(value_name = "KEY=VALUE")]
        fields: Vec<String>,
    },
    /// Print the flattened wizard and its definition hash
    Steps,
    /// List stored sessions
    Sessions,
}

fn build_request(back: bool, goto: Option<String>, fields: &[String]) -> Result<WizardRequest, AppError> {
    let mut request = match (back, goto) {
        (true, _) => WizardRequest::back(),
        (false, Some(target)) => WizardRequest::goto(target),
        (false, None) => WizardRequest::next(),
    };
    for raw in fields {
        let (key, value) = parse_field(raw)?;
        request = request.with_field(key, value);
    }
    Ok(request)
}

fn print_json<V: Serialize>(value: &V) -> Result<(), AppError> {
    let text = serde_json::to_string_pretty(value).map_err(wiz_adapters::StoreError::from)?;
    println!("{}", text);
    Ok(())
}

fn run(cli: Cli) -> Result<(), AppError> {
    if let Commands::Steps = cli.command {
        let (names, hash) = describe_flow()?;
        for name in names {
            println!("{}", name);
        }
        println!("definition_hash: {}", hash);
        return Ok(());
    }

    let store = CONFIG.store.open_file_store()?;
    tracing::debug!(dir = %store.dir().display(), "session store opened");
    let service = WizardService::new(store, CONFIG.store.strict_definition);

    match cli.command {
        Commands::Start => {
            let session = service.start()?;
            println!("{}", session.id);
            print_json(&service.show(session.id)?)
        }
        Commands::Show { session } => print_json(&service.show(session)?),
        Commands::Submit { session,
                           back,
                           next: _,
                           goto,
                           fields, } => {
            let request = build_request(back, goto, &fields)?;
            print_json(&service.submit(session, &request)?)
        }
        Commands::Sessions => {
            for id in service.sessions()? {
                println!("{}", id);
            }
            Ok(())
        }
        Commands::Steps => Ok(()),
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = init_logging(&CONFIG) {
        eprintln!("[wizflow] {}", e);
    }
    if let Err(e) = run(cli) {
        tracing::error!(error = %e, "command failed");
        eprintln!("[wizflow] {}", e);
        std::process::exit(e.exit_code());
    }
}
