use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use clap::{Args as ClapArgs, Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use hostbot_common::models::{FormSchema, IntakeConfig, SchemaKind};
use hostbot_common::models::config::DEFAULT_INTAKE_ENDPOINT;
use hostbot_common::traits::Notifier;
use hostbot_core::services::TracingNotifier;
use hostbot_core::{IntakeForm, SubmissionService};

mod console;
use console::{read_secret_line, ConsoleNotifier};

#[derive(Parser, Debug)]
#[command(name = "hostbot")]
#[command(author, version, about = "Submit a bot token to the hosting intake service")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate the fields and submit them once
    Submit(SubmitArgs),
    /// Print the fields a schema collects
    Schema {
        #[arg(long, env = "HOSTBOT_SCHEMA", default_value = "minimal")]
        schema: SchemaKind,
    },
}

#[derive(ClapArgs, Debug)]
struct SubmitArgs {
    /// Intake endpoint the form POSTs to
    #[arg(long, env = "HOSTBOT_ENDPOINT", default_value = DEFAULT_INTAKE_ENDPOINT)]
    endpoint: String,

    /// Field set: "minimal" or "extended"
    #[arg(long, env = "HOSTBOT_SCHEMA", default_value = "minimal")]
    schema: SchemaKind,

    /// Give up on the request after this many seconds (no limit by default)
    #[arg(long, env = "HOSTBOT_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    /// Discord bot token
    #[arg(long, env = "HOSTBOT_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Read the bot token from the first line of stdin (wins over --token)
    #[arg(long, default_value = "false")]
    token_stdin: bool,

    /// Discord user ID (extended schema)
    #[arg(long, env = "HOSTBOT_USER_ID")]
    user_id: Option<String>,

    /// Authorized account (extended schema)
    #[arg(long, env = "HOSTBOT_ACCESS_ACCOUNT")]
    access_account: Option<String>,

    /// Contact email (extended schema, optional)
    #[arg(long, env = "HOSTBOT_EMAIL")]
    email: Option<String>,

    /// Report the result through the log only
    #[arg(long, default_value = "false")]
    headless: bool,
}

impl SubmitArgs {
    fn config(&self) -> IntakeConfig {
        IntakeConfig {
            endpoint: self.endpoint.clone(),
            schema: self.schema,
            request_timeout: self.timeout_secs.map(Duration::from_secs),
        }
    }

    /// `(field name, value)` pairs for every value that was supplied.
    fn field_values(&self) -> anyhow::Result<Vec<(&'static str, String)>> {
        let token = if self.token_stdin {
            Some(read_secret_line()?)
        } else {
            self.token.clone()
        };

        Ok([
            ("token", token),
            ("userId", self.user_id.clone()),
            ("accessAccount", self.access_account.clone()),
            ("email", self.email.clone()),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v)))
        .collect())
    }
}

fn init_tracing() {
    let filter = EnvFilter::from_default_env()
        .add_directive("hostbot=info".parse().unwrap_or_default());
    let sub = fmt().with_env_filter(filter).with_writer(std::io::stderr).finish();
    if tracing::subscriber::set_global_default(sub).is_err() {
        eprintln!("tracing subscriber already installed");
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    init_tracing();
    let args = Args::parse();

    let result = match args.command {
        Command::Submit(submit) => run_submit(submit).await,
        Command::Schema { schema } => {
            print_schema(&FormSchema::for_kind(schema));
            Ok(true)
        }
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("hostbot error: {:?}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run_submit(args: SubmitArgs) -> anyhow::Result<bool> {
    let config = args.config();
    let notifier: Arc<dyn Notifier> = if args.headless {
        Arc::new(TracingNotifier)
    } else {
        Arc::new(ConsoleNotifier)
    };
    let controller = SubmissionService::from_config(&config, notifier)?;
    let form = IntakeForm::new(controller);
    info!("hostbot submit: schema={}, endpoint={}", config.schema, config.endpoint);

    for (name, value) in args.field_values()? {
        if form.schema().field(name).is_none() {
            info!("Ignoring value for '{}' (not part of the {} schema)", name, config.schema);
            continue;
        }
        form.edit(name, value).await?;
    }

    // The notifier already told the user what happened.
    Ok(form.submit().await.is_success())
}

fn print_schema(schema: &FormSchema) {
    println!("schema: {}", schema.kind);
    for field in &schema.fields {
        println!(
            "  {:<14} {:<15} {:<10} {}",
            field.name,
            field.label,
            field.kind.to_string(),
            if field.required { "required" } else { "optional" }
        );
    }
}
