
use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use gestiones_client::config::{API_URL_ENV, ApiBase, DEV_API_BASE};
use gestiones_client::net::api::{ApiClient, ApiError, ListQuery, ReviewDecision};
use gestiones_client::net::auth::{AuthGateway, LoginError};
use gestiones_client::net::transport::ReqwestTransport;
use gestiones_client::net::types::Estado;
use gestiones_client::state::session::{Session, SessionStore};
use gestiones_client::util::pagination::page_window;
use gestiones_client::util::storage::FileStorage;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("login failed: {0}")]
    Login(#[from] LoginError),
    #[error("request failed: {0}")]
    Api(#[from] ApiError),
    #[error("expediente {0} not found")]
    NotFound(String),
    #[error("{0}")]
    InvalidArgument(String),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "gestiones-cli", about = "Expedientes/indicios backend CLI")]
struct Cli {
    #[arg(long, env = API_URL_ENV, default_value = DEV_API_BASE)]
    api_url: String,

    /// Where the session is kept between invocations.
    #[arg(long, env = "GESTIONES_SESSION_FILE", default_value = ".gestiones-session.json")]
    session_file: PathBuf,

    /// Response deadline in seconds (login defaults to 10).
    #[arg(long)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Exchange credentials for a session and store it.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "GESTIONES_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the stored session.
    Logout,
    /// Show the stored session (token redacted).
    Session,
    Expedientes(ListArgs),
    Expediente {
        codigo: String,
    },
    Indicios {
        expediente: String,
        #[command(flatten)]
        list: ListArgs,
    },
    Usuarios(ListArgs),
    /// Approve or reject an expediente (coordinators).
    Review {
        codigo: String,
        #[arg(value_enum)]
        verdict: Verdict,
        #[arg(long)]
        justificacion: Option<String>,
    },
}

#[derive(Args, Debug)]
struct ListArgs {
    #[arg(long, default_value_t = 1)]
    page: u32,
    #[arg(long)]
    q: Option<String>,
    #[arg(long, value_parser = parse_estado)]
    estado: Option<Estado>,
    #[arg(long)]
    activo: Option<bool>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Verdict {
    Approve,
    Reject,
}

fn parse_estado(raw: &str) -> Result<Estado, String> {
    Estado::parse(raw).ok_or_else(|| format!("expected one of pendiente, aprobado, rechazado; got {raw:?}"))
}

impl ListArgs {
    fn to_query(&self) -> ListQuery {
        ListQuery {
            page: self.page,
            search: self.q.clone().unwrap_or_default(),
            estado: self.estado,
            activo: self.activo,
            ..ListQuery::default()
        }
    }
}

fn review_decision(verdict: Verdict, justificacion: Option<&str>) -> Result<ReviewDecision, CliError> {
    match verdict {
        Verdict::Approve => Ok(ReviewDecision::Approve),
        Verdict::Reject => ReviewDecision::reject(justificacion.unwrap_or_default())
            .map_err(|message| CliError::InvalidArgument(message.to_owned())),
    }
}

/// Session as printed by `session`: everything but the token itself.
fn redacted(session: &Session) -> Value {
    serde_json::json!({
        "authenticated": session.is_authenticated(),
        "rol": session.role.map(|r| r.as_str()),
        "id": session.user_id,
        "nombre": session.display_name,
    })
}

struct CliContext {
    api: ApiBase,
    session: SessionStore,
    timeout: Option<Duration>,
}

impl CliContext {
    fn gateway(&self) -> AuthGateway<ReqwestTransport> {
        let gateway = AuthGateway::new(ReqwestTransport::default(), self.api.clone(), self.session.clone());
        match self.timeout {
            Some(timeout) => gateway.with_timeout(timeout),
            None => gateway,
        }
    }

    fn client(&self) -> ApiClient<ReqwestTransport> {
        let client = ApiClient::new(ReqwestTransport::default(), self.api.clone(), self.session.clone());
        match self.timeout {
            Some(timeout) => client.with_timeout(timeout),
            None => client,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let storage = FileStorage::open(&cli.session_file);
    tracing::debug!(path = %storage.path().display(), "session file");
    let ctx = CliContext {
        api: ApiBase::new(&cli.api_url),
        session: SessionStore::restored_from(storage),
        timeout: cli.timeout_secs.map(Duration::from_secs),
    };

    run(&ctx, cli.command).await
}

async fn run(ctx: &CliContext, command: Command) -> Result<(), CliError> {
    match command {
        Command::Login { email, password } => {
            tracing::info!(api = ctx.api.as_str(), "logging in");
            ctx.gateway().login(&email, &password).await?;
            print_json(&redacted(&ctx.session.get_session()))
        }
        Command::Logout => {
            ctx.gateway().logout();
            eprintln!("session cleared");
            Ok(())
        }
        Command::Session => print_json(&redacted(&ctx.session.get_session())),
        Command::Expedientes(args) => {
            let page = ctx.client().list_expedientes(&args.to_query()).await?;
            report_page(args.page, page.total);
            print_json(&serde_json::to_value(&page.rows)?)
        }
        Command::Expediente { codigo } => match ctx.client().get_expediente(&codigo).await? {
            Some(expediente) => print_json(&serde_json::to_value(&expediente)?),
            None => Err(CliError::NotFound(codigo)),
        },
        Command::Indicios { expediente, list } => {
            let page = ctx.client().list_indicios(&expediente, &list.to_query()).await?;
            report_page(list.page, page.total);
            print_json(&serde_json::to_value(&page.rows)?)
        }
        Command::Usuarios(args) => {
            let page = ctx.client().list_usuarios(&args.to_query()).await?;
            report_page(args.page, page.total);
            print_json(&serde_json::to_value(&page.rows)?)
        }
        Command::Review { codigo, verdict, justificacion } => {
            let decision = review_decision(verdict, justificacion.as_deref())?;
            ctx.client().review_expediente(&codigo, &decision).await?;
            eprintln!("expediente {codigo}: {}", decision.estado().as_str());
            Ok(())
        }
    }
}

fn report_page(page: u32, total: u64) {
    let window = page_window(page, gestiones_client::net::api::PAGE_SIZE, total);
    eprintln!(
        "page {}/{} (rows {}-{} of {total})",
        window.page, window.total_pages, window.from, window.to
    );
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
