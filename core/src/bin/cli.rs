use clap::{Parser, Subcommand, ValueEnum};
use pulpit_core::{
	config::{default_data_dir, AppConfig},
	infra::{
		db::{
			migration::planned_tables,
			schema::{self, SchemaOptions},
		},
		logging,
	},
	Database,
};
use sea_orm::DbBackend;
use std::path::PathBuf;
use tracing::error;

#[derive(Parser, Debug)]
#[command(name = "pulpit", about = "Apply and inspect the pulpit schema migrations")]
struct Args {
	/// Path to pulpit data directory
	#[arg(long, env = "PULPIT_DATA_DIR")]
	data_dir: Option<PathBuf>,

	/// Database to migrate, overrides the configured one
	#[arg(long, env = "DATABASE_URL")]
	database_url: Option<String>,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Apply pending migrations
	Up {
		/// Only apply this many
		#[arg(short = 'n', long)]
		steps: Option<u32>,
	},
	/// Roll back applied migrations
	Down {
		#[arg(short = 'n', long, default_value_t = 1)]
		steps: u32,
	},
	/// List migrations and whether they are applied
	Status,
	/// Drop all tables and reapply every migration
	Fresh,
	/// Roll back every migration, then reapply them
	Refresh,
	/// Roll back every migration
	Reset,
	/// Print the DDL each migration runs, without connecting
	Plan {
		#[arg(long, value_enum, default_value_t = Backend::Sqlite)]
		backend: Backend,
	},
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Backend {
	Sqlite,
	Postgres,
	Mysql,
}

impl From<Backend> for DbBackend {
	fn from(backend: Backend) -> Self {
		match backend {
			Backend::Sqlite => DbBackend::Sqlite,
			Backend::Postgres => DbBackend::Postgres,
			Backend::Mysql => DbBackend::MySql,
		}
	}
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	let args = Args::parse();

	let data_dir = match args.data_dir {
		Some(dir) => dir,
		None => default_data_dir()?,
	};
	let config = AppConfig::load_from(&data_dir)?;
	let _guard = logging::init(&config.logs_dir(), &config.log_level)?;
	schema::install(config.schema.clone())?;

	let url = args
		.database_url
		.clone()
		.unwrap_or_else(|| config.database_url());

	if let Err(e) = run(args.command, &url, &config.schema).await {
		error!("{e:#}");
		return Err(e);
	}

	Ok(())
}

async fn run(command: Command, url: &str, options: &SchemaOptions) -> anyhow::Result<()> {
	let connect = || Database::connect(url);

	match command {
		Command::Plan { backend } => print_plan(backend.into(), options),
		Command::Up { steps } => connect().await?.up(steps).await?,
		Command::Down { steps } => connect().await?.down(Some(steps)).await?,
		Command::Fresh => connect().await?.fresh().await?,
		Command::Refresh => connect().await?.refresh().await?,
		Command::Reset => connect().await?.reset().await?,
		Command::Status => {
			for state in connect().await?.status().await? {
				let marker = if state.applied { "applied" } else { "pending" };
				println!("{:<8} {}", marker, state.name);
			}
		}
	}

	Ok(())
}

fn print_plan(backend: DbBackend, options: &SchemaOptions) {
	for (migration, tables) in planned_tables() {
		println!("-- {migration}");
		for table in tables {
			for statement in table.to_sql(backend, options) {
				println!("{statement};");
			}
		}
		println!();
	}
}
