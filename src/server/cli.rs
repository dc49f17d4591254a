//! Command-line interface of the `slotlist` binary.

use clap::{Parser, Subcommand};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    config::Config,
    error::AppError,
    service::{
        import::{ImportOutcome, ImportService},
        merge::{MergeOutcome, MergeService},
    },
    startup,
};

#[derive(Debug, Parser)]
#[command(name = "slotlist", version, about = "Mission planning and slotting API")]
pub struct Cli {
    /// Defaults to `serve`
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP API
    Serve,
    /// Apply pending database migrations and exit
    Migrate,
    /// Import a mission from the legacy slotlist API
    ImportMission {
        /// Slug of the mission on the legacy API
        slug: String,
        /// Local user to own the mission instead of the legacy creator
        #[arg(long)]
        creator_uid: Option<Uuid>,
        /// Print a preview without writing anything
        #[arg(long)]
        dry_run: bool,
    },
    /// Fold imported placeholder users into real users sharing their nickname
    MergeDuplicateUsers {
        /// Only report the duplicate groups
        #[arg(long)]
        dry_run: bool,
        /// Merge every unambiguous group
        #[arg(long)]
        auto_merge: bool,
    },
}

impl Cli {
    pub async fn run(self, config: Config) -> Result<(), AppError> {
        match self.command.unwrap_or(Command::Serve) {
            Command::Serve => {
                let db = startup::connect_to_database(&config).await?;
                startup::serve(config, db).await
            }
            Command::Migrate => {
                let db = sea_orm::Database::connect(config.database_url.as_str()).await?;
                startup::run_migrations(&db).await
            }
            Command::ImportMission {
                slug,
                creator_uid,
                dry_run,
            } => {
                let db = startup::connect_to_database(&config).await?;
                import_mission(&db, &config, &slug, creator_uid, dry_run).await
            }
            Command::MergeDuplicateUsers {
                dry_run,
                auto_merge,
            } => {
                let db = startup::connect_to_database(&config).await?;
                merge_duplicate_users(&db, auto_merge && !dry_run).await
            }
        }
    }
}

async fn import_mission(
    db: &DatabaseConnection,
    config: &Config,
    slug: &str,
    creator_uid: Option<Uuid>,
    dry_run: bool,
) -> Result<(), AppError> {
    let http_client = startup::setup_reqwest_client()?;

    let outcome = ImportService::new(db, &http_client, &config.legacy_api_url)
        .import(slug, creator_uid, dry_run)
        .await?;

    match outcome {
        ImportOutcome::Preview(preview) => {
            let json = serde_json::to_string_pretty(&preview)
                .map_err(|e| AppError::InternalError(format!("Failed to render preview: {}", e)))?;
            println!("{}", json);
        }
        ImportOutcome::Imported(mission) => {
            println!(
                "Imported mission '{}' ({}) as {}",
                mission.title, mission.slug, mission.uid
            );
        }
    }

    Ok(())
}

async fn merge_duplicate_users(db: &DatabaseConnection, apply: bool) -> Result<(), AppError> {
    let report = MergeService::new(db).merge_duplicates(apply).await?;

    if report.groups.is_empty() {
        println!("No duplicate nicknames found");
        return Ok(());
    }

    for group in &report.groups {
        println!("{} ({} users)", group.nickname, group.users.len());
        for duplicate in &group.users {
            println!(
                "  {} {} [{}] slots: {}, registrations: {}",
                duplicate.user.uid,
                duplicate.user.steam_id,
                if duplicate.user.is_imported() {
                    "imported"
                } else {
                    "real"
                },
                duplicate.assigned_slots,
                duplicate.registrations
            );
        }

        let verdict = match &group.outcome {
            MergeOutcome::Mergeable { target, sources } => {
                format!("would merge {} user(s) into {}", sources.len(), target)
            }
            MergeOutcome::Merged { target, sources } => {
                format!("merged {} user(s) into {}", sources.len(), target)
            }
            MergeOutcome::MultipleReal => "skipped: multiple real users".to_string(),
            MergeOutcome::AllImported => "skipped: only imported users".to_string(),
        };
        println!("  -> {}", verdict);
    }

    println!(
        "{} group(s), {} user(s) {}, {} group(s) skipped",
        report.groups.len(),
        report.merged_users(),
        if apply { "merged" } else { "mergeable" },
        report.skipped_groups()
    );
    if !apply {
        println!("Run with --auto-merge to apply");
    }

    Ok(())
}
