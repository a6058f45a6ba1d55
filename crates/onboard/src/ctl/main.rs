//! onboardctl - submission CLI for the onboarding profile server
//!
//! Validates survey drafts locally with the wizard's rules and submits them,
//! and reads profiles back for inspection.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use serde::Serialize;

use onboard::client::{DEFAULT_SERVER_URL, ProfileClient};
use onboard::draft::{
    CAREER_CATEGORIES, CLASS_YEARS, GOAL_OPTIONS, ProfileDraft, WizardStep, suggested_skills,
};
use onboard::profile::SkillType;

fn main() -> ExitCode {
    if let Err(err) = try_main() {
        let _ = writeln!(io::stderr(), "Error: {err:?}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

#[tokio::main]
async fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let client = ProfileClient::new(&cli.server);

    match cli.command {
        Command::Status => handle_status(&client, cli.json).await,
        Command::Submit { file, no_validate } => {
            handle_submit(&client, file, no_validate, cli.json).await
        }
        Command::Get { email } => handle_get(&client, &email, cli.json).await,
        Command::List => handle_list(&client, cli.json).await,
        Command::Options => handle_options(cli.json),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "onboardctl",
    author,
    version,
    about = "Submission CLI for the onboarding profile server."
)]
struct Cli {
    /// Profile server URL
    #[arg(long, short = 's', default_value = DEFAULT_SERVER_URL, env = "ONBOARD_SERVER_URL")]
    server: String,

    /// Output machine-readable JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check server status
    Status,

    /// Submit a survey draft read from a JSON file ("-" for stdin)
    Submit {
        /// Draft file in the submission body format
        #[arg(long, short = 'f', value_name = "PATH")]
        file: PathBuf,
        /// Skip the wizard's step checks and send the draft as-is
        #[arg(long)]
        no_validate: bool,
    },

    /// Show a profile with its interests, skills and goals
    Get {
        /// Profile email
        email: String,
    },

    /// List all profiles, newest first
    List,

    /// Print the survey's option catalogs
    Options,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).context("serializing output")?
    );
    Ok(())
}

async fn handle_status(client: &ProfileClient, json: bool) -> Result<()> {
    let health = client.health().await?;
    if json {
        print_json(&health)?;
    } else {
        println!(
            "Server at {}: {} ({})",
            client.base_url(),
            health.status,
            health.message
        );
    }
    Ok(())
}

fn read_draft(file: &Path) -> Result<ProfileDraft> {
    let text = if file.as_os_str() == "-" {
        io::read_to_string(io::stdin()).context("reading draft from stdin")?
    } else {
        fs::read_to_string(file).with_context(|| format!("reading draft {}", file.display()))?
    };
    serde_json::from_str(&text).context("parsing draft JSON")
}

async fn handle_submit(
    client: &ProfileClient,
    file: PathBuf,
    no_validate: bool,
    json: bool,
) -> Result<()> {
    let draft = read_draft(&file)?;

    if !no_validate {
        draft
            .validate()
            .map_err(|e| anyhow!("{} step: {}", e.step().label(), e))?;
    }

    let response = client.submit(&draft).await?;
    if json {
        print_json(&response)?;
    } else {
        println!("{} (user id {})", response.message, response.user_id);
    }
    Ok(())
}

async fn handle_get(client: &ProfileClient, email: &str, json: bool) -> Result<()> {
    let Some(detail) = client.get_profile(email).await? else {
        return Err(anyhow!("no profile for {}", email));
    };

    if json {
        return print_json(&detail);
    }

    let profile = &detail.profile;
    let name = [profile.first_name.as_deref(), profile.last_name.as_deref()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ");
    println!("{} <{}>", name, profile.email);
    println!("  id:         {}", profile.id);
    println!("  class year: {}", profile.class_year);
    println!("  updated:    {}", profile.updated_at);
    println!("  interests:");
    for interest in &detail.interests {
        println!("    - {}", interest);
    }
    println!("  skills:");
    for entry in &detail.skills {
        println!("    - {} ({})", entry.skill, entry.kind);
    }
    println!("  goals:");
    for goal in &detail.goals {
        println!("    - {}", goal);
    }
    Ok(())
}

async fn handle_list(client: &ProfileClient, json: bool) -> Result<()> {
    let profiles = client.list_profiles().await?;
    if json {
        return print_json(&profiles);
    }

    if profiles.is_empty() {
        println!("No profiles");
        return Ok(());
    }
    for p in &profiles {
        println!(
            "{:>5}  {:<32}  {:<10}  {}",
            p.id, p.email, p.class_year, p.created_at
        );
    }
    Ok(())
}

#[derive(Serialize)]
struct Options {
    steps: Vec<&'static str>,
    class_years: &'static [&'static str],
    career_categories: &'static [onboard::draft::CareerCategory],
    goals: &'static [onboard::draft::GoalOption],
    technical_skills: &'static [&'static str],
    soft_skills: &'static [&'static str],
}

fn handle_options(json: bool) -> Result<()> {
    let options = Options {
        steps: WizardStep::ALL.iter().map(|s| s.label()).collect(),
        class_years: &CLASS_YEARS,
        career_categories: &CAREER_CATEGORIES,
        goals: &GOAL_OPTIONS,
        technical_skills: suggested_skills(SkillType::Technical),
        soft_skills: suggested_skills(SkillType::Soft),
    };

    if json {
        return print_json(&options);
    }

    println!("Steps: {}", options.steps.join(" -> "));
    println!("Class years: {}", options.class_years.join(", "));
    println!("Career interests:");
    for category in options.career_categories {
        println!("  {}: {}", category.category, category.roles.join(", "));
    }
    println!("Goals:");
    for goal in options.goals {
        println!("  {} - {}", goal.label, goal.description);
    }
    println!("Technical skills: {}", options.technical_skills.join(", "));
    println!("Soft skills: {}", options.soft_skills.join(", "));
    Ok(())
}
