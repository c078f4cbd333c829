//! CLI command definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use workly_domain::{GoalId, HierarchyPlacement, HierarchyType, OutputFormat, ProjectId};

/// CLI arguments for workly
#[derive(Parser, Debug)]
#[command(name = "workly")]
#[command(author, version, about = "Workly hierarchy engine - classify tasks, score contributions, plan today")]
#[command(long_about = r#"
Workly places every task in a project/goal tree and reasons about it:
where it sits, how much it contributes to its parents, whether it may be
moved, and what today's plan looks like.

Tasks, projects and goals are read from a workspace snapshot (JSON).

Configuration files are loaded from (in priority order):
1. WORKLY_* environment variables
2. --config <path>     Explicit config file
3. ./workly.toml       Project-level config
4. ~/.config/workly/config.toml   Global config

Example:
  workly path task-42
  workly analyze task-42 --output json
  workly validate task-42 --to full --project p-site --goal g-launch
  workly change task-42 --to independent --dry-run
  workly today
"#)]
pub struct Cli {
    /// Omitted only with --show-config
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Workspace snapshot file (default: [workspace].path or ./workly.json)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub workspace: Option<PathBuf>,

    /// Output format: text or json (default: [output].format or text)
    #[arg(short, long, global = true, value_name = "FORMAT")]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only print errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long, global = true)]
    pub show_config: bool,

    /// Also write diagnostic logs to this file
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print a task's position as a breadcrumb
    Path {
        task_id: String,
    },

    /// Score a task's contribution and list recommendations
    ///
    /// Without a task id, every task in the workspace is analyzed.
    Analyze {
        task_id: Option<String>,
    },

    /// Check whether a task may move to another placement
    Validate {
        task_id: String,

        #[command(flatten)]
        target: TargetArgs,
    },

    /// Build today's plan
    Today,

    /// Move a task within the project/goal tree
    Change {
        task_id: String,

        #[command(flatten)]
        target: TargetArgs,

        /// Validate and show the result without writing it
        #[arg(long)]
        dry_run: bool,
    },
}

/// Target placement of a hierarchy change.
#[derive(Args, Debug, Clone)]
pub struct TargetArgs {
    /// Target hierarchy type (independent, project, goal, full)
    #[arg(long = "to", value_name = "TYPE", value_parser = |s: &str| s.parse::<HierarchyType>())]
    pub hierarchy_type: HierarchyType,

    /// Project id for project or full placements
    #[arg(long, value_name = "ID")]
    pub project: Option<String>,

    /// Goal id for goal or full placements
    #[arg(long, value_name = "ID")]
    pub goal: Option<String>,
}

impl TargetArgs {
    pub fn placement(&self) -> HierarchyPlacement {
        HierarchyPlacement::new(
            self.hierarchy_type,
            self.project.clone().map(ProjectId::from),
            self.goal.clone().map(GoalId::from),
        )
    }
}
