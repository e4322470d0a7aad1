use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use gittable::cli::{run_tag_version, TagVersionArgs};
use gittable::config;
use gittable::environment::SanitizedEnv;
use gittable::process::SystemRunner;
use gittable::ui;

#[derive(clap::Parser)]
#[command(
    name = "tag-version",
    version,
    about = "Tag your repo with the package version, if a tag for that version doesn't already exist"
)]
struct Args {
    #[arg(
        default_value = ".",
        help = "Your project directory. If not provided, the current directory will be used"
    )]
    directory: PathBuf,

    #[arg(
        short,
        long,
        default_value = "",
        help = "The tag message. If not provided, the new version number is used"
    )]
    message: String,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(short, long, help = "Log each step to stderr")]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    ui::init_logging(args.verbose);

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let env = SanitizedEnv::from_process(&config.environment.strip);
    let workflow_args = TagVersionArgs {
        directory: args.directory,
        message: args.message,
    };

    let outcome = match run_tag_version(&workflow_args, &config, &SystemRunner::new(), &env) {
        Ok(outcome) => outcome,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    if args.verbose {
        ui::display_tag_outcome(&outcome);
    }
    println!("{}", outcome.version);

    Ok(())
}
