use clap::Parser;
use std::process;

use taskdash::cli;
use taskdash::cli::commands::{Cli, Commands};

fn main() {
    let cli_args = Cli::parse();
    let json_output = cli_args.json;

    let exit_code = match cli_args.command {
        Commands::Init { endpoint } => cli::init::run(&endpoint, json_output),
        Commands::List => cli::task::run_list(json_output),
        Commands::Show { id } => cli::task::run_show(&id, json_output),
        Commands::Add {
            name,
            category,
            priority,
            due_date,
            description,
        } => cli::task::run_add(
            &name,
            &category,
            &priority,
            &due_date,
            description.as_deref(),
            json_output,
        ),
        Commands::Edit {
            id,
            name,
            category,
            priority,
            due_date,
            description,
        } => cli::task::run_edit(
            &id,
            name.as_deref(),
            category.as_deref(),
            priority.as_deref(),
            due_date.as_deref(),
            description.as_deref(),
            json_output,
        ),
        Commands::Done { id } => cli::task::run_toggle(&id, true, json_output),
        Commands::Reopen { id } => cli::task::run_toggle(&id, false, json_output),
        Commands::Delete { id } => cli::task::run_delete(&id, json_output),
        Commands::Generate => cli::generate::run(json_output),
    };

    process::exit(exit_code);
}
