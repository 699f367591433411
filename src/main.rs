//! zero's application entry point.
//! Parses arguments, gathers options and runs the generator.

use zero::{
    cli::{get_args, print_help_with_example, Command, CreateArgs},
    error::{default_error_handler, Result},
    generator::{Generator, ProjectTarget},
    post_gen::SystemCommandRunner,
    prompt::{collect_config, DefaultsPrompter, DialoguerPrompter, Prompter},
    reporter::{ConsoleReporter, Reporter},
    selector::templates_root,
    validate::validate_project_name,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Off
        })
        .init();

    match args.command {
        Some(Command::Create(create_args)) => {
            let reporter = ConsoleReporter::new();
            if let Err(err) = run(&reporter, create_args) {
                default_error_handler(&reporter, err);
            }
        }
        None => print_help_with_example(),
    }
}

/// Runs `zero create`.
///
/// The name and destination are checked before any prompt so that those
/// failures happen without asking anything.
fn run(reporter: &dyn Reporter, args: CreateArgs) -> Result<()> {
    reporter.section("zero - creating your project");

    validate_project_name(&args.name)?;
    let target = ProjectTarget::in_current_dir(&args.name)?;
    target.ensure_absent()?;

    let prompter: Box<dyn Prompter> = if args.yes {
        Box::new(DefaultsPrompter)
    } else {
        Box::new(DialoguerPrompter::new())
    };
    let config = collect_config(&*prompter, &args)?;

    let runner = SystemCommandRunner::new();
    let generator = Generator::new(
        &config,
        target,
        templates_root(args.templates.clone()),
        reporter,
        &runner,
    );

    generator.generate()?;
    Ok(())
}
