//! compgen's main application entry point and orchestration logic.

use compgen::{
    cli::{get_args, Args},
    error::{default_error_handler, Result},
    generator::generate,
    input::resolve_components,
    logger::init_logger,
    options::collect_options,
    prompt::DialoguerPrompter,
    renderer::MiniJinjaRenderer,
    report::print_summary,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Resolves component names from arguments or a prompt
/// 2. Asks for language, stylesheet and files to generate
/// 3. Writes each component's files
/// 4. Prints the summary
fn run(args: Args) -> Result<()> {
    let prompt = DialoguerPrompter::new();
    let engine = MiniJinjaRenderer::new();
    let options = args.generation_options();

    let components = resolve_components(&prompt, &args.names, &options.output_root)?;
    let selection = collect_options(&prompt, args.language, args.stylesheet)?;

    let written = generate(&engine, &options, &selection, &components)?;

    print_summary(&options.output_root, &written);
    Ok(())
}
