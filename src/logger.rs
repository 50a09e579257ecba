/// Initialises env_logger. Logging stays off unless `verbose` is set so the
/// console only shows prompts and the summary.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Off
        })
        .init();
}
