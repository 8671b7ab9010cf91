use common::config::Config;
use common::logger::init_logger;
use grader::GradingJob;
use std::process;

fn main() {
    // Load configuration and initialize logging
    let config = Config::init(".env");
    init_logger(&config.log_level, &config.log_file);

    log::info!(
        "Starting {}: evaluating {}",
        config.project_name,
        config.submission_dir
    );

    let evaluation = GradingJob::new(&config.submission_dir).evaluate();

    // Stdout carries the report contract; everything else goes to the log.
    print!("{}", evaluation.render());

    process::exit(evaluation.exit_code());
}
