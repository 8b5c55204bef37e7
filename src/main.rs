use anyhow::Context;
use clap::Parser;
use courseinfo::config::{course_file, output};
use courseinfo::utils::{logger, validation::Validate};
use courseinfo::{CliConfig, CourseError, RenderEngine};

fn report(e: &CourseError) -> ! {
    tracing::error!("❌ {}", e);
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(1);
}

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose, config.log_json);

    tracing::info!("Starting courseinfo");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        report(&e);
    }

    let format = config
        .output_format()
        .context("output format passed validation but failed to parse")?;

    let engine = RenderEngine::new(
        course_file::source_for(config.course.as_deref()),
        format.renderer(),
        output::output_for(config.output.as_deref()),
    );

    match engine.run() {
        Ok(destination) => {
            tracing::info!("✅ Render completed ({})", destination);
        }
        Err(e) => report(&e),
    }

    Ok(())
}
