use {
    clap::Parser,
    deployer::arguments::Arguments,
    std::process::ExitCode,
};

#[tokio::main]
async fn main() -> ExitCode {
    let args = match Arguments::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // Help and version requests are reported as errors by clap.
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    observe::tracing::initialize(&args.observe_config());
    tracing::info!("running deployer with validated arguments:\n{}", args);
    match deployer::run(args).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(?err, "deployment failed");
            ExitCode::FAILURE
        }
    }
}
