use kapso_observe::context::Environment;
use kapso_observe::status::ExitStatus;
use kapso_observe::logging;

/// Entry point - sets up logging and calls core::run()
///
/// Returns ExitStatus directly, which implements std::process::Termination.
fn main() -> ExitStatus {
    let env = Environment::init();
    logging::init(&env.vars);

    let args: Vec<String> = std::env::args().collect();
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();

    kapso_observe::core::run(args, &env, &mut stdout.lock(), &mut stderr.lock())
}
