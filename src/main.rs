use log::error;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::io;
use std::process::ExitCode;
use structopt::StructOpt;
use structopt_flags::LogLevel;

use terrain_collapse::app::TerrainApp;
use terrain_collapse::cli::Opt;

fn main() -> ExitCode {
    let opt = Opt::from_args();

    if let Some(shell) = opt.completions {
        Opt::clap().gen_completions_to("terrain-collapse", shell, &mut io::stdout());
        return ExitCode::SUCCESS;
    }

    if let Err(err) = TermLogger::init(
        opt.verbose.get_level_filter(),
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ) {
        eprintln!("Failed to initialise logger: {}", err);
    }

    let config = match opt.to_app_config() {
        Ok(config) => config,
        Err(err) => {
            error!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    match TerrainApp::new(config).run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
