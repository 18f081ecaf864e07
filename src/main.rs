use clap::error::ErrorKind;
use clap::CommandFactory;
use clap::Parser;

use exe2com::cli::Args;
use exe2com::cli::DOS_HELP_SWITCH;

fn main() {
    env_logger::init();

    if std::env::args().nth(1).as_deref() == Some(DOS_HELP_SWITCH) {
        if Args::command().print_help().is_err() {
            std::process::exit(1);
        }
        std::process::exit(0);
    }

    // clap exits with status 2 on errors by default; this tool uses 1 for
    // every failure, including missing arguments
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err)
            if matches!(
                err.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            ) =>
        {
            let _ = err.print();
            std::process::exit(0);
        }
        Err(err) => {
            let _ = err.print();
            std::process::exit(1);
        }
    };

    if let Err(err) = exe2com::run(args) {
        eprintln!("ERROR: {err:#}");
        std::process::exit(1);
    }
}
