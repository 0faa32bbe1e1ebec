use clap::Parser;
use log::{error, info};
use std::env;

#[derive(Debug, Parser)]
#[command(version, author, about = "Complement VCF with unknown genotype")]
pub struct Cli {
    #[arg(long = "verbose", help = "be verbose")]
    verbose: bool,
    #[arg(long = "debug", help = "enable debugging")]
    debug: bool,
    #[command(flatten)]
    command: fakegt::AddFakeGenotype,
}

impl Cli {
    fn log_level(&self) -> Option<&'static str> {
        if self.debug {
            Some("debug")
        } else if self.verbose {
            Some("info")
        } else {
            None
        }
    }
}

const EXIT_FAILURE: i32 = 1;

/// `--help` and `--version` succeed, any other parse error is a usage failure.
fn exit_code(e: &clap::Error) -> i32 {
    if e.use_stderr() {
        EXIT_FAILURE
    } else {
        0
    }
}

fn main() {
    let matches = match Cli::try_parse() {
        Ok(x) => x,
        Err(e) => {
            let _ = e.print();
            std::process::exit(exit_code(&e));
        }
    };

    match matches.log_level() {
        Some(level) => env::set_var("RUST_LOG", level),
        None => {
            if env::var("RUST_LOG").is_err() {
                env::set_var("RUST_LOG", "warn")
            }
        }
    }

    pretty_env_logger::init();

    if let Err(e) = matches.command.run() {
        error!("{:#}", e);
        std::process::exit(EXIT_FAILURE);
    }

    info!("Successful program exit");
}

#[cfg(test)]
mod test {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli() {
        Cli::command().debug_assert();

        let cli = Cli::parse_from(["add_fake_gt", "-i", "in.vcf.gz", "-s", "tumor", "--debug"]);
        assert_eq!(cli.log_level(), Some("debug"));
        let cli = Cli::parse_from(["add_fake_gt", "-i", "in.vcf", "-s", "tumor", "--verbose"]);
        assert_eq!(cli.log_level(), Some("info"));
        let cli = Cli::parse_from(["add_fake_gt", "-i", "in.vcf", "-s", "tumor"]);
        assert_eq!(cli.log_level(), None);
    }

    #[test]
    fn test_exit_code() {
        let missing_sample = Cli::try_parse_from(["add_fake_gt", "-i", "in.vcf"]).unwrap_err();
        assert_eq!(exit_code(&missing_sample), 1);
        let missing_input = Cli::try_parse_from(["add_fake_gt", "-s", "tumor"]).unwrap_err();
        assert_eq!(exit_code(&missing_input), 1);
        let unknown = Cli::try_parse_from(["add_fake_gt", "-i", "in.vcf", "-s", "t", "--unknown"])
            .unwrap_err();
        assert_eq!(exit_code(&unknown), 1);

        let help = Cli::try_parse_from(["add_fake_gt", "--help"]).unwrap_err();
        assert_eq!(help.kind(), clap::error::ErrorKind::DisplayHelp);
        assert_eq!(exit_code(&help), 0);
        let version = Cli::try_parse_from(["add_fake_gt", "--version"]).unwrap_err();
        assert_eq!(version.kind(), clap::error::ErrorKind::DisplayVersion);
        assert_eq!(exit_code(&version), 0);
    }
}
