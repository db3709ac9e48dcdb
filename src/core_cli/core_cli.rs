use clap::Parser;

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "ftserved", about = "A concurrent file transfer server written in Rust.")]
pub struct Cli {
    /// Port to listen on
    pub port: u16,

    /// Path to an optional configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Enable verbose mode
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_only() {
        let cli = Cli::try_parse_from(["ftserved", "30020"]).unwrap();
        assert_eq!(cli.port, 30020);
        assert!(cli.config.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_port_is_required() {
        assert!(Cli::try_parse_from(["ftserved"]).is_err());
    }

    #[test]
    fn test_port_must_be_numeric() {
        assert!(Cli::try_parse_from(["ftserved", "http"]).is_err());
    }

    #[test]
    fn test_config_and_verbose() {
        let cli =
            Cli::try_parse_from(["ftserved", "4000", "-c", "/etc/ftserved.conf", "-v"]).unwrap();
        assert_eq!(cli.config.as_deref(), Some("/etc/ftserved.conf"));
        assert!(cli.verbose);
    }
}
