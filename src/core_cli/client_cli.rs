use clap::Parser;

/// Command-line arguments for the file transfer client
#[derive(Parser, Debug)]
#[command(name = "ftclient", about = "Client for the ftserved file transfer server.")]
pub struct ClientCli {
    /// Server host name or address
    pub host: String,

    /// Server port
    pub port: u16,

    /// One of -l, -d, -g, cd
    #[arg(allow_hyphen_values = true)]
    pub command: String,

    /// File name for -g, directory name for cd. An empty file fetched with
    /// -g is indistinguishable from a missing one and is not saved.
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hyphenated_command() {
        let cli = ClientCli::try_parse_from(["ftclient", "localhost", "30020", "-l"]).unwrap();
        assert_eq!(cli.host, "localhost");
        assert_eq!(cli.port, 30020);
        assert_eq!(cli.command, "-l");
        assert!(cli.name.is_none());
    }

    #[test]
    fn test_name_help_mentions_empty_files() {
        use clap::CommandFactory;

        let command = ClientCli::command();
        let name = command
            .get_arguments()
            .find(|arg| arg.get_id() == "name")
            .unwrap();
        let help = name.get_help().unwrap().to_string();
        assert!(help.contains("empty file"));
    }

    #[test]
    fn test_get_with_name() {
        let cli =
            ClientCli::try_parse_from(["ftclient", "::1", "30020", "-g", "notes.txt"]).unwrap();
        assert_eq!(cli.command, "-g");
        assert_eq!(cli.name.as_deref(), Some("notes.txt"));
    }
}
