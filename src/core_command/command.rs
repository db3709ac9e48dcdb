use crate::constants::{CMD_CHANGE_DIR, CMD_GET, CMD_LIST_DIRS, CMD_LIST_FILES};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Get(String),
    ChangeDir(String),
    ListFiles,
    ListDirs,
    Invalid,
}

impl Command {
    /// The first two bytes select the command, the rest is the argument.
    pub fn parse(request: &[u8]) -> Command {
        if request.len() < 2 {
            return Command::Invalid;
        }
        let (prefix, arg) = request.split_at(2);
        let arg = String::from_utf8_lossy(arg).into_owned();

        match prefix {
            p if p == CMD_GET.as_bytes() => Command::Get(arg),
            p if p == CMD_CHANGE_DIR.as_bytes() => Command::ChangeDir(arg),
            p if p == CMD_LIST_FILES.as_bytes() => Command::ListFiles,
            p if p == CMD_LIST_DIRS.as_bytes() => Command::ListDirs,
            _ => Command::Invalid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_commands() {
        assert_eq!(Command::parse(b"-ga.txt"), Command::Get("a.txt".to_string()));
        assert_eq!(
            Command::parse(b"cdsubdir"),
            Command::ChangeDir("subdir".to_string())
        );
        assert_eq!(Command::parse(b"cd.."), Command::ChangeDir("..".to_string()));
        assert_eq!(Command::parse(b"-l"), Command::ListFiles);
        assert_eq!(Command::parse(b"-d"), Command::ListDirs);
    }

    #[test]
    fn test_listing_arguments_are_ignored() {
        assert_eq!(Command::parse(b"-lwhatever"), Command::ListFiles);
        assert_eq!(Command::parse(b"-d anything"), Command::ListDirs);
    }

    #[test]
    fn test_argument_is_taken_verbatim() {
        assert_eq!(
            Command::parse(b"-g my file.txt"),
            Command::Get(" my file.txt".to_string())
        );
        assert_eq!(Command::parse(b"-g"), Command::Get(String::new()));
    }

    #[test]
    fn test_invalid_requests() {
        assert_eq!(Command::parse(b""), Command::Invalid);
        assert_eq!(Command::parse(b"-"), Command::Invalid);
        assert_eq!(Command::parse(b"-x"), Command::Invalid);
        assert_eq!(Command::parse(b"CDsubdir"), Command::Invalid);
        assert_eq!(Command::parse(b"g a.txt"), Command::Invalid);
    }
}
