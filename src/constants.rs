// src/constants.rs

/// End-of-message marker, in both directions.
pub const DELIMITER: &[u8] = b"<J#J1J3>";

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";
pub const DEFAULT_MAX_SESSIONS: usize = 5;
pub const DEFAULT_RECV_BUFFER_SIZE: usize = 100;
pub const DEFAULT_SEND_BUFFER_SIZE: usize = 1000;

pub const INVALID_REQUEST_LINE: &str = "Invalid file or directory request.";

pub const CMD_GET: &str = "-g";
pub const CMD_CHANGE_DIR: &str = "cd";
pub const CMD_LIST_FILES: &str = "-l";
pub const CMD_LIST_DIRS: &str = "-d";

pub const SELF_ENTRY: &str = ".";
pub const PARENT_ENTRY: &str = "..";
