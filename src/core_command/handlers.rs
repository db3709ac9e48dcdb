use crate::constants::INVALID_REQUEST_LINE;
use crate::core_command::cd::handle_cd_command;
use crate::core_command::command::Command;
use crate::core_command::get::handle_get_command;
use crate::core_command::list::handle_list_command;
use crate::core_command::response::Response;
use crate::core_error::ServeError;
use crate::core_fs::{EntryKind, WorkingDirectory};
use log::{debug, error};

/// Turns a decoded request into the response to send.
///
/// An unavailable working directory is logged and answered with an empty
/// response; it never ends the session on its own.
pub async fn dispatch(workdir: &WorkingDirectory, request: &[u8]) -> Response {
    let command = Command::parse(request);
    debug!("Dispatching {:?}", command);

    let result = match &command {
        Command::Get(name) => handle_get_command(workdir, name).await,
        Command::ChangeDir(name) => handle_cd_command(workdir, name).await,
        Command::ListFiles => handle_list_command(workdir, EntryKind::Files).await,
        Command::ListDirs => handle_list_command(workdir, EntryKind::Directories).await,
        Command::Invalid => Ok(Response::lines([INVALID_REQUEST_LINE])),
    };

    match result {
        Ok(response) => response,
        Err(e @ ServeError::DirectoryUnavailable { .. }) => {
            error!("Error handling command {:?}: {}", command, e);
            Response::Empty
        }
        Err(e) => {
            error!("Unexpected error handling command {:?}: {}", command, e);
            Response::Empty
        }
    }
}
