use crate::core_command::response::Response;
use crate::core_error::ServeError;
use crate::core_fs::{EntryKind, WorkingDirectory};
use log::warn;

/// Handles `cd<dirname>`. Always answers with an empty response.
pub async fn handle_cd_command(
    workdir: &WorkingDirectory,
    arg: &str,
) -> Result<Response, ServeError> {
    let directories = workdir.list_entries(EntryKind::Directories).await?;

    if directories.iter().any(|name| name == arg) {
        workdir.change_directory(arg).await;
    } else {
        warn!("Failed to change directory, no such entry: {:?}", arg);
    }

    Ok(Response::Empty)
}
