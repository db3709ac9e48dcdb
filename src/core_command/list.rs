use crate::constants::SELF_ENTRY;
use crate::core_command::response::Response;
use crate::core_error::ServeError;
use crate::core_fs::{EntryKind, WorkingDirectory};

/// Handles `-l` and `-d`. The directory listing leaves out the self entry.
pub async fn handle_list_command(
    workdir: &WorkingDirectory,
    kind: EntryKind,
) -> Result<Response, ServeError> {
    let mut entries = workdir.list_entries(kind).await?;
    if kind == EntryKind::Directories {
        entries.retain(|name| name != SELF_ENTRY);
    }
    Ok(Response::Lines(entries))
}
