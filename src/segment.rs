use tracing::debug;

use crate::backend::{QueryKind, QuerySource, query};
use crate::config::focus_marker;
use crate::error::QueryError;
use crate::icon::IconSet;
use crate::types::{Layout, WindowsReply, WorkspaceConfig, WorkspacesReply};

pub fn config_lines(source: &dyn QuerySource, icons: &IconSet) -> Result<Vec<String>, QueryError> {
    let config: WorkspaceConfig = query(source, QueryKind::WorkspaceConfig)?;
    debug!(layout = ?config.layout, columns = config.column_count, "workspace config");
    let line = match config.layout {
        Layout::Maximize => icons.maximize(),
        Layout::Other(_) => format!("{} {}", icons.columns(), config.column_count),
    };
    Ok(vec![line])
}

pub fn workspace_lines(
    source: &dyn QuerySource,
    icons: &IconSet,
    index: i64,
) -> Result<Vec<String>, QueryError> {
    let reply: WorkspacesReply = query(source, QueryKind::Workspaces)?;
    let workspace = reply.find(index);
    if workspace.is_none() {
        debug!(index, "workspace not in reply");
    }
    Ok(vec![
        icons.workspace(workspace),
        index.to_string(),
        focus_marker(reply.focus == index).to_string(),
    ])
}

/// Nothing when `index` is not a position in the window list.
pub fn window_lines(
    source: &dyn QuerySource,
    icons: &IconSet,
    index: i64,
) -> Result<Vec<String>, QueryError> {
    let reply: WindowsReply = query(source, QueryKind::Windows)?;
    let Some(window) = reply.get(index) else {
        debug!(index, count = reply.windows.len(), "window index out of range");
        return Ok(Vec::new());
    };
    Ok(vec![
        icons.window(&window.app_id),
        window.app_id.clone(),
        focus_marker(reply.focus == index).to_string(),
    ])
}
