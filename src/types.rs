use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Layout {
    Maximize,
    Other(String),
}

impl From<String> for Layout {
    fn from(value: String) -> Self {
        if value == "maximize" {
            Layout::Maximize
        } else {
            Layout::Other(value)
        }
    }
}

/// Reply to `get_workspace_config`.
#[derive(Debug, Deserialize)]
pub struct WorkspaceConfig {
    pub layout: Layout,
    pub column_count: i64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Window {
    pub app_id: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Workspace {
    pub index: i64,
    /// `None` when nothing is open on the workspace.
    #[serde(default)]
    pub focused_window: Option<Window>,
}

/// Reply to `get_workspaces`.
#[derive(Debug, Deserialize)]
pub struct WorkspacesReply {
    pub focus: i64,
    pub workspaces: Vec<Workspace>,
}

impl WorkspacesReply {
    pub fn find(&self, index: i64) -> Option<&Workspace> {
        self.workspaces.iter().find(|workspace| workspace.index == index)
    }
}

/// Reply to `get_windows`.
#[derive(Debug, Deserialize)]
pub struct WindowsReply {
    pub focus: i64,
    pub windows: Vec<Window>,
}

impl WindowsReply {
    pub fn get(&self, index: i64) -> Option<&Window> {
        usize::try_from(index)
            .ok()
            .and_then(|position| self.windows.get(position))
    }
}
