use serde::Serialize;

use crate::icon::Icon;
use crate::result_item::ResultItem;

type ActionFn = dyn Fn(&ResultItem) -> anyhow::Result<()> + Send + Sync;

/// Represents an action that can be performed by the ResultItem.
#[derive(Serialize)]
pub struct Action {
    /// A unique identifier for the action.
    pub id: String,
    /// An optional icon to visually represent the action in UI.
    pub icon: Option<Icon>,
    /// An optional description explaining what the action does.
    pub description: Option<String>,
    /// An optional keyboard shortcut to trigger the action.
    /// for example "Ctrl+Shift+P"
    pub accelerator: Option<String>,
    /// The function to execute when the action is triggered.
    /// This field is skipped during serialization.
    #[serde(skip)]
    pub action: Box<ActionFn>,
}

impl std::fmt::Debug for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Action")
            .field("id", &self.id)
            .field("description", &self.description)
            .field("accelerator", &self.accelerator)
            .field("action", &"<action>")
            .finish()
    }
}

impl Action {
    pub fn new<F>(id: &'static str, action: F) -> Self
    where
        F: Fn(&ResultItem) -> anyhow::Result<()> + 'static + Send + Sync,
    {
        Self {
            id: id.to_string(),
            icon: None,
            description: None,
            accelerator: None,
            action: Box::new(action),
        }
    }

    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn with_accelerator(mut self, accelerator: &'static str) -> Self {
        self.accelerator = Some(accelerator.to_string());
        self
    }

    pub fn run(&self, item: &ResultItem) -> anyhow::Result<()> {
        (self.action)(item)
    }
}

impl Action {
    pub fn primary<F>(action: F) -> Self
    where
        F: Fn(&ResultItem) -> anyhow::Result<()> + 'static + Send + Sync,
    {
        Self::new("RunPrimary", action).with_accelerator("Enter")
    }
}
