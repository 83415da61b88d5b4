use crate::ResultItem;

/// Possible output from querying a plugin.
pub enum PluginQueryOutput {
    None,
    Multiple(Vec<ResultItem>),
}

impl PluginQueryOutput {
    pub fn extend_into(self, results: &mut Vec<ResultItem>) {
        match self {
            PluginQueryOutput::None => {}
            PluginQueryOutput::Multiple(multiple) => results.extend(multiple),
        }
    }
}

impl From<Vec<ResultItem>> for PluginQueryOutput {
    fn from(value: Vec<ResultItem>) -> Self {
        PluginQueryOutput::Multiple(value)
    }
}

impl From<Option<Vec<ResultItem>>> for PluginQueryOutput {
    fn from(value: Option<Vec<ResultItem>>) -> Self {
        match value {
            Some(value) => PluginQueryOutput::Multiple(value),
            None => PluginQueryOutput::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BuiltinIcon, Icon};

    fn item(id: &str) -> ResultItem {
        ResultItem {
            id: id.to_string(),
            icon: Icon::from(BuiltinIcon::Folder),
            primary_text: id.to_string(),
            secondary_text: String::new(),
            completion: None,
            actions: Vec::new(),
            score: 0,
        }
    }

    #[test]
    fn extends_results_preserving_order() {
        let mut results = vec![item("a")];

        PluginQueryOutput::from(None::<Vec<ResultItem>>).extend_into(&mut results);
        assert_eq!(results.len(), 1);

        PluginQueryOutput::from(vec![item("b"), item("c")]).extend_into(&mut results);
        let ids: Vec<_> = results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }
}
