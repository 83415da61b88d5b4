use std::collections::HashMap;
use std::path::{Path, PathBuf};

use glimpse_config::Config;
use glimpse_plugin::{Action, Icon, PluginQueryOutput, ResultItem};
use glimpse_utils::IteratorExt;

mod recent_projects;

use recent_projects::ProjectRecord;

/// A JetBrains IDE family and the binary names its launcher
/// may be installed under, in resolution order.
struct IdeIdentity {
    name: &'static str,
    binaries: &'static [&'static str],
}

const IDES: &[IdeIdentity] = &[
    IdeIdentity {
        name: "AndroidStudio",
        binaries: &["android-studio"],
    },
    IdeIdentity {
        name: "CLion",
        binaries: &["clion"],
    },
    IdeIdentity {
        name: "DataGrip",
        binaries: &["datagrip"],
    },
    IdeIdentity {
        name: "GoLand",
        binaries: &["goland"],
    },
    IdeIdentity {
        name: "IntelliJIdea",
        binaries: &[
            "intellij-idea-ue-bundled-jre",
            "intellij-idea-ultimate-edition",
            "idea-ce-eap",
            "idea-ue-eap",
            "idea",
            "idea-ultimate",
        ],
    },
    IdeIdentity {
        name: "PhpStorm",
        binaries: &["phpstorm"],
    },
    IdeIdentity {
        name: "PyCharm",
        binaries: &["pycharm", "pycharm-eap", "charm"],
    },
    IdeIdentity {
        name: "RubyMine",
        binaries: &["rubymine", "jetbrains-rubymine", "jetbrains-rubymine-eap"],
    },
    IdeIdentity {
        name: "WebStorm",
        binaries: &["webstorm"],
    },
];

impl IdeIdentity {
    /// Tries each candidate binary against `$PATH` in listed order.
    fn resolve_binary(&self) -> Option<ResolvedBinary> {
        self.binaries.iter().find_map(|name| {
            glimpse_utils::find_program(name).map(|executable| ResolvedBinary {
                executable,
                icon: Icon::named(*name),
            })
        })
    }
}

/// Executable and icon for an IDE family, resolved fresh per query.
struct ResolvedBinary {
    executable: PathBuf,
    icon: Icon,
}

#[derive(Debug)]
pub struct Plugin {
    /// Shared config root used by 2020.1+ versions,
    /// usually `~/.config/JetBrains`.
    config_root: PathBuf,
    home_dir: PathBuf,
}

impl Plugin {
    const NAME: &'static str = "JetbrainsProjects";

    fn locate(&self, query: &str) -> Vec<ResultItem> {
        let mut binaries: HashMap<&'static str, ResolvedBinary> = HashMap::new();
        let mut projects: Vec<ProjectRecord> = Vec::new();

        for ide in IDES {
            let Some(config_file) =
                recent_projects::locate_config_file(ide.name, &self.config_root, &self.home_dir)
            else {
                continue;
            };

            // a bad file for one IDE must not prevent the others
            // from contributing projects
            let records =
                match recent_projects::parse_config_file(&config_file, ide.name, &self.home_dir) {
                    Ok(records) => records,
                    Err(e) => {
                        tracing::warn!("skipping {}: {e}", config_file.display());
                        continue;
                    }
                };

            if let Some(binary) = ide.resolve_binary() {
                binaries.insert(ide.name, binary);
            }

            projects.extend(records);
        }

        recent_projects::sort_by_recency(&mut projects);
        recent_projects::filter_by_query(&mut projects, query);

        projects
            .into_iter()
            .filter_map(|project| binaries.get(project.ide).map(|b| project_item(project, b)))
            .collect()
    }
}

fn project_item(project: ProjectRecord, binary: &ResolvedBinary) -> ResultItem {
    let project_dir = Path::new(&project.path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| project.path.clone());

    let executable = binary.executable.clone();
    let path = project.path.clone();

    ResultItem {
        id: format!("{}:{}", Plugin::NAME, project.path),
        icon: binary.icon.clone(),
        primary_text: project_dir.clone(),
        secondary_text: project.path,
        completion: Some(project_dir),
        actions: vec![
            Action::primary(move |_| glimpse_utils::execute_with_args(&executable, [&path]))
                .with_description(&format!("Open in {}", project.ide)),
        ],
        score: 0,
    }
}

#[async_trait::async_trait]
impl glimpse_plugin::Plugin for Plugin {
    fn new(_config: &Config) -> Self {
        Self {
            config_root: dirs::config_dir()
                .map(|p| p.join("JetBrains"))
                .unwrap_or_default(),
            home_dir: dirs::home_dir().unwrap_or_default(),
        }
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn default_plugin_config(&self) -> glimpse_config::PluginConfig {
        glimpse_config::PluginConfig {
            enabled: Some(true),
            include_in_global_results: Some(false),
            direct_activation_command: Some("jb".into()),
            inner: None,
        }
    }

    async fn query_direct(&mut self, query: &str) -> anyhow::Result<PluginQueryOutput> {
        Ok(self
            .locate(query)
            .into_iter()
            .collect_non_empty::<Vec<_>>()
            .into())
    }
}

#[cfg(test)]
mod tests {
    use glimpse_plugin::Plugin as _;

    use super::*;

    fn plugin(config_root: &Path, home_dir: &Path) -> Plugin {
        Plugin {
            config_root: config_root.to_path_buf(),
            home_dir: home_dir.to_path_buf(),
        }
    }

    #[test]
    fn missing_config_dirs_contribute_nothing() {
        let config_root = tempfile::tempdir().unwrap();
        let home_dir = tempfile::tempdir().unwrap();

        let mut plugin = plugin(config_root.path(), home_dir.path());
        let output = smol::block_on(plugin.query_direct("")).unwrap();
        assert!(matches!(output, PluginQueryOutput::None));
    }

    #[test]
    fn malformed_config_file_is_not_an_error() {
        let config_root = tempfile::tempdir().unwrap();
        let home_dir = tempfile::tempdir().unwrap();

        let goland = config_root.path().join("GoLand2023.2/options");
        std::fs::create_dir_all(&goland).unwrap();
        std::fs::write(goland.join("recentProjects.xml"), "<application").unwrap();

        let mut plugin = plugin(config_root.path(), home_dir.path());
        let output = smol::block_on(plugin.query_direct("")).unwrap();
        assert!(matches!(output, PluginQueryOutput::None));
    }
}
