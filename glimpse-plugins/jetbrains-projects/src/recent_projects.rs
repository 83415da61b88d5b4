use std::path::{Path, PathBuf};

use anyhow::Context;

/// A recently opened project as recorded by an IDE's
/// `recentProjects.xml`.
#[derive(Debug, PartialEq)]
pub(crate) struct ProjectRecord {
    /// Last-opened unix timestamp in milliseconds, 0 if unknown.
    pub timestamp: i64,
    /// Absolute project path, `$USER_HOME$` already substituted.
    pub path: String,
    /// Owning IDE family name.
    pub ide: &'static str,
}

/// Finds the recent-projects config file for an IDE family.
///
/// Versions since 2020.1 keep their configuration under a shared root
/// (`~/.config/JetBrains/<Family><version>`); older versions used
/// per-version dot-directories in `$HOME`. A family may have several
/// version directories, the lexicographically greatest name is taken
/// as a proxy for the newest version.
pub(crate) fn locate_config_file(
    ide: &'static str,
    config_root: &Path,
    home_dir: &Path,
) -> Option<PathBuf> {
    if let Some(dir) = latest_dir_with_prefix(config_root, ide) {
        let file = dir.join("options").join("recentProjects.xml");
        if file.exists() {
            return Some(file);
        }
    }

    // older versions of most IDEs recorded directories rather than projects
    let file_name = if matches!(ide, "IntelliJIdea" | "AndroidStudio") {
        "recentProjects.xml"
    } else {
        "recentProjectDirectories.xml"
    };

    let dot_prefix = format!(".{ide}");
    let dir = latest_dir_with_prefix(home_dir, &dot_prefix)?;
    let file = dir.join("config").join("options").join(file_name);
    file.exists().then_some(file)
}

fn latest_dir_with_prefix(root: &Path, prefix: &str) -> Option<PathBuf> {
    let entries = std::fs::read_dir(root).ok()?;

    entries
        .filter_map(Result::ok)
        .filter(|entry| entry.path().is_dir())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| name.starts_with(prefix))
        .max()
        .map(|name| root.join(name))
}

/// Reads and parses one IDE's config file into project records.
pub(crate) fn parse_config_file(
    path: &Path,
    ide: &'static str,
    home_dir: &Path,
) -> anyhow::Result<Vec<ProjectRecord>> {
    let xml = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_recent_projects(&xml, ide, home_dir)
}

/// Extracts the `recentPaths` list and, when present, the per-project
/// `projectOpenTimestamp` values from the `additionalInfo` map.
///
/// A missing or malformed `additionalInfo` block degrades to
/// timestamp 0 for the affected projects.
pub(crate) fn parse_recent_projects(
    xml: &str,
    ide: &'static str,
    home_dir: &Path,
) -> anyhow::Result<Vec<ProjectRecord>> {
    let doc = roxmltree::Document::parse(xml).context("malformed xml")?;

    let component = doc
        .root_element()
        .first_element_child()
        .context("missing component element")?;

    // keyed by the raw path as written in the file, so the
    // additionalInfo entry keys match before substitution
    let mut projects: Vec<(String, i64)> = Vec::new();

    for option in component.children().filter(|n| n.has_tag_name("option")) {
        match option.attribute("name") {
            Some("recentPaths") => {
                let paths = option
                    .first_element_child()
                    .into_iter()
                    .flat_map(|list| list.children())
                    .filter(|n| n.is_element())
                    .filter_map(|n| n.attribute("value"));

                for path in paths {
                    if !projects.iter().any(|(p, _)| p == path) {
                        projects.push((path.to_string(), 0));
                    }
                }
            }
            Some("additionalInfo") => {
                let Some(map) = option.first_element_child() else {
                    continue;
                };

                for entry in map.children().filter(|n| n.is_element()) {
                    let Some(key) = entry.attribute("key") else {
                        continue;
                    };

                    let Some(timestamp) = open_timestamp_of(entry) else {
                        continue;
                    };

                    if let Some(project) = projects.iter_mut().find(|(p, _)| p == key) {
                        project.1 = timestamp;
                    }
                }
            }
            _ => {}
        }
    }

    let home = home_dir.to_string_lossy();
    Ok(projects
        .into_iter()
        .map(|(path, timestamp)| ProjectRecord {
            timestamp,
            path: path.replace("$USER_HOME$", &home),
            ide,
        })
        .collect())
}

/// Digs `entry/value/RecentProjectMetaInfo/option[@name=projectOpenTimestamp]`
/// out of one `additionalInfo` entry.
fn open_timestamp_of(entry: roxmltree::Node) -> Option<i64> {
    let meta = entry
        .first_element_child()
        .and_then(|value| value.first_element_child())?;

    meta.children()
        .filter(|n| n.has_tag_name("option"))
        .find(|n| n.attribute("name") == Some("projectOpenTimestamp"))
        .and_then(|n| n.attribute("value"))
        .and_then(|v| v.parse().ok())
}

/// Strictly descending by last-opened timestamp; the sort is stable so
/// records without metadata (timestamp 0) keep their source order at
/// the tail.
pub(crate) fn sort_by_recency(projects: &mut [ProjectRecord]) {
    projects.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
}

/// Case-insensitive substring filter over the full project path.
pub(crate) fn filter_by_query(projects: &mut Vec<ProjectRecord>, query: &str) {
    let query = query.trim();
    if query.is_empty() {
        return;
    }

    let query = query.to_lowercase();
    projects.retain(|p| p.path.to_lowercase().contains(&query));
}
