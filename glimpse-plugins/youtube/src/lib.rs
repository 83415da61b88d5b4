use std::path::{Path, PathBuf};
use std::time::Duration;

use glimpse_config::Config;
use glimpse_plugin::{Action, BuiltinIcon, Icon, PluginQueryOutput, ResultItem};
use glimpse_utils::IteratorExt;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

mod search_page;

use search_page::SearchEntry;

#[derive(Debug)]
pub struct Plugin {
    dump_dir: PathBuf,
}

impl Plugin {
    const NAME: &'static str = "Youtube";
    const SEARCH_URL: &'static str = "https://www.youtube.com/results";

    /// YouTube varies its response shape by client signature; a generic
    /// agent may be served an unsupported layout.
    const USER_AGENT: &'static str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
                                      (KHTML, like Gecko) Chrome/62.0.3202.62 Safari/537.36";

    /// Self-imposed delay before each request to avoid rate limiting.
    const REQUEST_DELAY: Duration = Duration::from_millis(200);

    fn item(&self, entry: SearchEntry) -> ResultItem {
        let icon = entry
            .thumbnail
            .map(Icon::url)
            .unwrap_or_else(|| BuiltinIcon::Video.into());

        let target = format!("https://www.youtube.com/{}", entry.link);

        ResultItem {
            id: format!("{}:{}", Self::NAME, entry.link),
            icon,
            primary_text: entry.title,
            secondary_text: entry.subtext,
            completion: None,
            actions: vec![Action::primary(move |_| {
                let url = url::Url::parse(&target)?;
                glimpse_utils::open_url(&url)
            })
            .with_description(entry.action_description)],
            score: 0,
        }
    }

    /// Converts a search results page into items, or `None` when the
    /// embedded data cannot be extracted, persisting the raw body for
    /// offline triage.
    fn items_from_page(&self, body: &str) -> Option<Vec<ResultItem>> {
        let entries = match search_page::extract_entries(body) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::error!(
                    "failed to extract data from YouTube: {e}. This likely means \
                     upstream layout changes, but could just be a failed request."
                );

                match dump_response(&self.dump_dir, body) {
                    Ok(path) => tracing::error!("raw response dumped to {}", path.display()),
                    Err(e) => tracing::error!("failed to dump raw response: {e}"),
                }

                return None;
            }
        };

        Some(entries.into_iter().map(|e| self.item(e)).collect())
    }
}

#[async_trait::async_trait]
impl glimpse_plugin::Plugin for Plugin {
    fn new(_config: &Config) -> Self {
        Self {
            dump_dir: std::env::temp_dir(),
        }
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn default_plugin_config(&self) -> glimpse_config::PluginConfig {
        glimpse_config::PluginConfig {
            enabled: Some(true),
            include_in_global_results: Some(false),
            direct_activation_command: Some("yt".into()),
            inner: None,
        }
    }

    async fn query_direct(&mut self, query: &str) -> anyhow::Result<PluginQueryOutput> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(PluginQueryOutput::None);
        }

        smol::Timer::after(Self::REQUEST_DELAY).await;

        tracing::info!("searching YouTube for '{query}'");

        let url = format!(
            "{}?search_query={}",
            Self::SEARCH_URL,
            utf8_percent_encode(query, NON_ALPHANUMERIC)
        );

        let body = smol::unblock(move || fetch(&url)).await?;

        Ok(self
            .items_from_page(&body)
            .and_then(|items| items.into_iter().collect_non_empty::<Vec<_>>())
            .into())
    }
}

fn fetch(url: &str) -> anyhow::Result<String> {
    let client = reqwest::blocking::Client::new();
    let response = client
        .get(url)
        .header(reqwest::header::USER_AGENT, Plugin::USER_AGENT)
        .send()?;
    response.text().map_err(Into::into)
}

fn dump_response(dump_dir: &Path, body: &str) -> std::io::Result<PathBuf> {
    let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    let path = dump_dir.join(format!("glimpse.plugins.youtube_dump-{stamp}.html"));
    std::fs::write(&path, body)?;
    Ok(path)
}
