use std::sync::LazyLock;

use anyhow::Context;
use regex::Regex;
use serde_json::Value;

/// Matches the `ytInitialData` assignment embedded in the search
/// results page, under either of its two known declaration forms.
static DATA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^\s*(?:var\s+ytInitialData|window\["ytInitialData"\])\s*=\s*(.+?);\s*$"#)
        .expect("valid regex")
});

/// One search result, already normalized for display.
#[derive(Debug, PartialEq)]
pub(crate) struct SearchEntry {
    pub title: String,
    /// `" | "`-joined metadata fragments, starting with the kind label.
    pub subtext: String,
    /// First thumbnail URL with any query-string suffix stripped.
    pub thumbnail: Option<String>,
    /// Target path under `https://www.youtube.com/`.
    pub link: String,
    pub action_description: &'static str,
}

/// A required field absent from a recognized entry kind.
#[derive(Debug)]
pub(crate) struct MissingField(&'static str);

impl std::fmt::Display for MissingField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// Extracts search entries from the raw results page.
///
/// An `Err` means the whole response is unusable: either no embedded
/// data assignment was found, or the fixed navigation path through it
/// is broken. A recognized entry missing one of its required fields is
/// logged and skipped without affecting the rest of the batch.
pub(crate) fn extract_entries(html: &str) -> anyhow::Result<Vec<SearchEntry>> {
    let captures = DATA_RE
        .captures(html)
        .context("no ytInitialData assignment found")?;

    let data: Value =
        serde_json::from_str(&captures[1]).context("embedded data is not valid json")?;

    let results = result_list(&data).context("unexpected search results layout")?;

    let mut entries = Vec::new();
    for result in results {
        let Some(object) = result.as_object() else {
            continue;
        };

        // a one-entry mapping whose single key names the entry's kind
        for (kind, data) in object {
            match entry_of(kind, data) {
                Ok(Some(entry)) => entries.push(entry),
                // unrecognized kinds are skipped silently
                Ok(None) => {}
                Err(missing) => {
                    tracing::warn!(
                        "skipping {kind} entry missing '{missing}': {}",
                        serde_json::to_string(result).unwrap_or_default()
                    );
                }
            }
        }
    }

    Ok(entries)
}

/// Navigates the fixed, versioned path to the ordered result list:
/// two-column search results, primary contents, first section's items.
fn result_list(data: &Value) -> Option<&Vec<Value>> {
    data.get("contents")?
        .get("twoColumnSearchResultsRenderer")?
        .get("primaryContents")?
        .get("sectionListRenderer")?
        .get("contents")?
        .get(0)?
        .get("itemSectionRenderer")?
        .get("contents")?
        .as_array()
}

fn entry_of(kind: &str, data: &Value) -> Result<Option<SearchEntry>, MissingField> {
    let (subtext, link, action_description) = match kind {
        "videoRenderer" => {
            let id = data
                .get("videoId")
                .and_then(Value::as_str)
                .ok_or(MissingField("videoId"))?;

            let mut subtext = vec!["Video".to_string()];
            for field in ["lengthText", "shortViewCountText", "publishedTimeText"] {
                if let Some(value) = data.get(field) {
                    subtext.push(text_from(value).ok_or(MissingField(field))?);
                }
            }

            (subtext, format!("watch?v={id}"), "Watch on Youtube")
        }
        "channelRenderer" => {
            let id = data
                .get("channelId")
                .and_then(Value::as_str)
                .ok_or(MissingField("channelId"))?;

            let mut subtext = vec!["Channel".to_string()];
            for field in ["videoCountText", "subscriberCountText"] {
                if let Some(value) = data.get(field) {
                    subtext.push(text_from(value).ok_or(MissingField(field))?);
                }
            }

            (subtext, format!("channel/{id}"), "Show on Youtube")
        }
        _ => return Ok(None),
    };

    let title = data
        .get("title")
        .and_then(text_from)
        .ok_or(MissingField("title"))?;

    let thumbnails = data
        .get("thumbnail")
        .and_then(|t| t.get("thumbnails"))
        .and_then(Value::as_array)
        .ok_or(MissingField("thumbnail"))?;

    let thumbnail = thumbnails
        .first()
        .and_then(|t| t.get("url"))
        .and_then(Value::as_str)
        .map(|url| url.split('?').next().unwrap_or(url).to_string());

    Ok(Some(SearchEntry {
        title,
        subtext: subtext.join(" | "),
        thumbnail,
        link,
        action_description,
    }))
}

/// Normalizes a text value that arrives either as a plain-string
/// wrapper or as a list of styled-run fragments, concatenating run
/// text in order and trimming both ends.
fn text_from(value: &Value) -> Option<String> {
    let text = match value.get("runs") {
        Some(runs) => runs
            .as_array()?
            .iter()
            .map(|run| run.get("text").and_then(Value::as_str))
            .collect::<Option<String>>()?,
        None => value.get("simpleText")?.as_str()?.to_string(),
    };

    Some(text.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(assignment: &str) -> String {
        format!("<html><script>\nsomething();\n{assignment}\nmore();\n</script></html>")
    }

    fn two_entry_data() -> String {
        serde_json::json!({
            "contents": {
                "twoColumnSearchResultsRenderer": {
                    "primaryContents": {
                        "sectionListRenderer": {
                            "contents": [{
                                "itemSectionRenderer": {
                                    "contents": [
                                        {
                                            "videoRenderer": {
                                                "videoId": "dQw4w9WgXcQ",
                                                "title": { "runs": [{ "text": "Some " }, { "text": "Video" }] },
                                                "lengthText": { "simpleText": "3:21" },
                                                "shortViewCountText": { "simpleText": "1.2M views" },
                                                "publishedTimeText": { "simpleText": "2 years ago" },
                                                "thumbnail": {
                                                    "thumbnails": [
                                                        { "url": "https://i.ytimg.com/vi/dQw4w9WgXcQ/default.jpg?sqp=abc" }
                                                    ]
                                                }
                                            }
                                        },
                                        {
                                            "channelRenderer": {
                                                "channelId": "UC123",
                                                "title": { "simpleText": "Some Channel " },
                                                "videoCountText": { "simpleText": "42 videos" },
                                                "subscriberCountText": { "simpleText": "1M subscribers" },
                                                "thumbnail": { "thumbnails": [] }
                                            }
                                        }
                                    ]
                                }
                            }]
                        }
                    }
                }
            }
        })
        .to_string()
    }

    #[test]
    fn extracts_videos_and_channels_in_source_order() {
        let html = page(&format!("var ytInitialData = {};", two_entry_data()));
        let entries = extract_entries(&html).unwrap();

        assert_eq!(entries.len(), 2);

        assert_eq!(entries[0].title, "Some Video");
        assert_eq!(entries[0].subtext, "Video | 3:21 | 1.2M views | 2 years ago");
        assert_eq!(entries[0].link, "watch?v=dQw4w9WgXcQ");
        assert_eq!(
            entries[0].thumbnail.as_deref(),
            Some("https://i.ytimg.com/vi/dQw4w9WgXcQ/default.jpg")
        );

        assert_eq!(entries[1].title, "Some Channel");
        assert_eq!(entries[1].subtext, "Channel | 42 videos | 1M subscribers");
        assert_eq!(entries[1].link, "channel/UC123");
        assert_eq!(entries[1].thumbnail, None);
    }

    #[test]
    fn matches_the_window_declaration_form() {
        let html = page(&format!(r#"window["ytInitialData"] = {};"#, two_entry_data()));
        assert_eq!(extract_entries(&html).unwrap().len(), 2);
    }

    #[test]
    fn missing_assignment_is_a_hard_failure() {
        assert!(extract_entries("<html><body>nothing here</body></html>").is_err());
    }

    #[test]
    fn broken_navigation_path_is_a_hard_failure() {
        let html = page(r#"var ytInitialData = {"contents": {}};"#);
        assert!(extract_entries(&html).is_err());
    }

    #[test]
    fn entry_missing_a_required_field_is_skipped_alone() {
        let data = serde_json::json!({
            "contents": {
                "twoColumnSearchResultsRenderer": {
                    "primaryContents": {
                        "sectionListRenderer": {
                            "contents": [{
                                "itemSectionRenderer": {
                                    "contents": [
                                        // no videoId
                                        {
                                            "videoRenderer": {
                                                "title": { "simpleText": "broken" },
                                                "thumbnail": { "thumbnails": [] }
                                            }
                                        },
                                        {
                                            "videoRenderer": {
                                                "videoId": "ok123",
                                                "title": { "simpleText": "fine" },
                                                "thumbnail": { "thumbnails": [] }
                                            }
                                        }
                                    ]
                                }
                            }]
                        }
                    }
                }
            }
        });

        let html = page(&format!("var ytInitialData = {data};"));
        let entries = extract_entries(&html).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].link, "watch?v=ok123");
    }

    #[test]
    fn unrecognized_kinds_are_skipped_silently() {
        let data = serde_json::json!({
            "contents": {
                "twoColumnSearchResultsRenderer": {
                    "primaryContents": {
                        "sectionListRenderer": {
                            "contents": [{
                                "itemSectionRenderer": {
                                    "contents": [
                                        { "shelfRenderer": { "anything": true } },
                                        { "adSlotRenderer": {} }
                                    ]
                                }
                            }]
                        }
                    }
                }
            }
        });

        let html = page(&format!("var ytInitialData = {data};"));
        assert_eq!(extract_entries(&html).unwrap(), vec![]);
    }

    #[test]
    fn run_fragments_concatenate_without_separator() {
        let value = serde_json::json!({ "runs": [{ "text": "Foo" }, { "text": "Bar" }] });
        assert_eq!(text_from(&value).as_deref(), Some("FooBar"));
    }

    #[test]
    fn text_values_are_trimmed_either_way() {
        let value = serde_json::json!({ "simpleText": "  spaced out  " });
        assert_eq!(text_from(&value).as_deref(), Some("spaced out"));

        let value = serde_json::json!({ "runs": [{ "text": " a " }, { "text": "b " }] });
        assert_eq!(text_from(&value).as_deref(), Some("a b"));

        let value = serde_json::json!({ "neither": true });
        assert_eq!(text_from(&value), None);
    }
}
