use serde::Serialize;

use crate::core::constants::output_formats;
use crate::core::error::Result;
use crate::core::types::UrlClass;

/// JSON shape for list-producing operations
#[derive(Debug, Serialize)]
struct ListReport<'a> {
    operation: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    query: Option<&'a str>,
    results: &'a [String],
}

/// JSON shape for `check-tld`
#[derive(Debug, Serialize)]
struct LookupReport<'a> {
    tld: &'a str,
    listed: bool,
}

/// Render a list of TLDs or domains
pub fn render_list(
    operation: &str,
    query: Option<&str>,
    results: &[String],
    format: &str,
) -> Result<String> {
    if format == output_formats::JSON {
        let report = ListReport {
            operation,
            query,
            results,
        };
        return Ok(format!("{}\n", serde_json::to_string(&report)?));
    }

    Ok(results
        .iter()
        .map(|item| format!("{item}\n"))
        .collect::<String>())
}

/// Render the result of a wordlist lookup
pub fn render_lookup(tld: &str, listed: bool, format: &str) -> Result<String> {
    if format == output_formats::JSON {
        return Ok(format!(
            "{}\n",
            serde_json::to_string(&LookupReport { tld, listed })?
        ));
    }

    let verdict = if listed { "listed" } else { "not listed" };
    Ok(format!("{tld}: {verdict}\n"))
}

/// Render URL classifications
pub fn render_classes(classes: &[UrlClass], format: &str) -> Result<String> {
    if format == output_formats::JSON {
        return Ok(format!("{}\n", serde_json::to_string(classes)?));
    }

    Ok(classes
        .iter()
        .map(|class| format!("{class}\n"))
        .collect::<String>())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_render_list_text() {
        let out = render_list("tlds", None, &strings(&["de", "com"]), "text").unwrap();
        assert_eq!(out, "de\ncom\n");

        let empty = render_list("tlds", None, &[], "text").unwrap();
        assert_eq!(empty, "");
    }

    #[test]
    fn test_render_list_json() {
        let out = render_list("tlds", None, &strings(&["co.uk"]), "json").unwrap();
        assert_eq!(out, "{\"operation\":\"tlds\",\"results\":[\"co.uk\"]}\n");

        let out = render_list("domains", Some("de"), &[], "json").unwrap();
        assert_eq!(
            out,
            "{\"operation\":\"domains\",\"query\":\"de\",\"results\":[]}\n"
        );
    }

    #[test]
    fn test_render_lookup() {
        assert_eq!(render_lookup("com", true, "text").unwrap(), "com: listed\n");
        assert_eq!(
            render_lookup("test", false, "text").unwrap(),
            "test: not listed\n"
        );
        assert_eq!(
            render_lookup("com", true, "json").unwrap(),
            "{\"tld\":\"com\",\"listed\":true}\n"
        );
    }

    #[test]
    fn test_render_classes() {
        let classes = vec![
            UrlClass::new("duckduckgo.com/?q=1", true, true),
            UrlClass::new("https://com//q=1", false, false),
        ];

        let text = render_classes(&classes, "text").unwrap();
        assert_eq!(
            text,
            "duckduckgo.com/?q=1 parseable=yes reachable=yes\nhttps://com//q=1 parseable=no reachable=no\n"
        );

        let json = render_classes(&classes, "json").unwrap();
        assert!(json.starts_with(r#"[{"url":"duckduckgo.com/?q=1","parseable":true"#));
        assert!(json.ends_with("]\n"));
    }
}
