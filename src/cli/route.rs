use std::path::Path;

use anyhow::Context as _;

use super::ParseArgs;

/// Environment variable naming the JSON webhook payload of the triggering event.
pub const GITHUB_EVENT_PATH_ENV: &str = "GITHUB_EVENT_PATH";

/// Decide where the comment body for `slashcmd parse` comes from.
///
/// 1. `--comment` always wins
/// 2. the event payload at `event_path` (`comment.body`)
/// 3. stdin: a JSON event payload, or the plaintext body itself
pub fn route_comment(
    args: &ParseArgs,
    event_path: Option<&Path>,
    mut stdin: impl std::io::Read,
) -> Result<String, anyhow::Error> {
    if let Some(comment) = &args.comment {
        return Ok(comment.clone());
    }

    if let Some(path) = event_path {
        let payload = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read event payload {}", path.display()))?;
        let value: serde_json::Value = serde_json::from_str(&payload)
            .map_err(|e| anyhow::anyhow!("JSON parse error in {}: {e}", path.display()))?;
        return comment_body(&value).ok_or_else(|| {
            anyhow::anyhow!("event payload {} has no comment.body", path.display())
        });
    }

    let mut input = String::new();
    stdin.read_to_string(&mut input)?;

    // Only a JSON object carrying comment.body is treated as a payload;
    // anything else is the comment text itself.
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(&input)
        && let Some(body) = comment_body(&value)
    {
        return Ok(body);
    }

    Ok(input)
}

fn comment_body(payload: &serde_json::Value) -> Option<String> {
    payload
        .get("comment")?
        .get("body")?
        .as_str()
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use rstest::rstest;
    use std::io::Cursor;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn args(comment: Option<&str>) -> ParseArgs {
        ParseArgs {
            comment: comment.map(String::from),
            config_path: ".github/slash-commands.yaml".to_string(),
            config_ref: None,
            repo: PathBuf::from("."),
            format: OutputFormat::Json,
        }
    }

    fn write_event(dir: &Path, json: &str) -> PathBuf {
        let path = dir.join("event.json");
        std::fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn comment_arg_wins_over_everything() {
        let tmp = TempDir::new().unwrap();
        let event = write_event(tmp.path(), r#"{"comment": {"body": "/from event"}}"#);

        let comment = route_comment(
            &args(Some("/order pizza")),
            Some(event.as_path()),
            Cursor::new("/from stdin"),
        )
        .unwrap();
        assert_eq!(comment, "/order pizza");
    }

    #[test]
    fn event_payload_body_is_used() {
        let tmp = TempDir::new().unwrap();
        let event = write_event(
            tmp.path(),
            r#"{"action": "created", "comment": {"body": "/gimme chips"}}"#,
        );

        let comment = route_comment(&args(None), Some(event.as_path()), Cursor::new("")).unwrap();
        assert_eq!(comment, "/gimme chips");
    }

    #[rstest]
    #[case::not_json("not json")]
    #[case::no_comment(r#"{"action": "opened"}"#)]
    #[case::body_not_string(r#"{"comment": {"body": 42}}"#)]
    fn bad_event_payload_is_an_error(#[case] payload: &str) {
        let tmp = TempDir::new().unwrap();
        let event = write_event(tmp.path(), payload);
        assert!(route_comment(&args(None), Some(event.as_path()), Cursor::new("")).is_err());
    }

    #[test]
    fn missing_event_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let err = route_comment(
            &args(None),
            Some(tmp.path().join("missing.json").as_path()),
            Cursor::new(""),
        )
        .unwrap_err();
        assert!(err.to_string().starts_with("failed to read event payload"));
    }

    #[rstest]
    #[case::plaintext("/order pizza\n", "/order pizza\n")]
    #[case::json_payload(r#"{"comment": {"body": "/order nachos"}}"#, "/order nachos")]
    #[case::json_without_body(r#"{"command": "x"}"#, r#"{"command": "x"}"#)]
    #[case::json_scalar("42", "42")]
    fn stdin_routing(#[case] stdin: &str, #[case] expected: &str) {
        let comment = route_comment(&args(None), None, Cursor::new(stdin)).unwrap();
        assert_eq!(comment, expected);
    }
}
