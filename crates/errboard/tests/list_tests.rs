//! Non-interactive listing.

use async_trait::async_trait;
use errboard::commands::list;
use errboard::errors::{EXIT_INVALID_RESPONSE, EXIT_SERVICE_UNAVAILABLE, EXIT_SUCCESS};
use errboard_common::{decode_groups, ErrorGroup, ErrorGroupSource, FetchError, Occurrence};
use tokio_util::sync::CancellationToken;

struct Answer(Result<Vec<ErrorGroup>, FetchError>);

#[async_trait]
impl ErrorGroupSource for Answer {
    async fn fetch_groups(&self) -> Result<Vec<ErrorGroup>, FetchError> {
        self.0.clone()
    }
}

fn group(id: i64, count: i64) -> ErrorGroup {
    ErrorGroup {
        id,
        count,
        representative: Occurrence {
            command: format!("cmd{}", id),
            error: "exit status 1".into(),
        },
        occurrences: vec![],
    }
}

#[tokio::test]
async fn test_list_prints_ranked_text() {
    let source = Answer(Ok(vec![group(1, 2), group(2, 10), group(3, 2)]));
    let mut out = Vec::new();
    let code = list(&source, false, &CancellationToken::new(), &mut out).await;

    assert_eq!(code, EXIT_SUCCESS);
    let text = String::from_utf8(out).unwrap();
    let commands: Vec<&str> = text
        .lines()
        .skip(1)
        .map(|l| l.split_whitespace().nth(1).unwrap())
        .collect();
    assert_eq!(commands, vec!["cmd2", "cmd1", "cmd3"]);
}

#[tokio::test]
async fn test_list_json_uses_wire_format() {
    let source = Answer(Ok(vec![group(1, 2), group(2, 10)]));
    let mut out = Vec::new();
    let code = list(&source, true, &CancellationToken::new(), &mut out).await;

    assert_eq!(code, EXIT_SUCCESS);
    let groups = decode_groups(&out).unwrap();
    assert_eq!(groups.iter().map(|g| g.id).collect::<Vec<_>>(), vec![2, 1]);
}

#[tokio::test]
async fn test_list_failure_exit_codes() {
    let mut out = Vec::new();
    let network = Answer(Err(FetchError::Network("connection refused".into())));
    assert_eq!(
        list(&network, false, &CancellationToken::new(), &mut out).await,
        EXIT_SERVICE_UNAVAILABLE
    );

    let decode = Answer(Err(FetchError::Decode("not an array".into())));
    assert_eq!(
        list(&decode, false, &CancellationToken::new(), &mut out).await,
        EXIT_INVALID_RESPONSE
    );
    assert!(out.is_empty());
}

#[tokio::test]
async fn test_list_empty() {
    let mut out = Vec::new();
    let code = list(&Answer(Ok(vec![])), false, &CancellationToken::new(), &mut out).await;
    assert_eq!(code, EXIT_SUCCESS);
    assert_eq!(String::from_utf8(out).unwrap(), "no errors\n");
}
