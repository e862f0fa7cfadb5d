//! UseCase: 最新メッセージ取得処理
//!
//! 直近のウィンドウを取得し、各メッセージに投稿者の色を付けて返します。

use std::sync::Arc;

use crate::domain::{ColorAssigner, ColoredMessage, MessageStore};

/// 最新メッセージ取得のユースケース
pub struct FetchMessagesUseCase {
    messages: Arc<dyn MessageStore>,
    colors: Arc<dyn ColorAssigner>,
}

impl FetchMessagesUseCase {
    /// 新しい FetchMessagesUseCase を作成
    pub fn new(messages: Arc<dyn MessageStore>, colors: Arc<dyn ColorAssigner>) -> Self {
        Self { messages, colors }
    }

    /// 直近 `limit` 件を古い順に取得
    pub fn execute(&self, limit: usize) -> Vec<ColoredMessage> {
        self.messages
            .recent(limit)
            .into_iter()
            .map(|message| ColoredMessage {
                color: self.colors.assign(&message.user),
                message,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{
            ClientTimestamp, Color, DEFAULT_HISTORY_WINDOW, Message, MessageBody, MessageDraft,
            ReceivedAt, UserName,
            repository::{MockColorAssigner, MockMessageStore},
        },
        infrastructure::repository::{InMemoryMessageStore, MemoizedColorAssigner},
        usecase::SubmitMessageUseCase,
    };
    use chrono::Local;
    use mockall::predicate::eq;

    fn draft(user: &str, message: &str, timestamp: &str) -> MessageDraft {
        MessageDraft::new(
            UserName::new(user.to_string()).unwrap(),
            MessageBody::new(message.to_string()),
            ClientTimestamp::new(timestamp.to_string()),
        )
    }

    #[test]
    fn test_fetch_decorates_each_message() {
        // テスト項目: ウィンドウ内の各メッセージに投稿者の色が付く
        // given (前提条件):
        let now = ReceivedAt::new(Local::now());
        let window = vec![
            Message::accept(draft("bob", "hi", "t1"), now),
            Message::accept(draft("ann", "yo", "t2"), now),
        ];
        let mut messages = MockMessageStore::new();
        messages
            .expect_recent()
            .with(eq(DEFAULT_HISTORY_WINDOW))
            .times(1)
            .return_const(window);
        let mut colors = MockColorAssigner::new();
        colors
            .expect_assign()
            .returning(|user| match user.as_str() {
                "bob" => Color::Yellow,
                _ => Color::Red,
            });
        let usecase = FetchMessagesUseCase::new(Arc::new(messages), Arc::new(colors));

        // when (操作):
        let result = usecase.execute(DEFAULT_HISTORY_WINDOW);

        // then (期待する結果):
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].message.user.as_str(), "bob");
        assert_eq!(result[0].color, Color::Yellow);
        assert_eq!(result[1].message.user.as_str(), "ann");
        assert_eq!(result[1].color, Color::Red);
    }

    #[test]
    fn test_fetch_from_empty_store() {
        // テスト項目: メッセージがなければ空の列が返される
        let usecase = FetchMessagesUseCase::new(
            Arc::new(InMemoryMessageStore::new()),
            Arc::new(MemoizedColorAssigner::new()),
        );

        assert!(usecase.execute(DEFAULT_HISTORY_WINDOW).is_empty());
    }

    #[test]
    fn test_submit_then_fetch_example() {
        // テスト項目: bob/hi と ann/yo を投稿すると、その順に安定した色付きで返される
        // given (前提条件):
        let messages = Arc::new(InMemoryMessageStore::new());
        let colors = Arc::new(MemoizedColorAssigner::new());
        let submit = SubmitMessageUseCase::new(messages.clone(), colors.clone());
        let fetch = FetchMessagesUseCase::new(messages, colors);

        // when (操作):
        submit.execute(draft("bob", "hi", "t1"));
        submit.execute(draft("ann", "yo", "t2"));
        let first = fetch.execute(DEFAULT_HISTORY_WINDOW);
        let second = fetch.execute(DEFAULT_HISTORY_WINDOW);

        // then (期待する結果):
        let summary: Vec<(&str, &str, Color)> = first
            .iter()
            .map(|m| (m.message.user.as_str(), m.message.message.as_str(), m.color))
            .collect();
        assert_eq!(
            summary,
            vec![("bob", "hi", Color::Blue), ("ann", "yo", Color::Magenta)]
        );
        assert_eq!(first, second);
    }
}
