//! UseCase: メッセージ投稿処理
//!
//! 投稿者の色を確定させてからメッセージをログに追加します。
//! 入力の検証は UI 層で済んでいるため、このユースケースは失敗しません。

use std::sync::Arc;

use crate::domain::{ColorAssigner, Message, MessageDraft, MessageStore};

/// メッセージ投稿のユースケース
pub struct SubmitMessageUseCase {
    messages: Arc<dyn MessageStore>,
    colors: Arc<dyn ColorAssigner>,
}

impl SubmitMessageUseCase {
    /// 新しい SubmitMessageUseCase を作成
    pub fn new(messages: Arc<dyn MessageStore>, colors: Arc<dyn ColorAssigner>) -> Self {
        Self { messages, colors }
    }

    /// メッセージ投稿を実行
    ///
    /// # Returns
    ///
    /// ログに追加されたメッセージ（受信時刻付き）
    pub fn execute(&self, draft: MessageDraft) -> Message {
        let color = self.colors.assign(&draft.user);
        let message = self.messages.append(draft);
        tracing::info!(
            "Accepted message from '{}' ({}), log size {}",
            message.user,
            color,
            self.messages.len()
        );
        message
    }
}
