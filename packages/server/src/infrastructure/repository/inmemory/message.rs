//! InMemory MessageStore 実装
//!
//! `Vec` をインメモリのログとして使用します。ログ自体は削除されず、
//! 読み出し時のウィンドウだけが制限されます。

use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Local};
use relay_shared::time::now_local;

use crate::domain::{Message, MessageDraft, MessageStore, ReceivedAt};

type Clock = Box<dyn Fn() -> DateTime<Local> + Send + Sync>;

/// インメモリ MessageStore 実装
pub struct InMemoryMessageStore {
    /// 受信順のメッセージログ
    messages: Mutex<Vec<Message>>,
    /// 受信時刻の取得元
    clock: Clock,
}

impl InMemoryMessageStore {
    /// 壁時計を使う新しいストアを作成
    pub fn new() -> Self {
        Self::with_clock(now_local)
    }

    /// 任意の時刻取得関数を使うストアを作成
    pub fn with_clock<F>(clock: F) -> Self
    where
        F: Fn() -> DateTime<Local> + Send + Sync + 'static,
    {
        Self {
            messages: Mutex::new(Vec::new()),
            clock: Box::new(clock),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Message>> {
        // Every critical section is a single push or clone, so a poisoned log is still consistent.
        self.messages.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryMessageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageStore for InMemoryMessageStore {
    fn append(&self, draft: MessageDraft) -> Message {
        let mut messages = self.lock();

        // The clock is read under the lock; a wall clock stepping backwards is clamped.
        let now = ReceivedAt::new((self.clock)());
        let received_at = match messages.last() {
            Some(last) if last.received_at > now => last.received_at,
            _ => now,
        };

        let message = Message::accept(draft, received_at);
        messages.push(message.clone());
        message
    }

    fn recent(&self, limit: usize) -> Vec<Message> {
        let messages = self.lock();
        let start = messages.len().saturating_sub(limit);
        messages[start..].to_vec()
    }

    fn len(&self) -> usize {
        self.lock().len()
    }
}
