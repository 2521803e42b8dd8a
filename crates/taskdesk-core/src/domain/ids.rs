//! Task identifiers (strongly-typed IDs).
//!
//! # 採番
//! ID は `TaskStore` が 1 始まりのカウンタで払い出します。再利用はしません。
//! 表示は `T<n>`（`T1`, `T2`, ...）です。
//!
//! # パース
//! ユーザー入力から受け付けるのは、ストアが実際に払い出す形だけです。
//! - 前後の空白は無視する
//! - 符号（`T+1`）やゼロ埋め（`T01`）は受け付けない
//!
//! `T01` を `T1` の別名として扱うと、払い出していない ID で完了操作が
//! 通ってしまうため、パース失敗（= 呼び出し側では NotFound）にします。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

const PREFIX: &str = "T";

/// Identifier of a Task (strongly typed, issued by `TaskStore`).
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct TaskId(u64);

impl TaskId {
    /// Wrap a raw counter value. Counter values start at 1.
    pub fn new(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", PREFIX, self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed task id: {0:?}")]
pub struct ParseTaskIdError(String);

impl FromStr for TaskId {
    type Err = ParseTaskIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix(PREFIX)
            .ok_or_else(|| ParseTaskIdError(s.to_string()))?;

        // Only the exact form the store issues: no sign, no zero padding.
        // `T01` is a different (never issued) id, not an alias of `T1`.
        let canonical = digits.bytes().all(|b| b.is_ascii_digit())
            && !digits.is_empty()
            && !digits.starts_with('0');
        if !canonical {
            return Err(ParseTaskIdError(s.to_string()));
        }

        digits
            .parse::<u64>()
            .map(Self)
            .map_err(|_| ParseTaskIdError(s.to_string()))
    }
}

impl From<TaskId> for String {
    fn from(id: TaskId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for TaskId {
    type Error = ParseTaskIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
