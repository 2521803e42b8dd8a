//! Urgency queue - 遅延削除つきの最小ヒープ
//!
//! 「いま一番急ぐタスク」を取り出すための優先度コンテナです。
//! キー（taskdesk では `(Priority, NaiveDate)`）が最小のものから取り出します。
//!
//! # 遅延削除（lazy deletion）
//! `BinaryHeap` は任意要素の削除ができません。そこで、タスクが完了しても
//! ヒープからは消さず、取り出し時に「まだ有効か」を判定して、
//! 無効（完了済み）なエントリをその場で捨てます。
//!
//! - 完了処理は O(1)（ヒープに触らない）
//! - 取り出し時に、溜まった古いエントリをまとめて掃除する
//! - 一度捨てたエントリ・一度返したエントリは二度と出てこない
//!
//! 最後の性質は意図した振る舞いです。返したタスクがまだ未完了でも、
//! ヒープからは消費済みになります（次の取り出しでは別のタスクが出る）。
//!
//! # 同順位の扱い
//! キーが同じエントリは push した順に出てきます（`seq` で決定的に並べる）。
//!
//! # 責務の分離
//! このコンテナは「何が古いか」を知りません。判定は呼び出し側
//! （`TaskStore::most_urgent`）がクロージャで渡します。

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Heap entry.
///
/// `BinaryHeap` is a max-heap, so `Ord` is reversed to pop the smallest key
/// first. `seq` breaks key ties by push order.
#[derive(Debug)]
struct Entry<K, V> {
    key: K,
    seq: u64,
    value: V,
}

impl<K: Ord, V> PartialEq for Entry<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K: Ord, V> Eq for Entry<K, V> {}

impl<K: Ord, V> PartialOrd for Entry<K, V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord, V> Ord for Entry<K, V> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Priority container yielding the minimum key on demand.
///
/// The container knows nothing about what makes a value stale. Callers that
/// invalidate values do not remove them; instead they pass a liveness check
/// to [`UrgencyQueue::pop_first_live`], which throws away stale entries as it
/// meets them.
#[derive(Debug)]
pub struct UrgencyQueue<K, V> {
    heap: BinaryHeap<Entry<K, V>>,
    next_seq: u64,
}

impl<K: Ord, V> UrgencyQueue<K, V> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    pub fn push(&mut self, key: K, value: V) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { key, seq, value });
    }

    /// Remove and return the entry with the smallest key.
    pub fn pop_min(&mut self) -> Option<(K, V)> {
        self.heap.pop().map(|entry| (entry.key, entry.value))
    }

    /// Pop entries until one satisfies `is_live`, and return it.
    ///
    /// Entries failing the check are dropped for good. The returned entry is
    /// removed as well. Returns `None` once the heap runs dry.
    pub fn pop_first_live<F>(&mut self, mut is_live: F) -> Option<V>
    where
        F: FnMut(&V) -> bool,
    {
        while let Some((_, value)) = self.pop_min() {
            if is_live(&value) {
                return Some(value);
            }
        }
        None
    }

    /// Number of entries held, stale ones included.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<K: Ord, V> Default for UrgencyQueue<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
