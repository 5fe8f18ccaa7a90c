/// Maximum number of parameter bytes carried by a single record. Matches the
/// largest operand block we forward from the bus; anything longer is truncated.
pub const MAX_PARAMS: usize = 16;

/// One received command, copied out of the adapter's transient buffer.
/// Immutable once built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommandRecord {
    pub opcode: u8,
    pub num_params: u8,
    pub params: [u8; MAX_PARAMS],
}

impl CommandRecord {
    /// Builds a record from an opcode and a raw parameter slice. Parameters
    /// beyond [MAX_PARAMS] are dropped; the copy never reads past the bound
    /// the caller provided, even if the adapter reported a larger size.
    pub fn new(opcode: u8, parameters: &[u8]) -> CommandRecord {
        let num_params = std::cmp::min(parameters.len(), MAX_PARAMS);
        let mut params = [0u8; MAX_PARAMS];
        params[..num_params].copy_from_slice(&parameters[..num_params]);
        CommandRecord {
            opcode,
            num_params: num_params as u8,
            params,
        }
    }

    /// The valid prefix of the parameter block.
    pub fn parameters(&self) -> &[u8] {
        &self.params[..self.num_params as usize]
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QueueStats {
    pub pushed: u64,
    pub popped: u64,
    pub dropped: u64,
}

struct QueueInner {
    records: std::collections::VecDeque<CommandRecord>,
    stats: QueueStats,
}

/// FIFO hand-off between the adapter thread and the polling consumer.
///
/// Both sides go through the same mutex, held only for the container update,
/// so a push and a pop may race but never observe the queue half-updated.
/// Capacity is bounded: when full, the oldest record is dropped and counted,
/// so a stalled consumer cannot grow memory without bound.
pub struct EventQueue {
    inner: std::sync::Mutex<QueueInner>,
    capacity: usize,
}

impl EventQueue {
    pub fn new(capacity: usize) -> EventQueue {
        EventQueue {
            inner: std::sync::Mutex::new(QueueInner {
                records: std::collections::VecDeque::with_capacity(std::cmp::min(capacity, 1024)),
                stats: QueueStats::default(),
            }),
            capacity: std::cmp::max(capacity, 1),
        }
    }

    // A consumer that panicked while holding the lock must not wedge the
    // adapter's callback thread, so poisoning is recovered instead of
    // propagated.
    fn lock(&self) -> std::sync::MutexGuard<QueueInner> {
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Appends a record at the tail. Never blocks beyond the lock; when the
    /// queue is at capacity the head record is discarded to make room.
    pub fn push(&self, record: CommandRecord) {
        let mut inner = self.lock();
        if inner.records.len() >= self.capacity {
            inner.records.pop_front();
            inner.stats.dropped += 1;
        }
        inner.records.push_back(record);
        inner.stats.pushed += 1;
    }

    /// Removes and returns the head record, or [None] if the queue is empty.
    /// Never blocks beyond the lock.
    pub fn try_pop(&self) -> Option<CommandRecord> {
        let mut inner = self.lock();
        let record = inner.records.pop_front();
        if record.is_some() {
            inner.stats.popped += 1;
        }
        record
    }

    pub fn len(&self) -> usize {
        self.lock().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().records.is_empty()
    }

    pub fn stats(&self) -> QueueStats {
        self.lock().stats
    }
}
