use std::collections::VecDeque;
use std::sync::Mutex;
use tokio::sync::Semaphore;

/// Work queue shared between the result aggregator (producer) and the
/// crawl workers (consumers), paired with the count of submitted URLs
/// whose results have not yet been aggregated.
///
/// Termination cannot be detected from "queue empty" alone: a worker may
/// be mid-fetch and about to discover more work. The pending count tracks
/// exactly that in-flight work, and the queue closes when it reaches zero.
/// At that point every submitted URL has already been taken, so the queue
/// is necessarily drained.
pub struct Frontier {
    state: Mutex<FrontierState>,
    // One permit per queued URL; closing it is the termination broadcast.
    items: Semaphore,
}

struct FrontierState {
    queue: VecDeque<String>,
    pending: usize,
}

impl Frontier {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FrontierState {
                queue: VecDeque::new(),
                pending: 0,
            }),
            items: Semaphore::new(0),
        }
    }

    /// Accepts `url` into the queue and counts it as pending. Never
    /// blocks: the queue grows without bound so discovery cannot deadlock
    /// on capacity. Must be called once for the root URL before the crawl
    /// starts.
    pub fn submit(&self, url: String) {
        {
            let mut state = self.state.lock().unwrap();
            state.pending += 1;
            state.queue.push_back(url);
        }
        self.items.add_permits(1);
    }

    /// Blocks until a URL is available, returning `None` once the queue
    /// has closed. Closing wakes every blocked taker.
    pub async fn take(&self) -> Option<String> {
        match self.items.acquire().await {
            Ok(permit) => {
                permit.forget();
                let mut state = self.state.lock().unwrap();
                state.queue.pop_front()
            }
            Err(_closed) => None,
        }
    }

    /// Records that one taken URL has been fully aggregated. When the
    /// pending count reaches zero the queue closes. Submissions for a
    /// page's children must land before the page's own `complete` call,
    /// or the count could read zero while work remains.
    pub fn complete(&self) {
        let pending = {
            let mut state = self.state.lock().unwrap();
            debug_assert!(state.pending > 0, "complete() without a matching submit()");
            state.pending -= 1;
            state.pending
        };
        if pending == 0 {
            self.items.close();
        }
    }

    /// Current queue depth, for observability only.
    pub fn len(&self) -> usize {
        self.state.lock().unwrap().queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_closed(&self) -> bool {
        self.items.is_closed()
    }
}

impl Default for Frontier {
    fn default() -> Self {
        Self::new()
    }
}
