// src/resolve/pool.rs

/// Cursor over a fixed pool of replacement URLs. The k-th request gets entry
/// `k mod len`, so assignment is deterministic in document order and wraps
/// around once the pool is exhausted.
pub struct RotationPool {
    urls: Vec<String>,
    cursor: usize,
}

impl RotationPool {
    /// `urls` must be non-empty; the runner rejects an empty pool up front.
    pub fn new(urls: Vec<String>) -> Self {
        Self { urls, cursor: 0 }
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn next_url(&mut self) -> &str {
        let i = self.cursor % self.urls.len();
        self.cursor += 1;
        &self.urls[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(n: usize) -> RotationPool {
        RotationPool::new((0..n).map(|i| format!("https://x/{i}.jpg")).collect())
    }

    #[test]
    fn kth_call_gets_k_mod_n() {
        let mut p = pool(3);
        let got: Vec<String> = (0..7).map(|_| p.next_url().to_string()).collect();
        for (k, url) in got.iter().enumerate() {
            assert_eq!(url, &format!("https://x/{}.jpg", k % 3));
        }
    }

    #[test]
    fn single_entry_pool_repeats() {
        let mut p = pool(1);
        assert_eq!(p.next_url(), "https://x/0.jpg");
        assert_eq!(p.next_url(), "https://x/0.jpg");
    }
}
