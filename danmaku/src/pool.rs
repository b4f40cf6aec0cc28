//! Caption pool the spawner samples from.
//!
//! DESIGN
//! ======
//! The pool is a plain sampling population: order carries no meaning and
//! repeats are expected, so draws are uniform with replacement and there is
//! no recency window.

#[cfg(test)]
#[path = "pool_test.rs"]
mod pool_test;

use rand::Rng;

/// Non-empty captions derived from the current photo set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WishPool {
    captions: Vec<String>,
}

impl WishPool {
    /// Build a pool, dropping empty and whitespace-only captions.
    ///
    /// Kept captions are stored verbatim.
    pub fn from_captions<I, S>(captions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let captions = captions
            .into_iter()
            .map(Into::into)
            .filter(|caption: &String| !caption.trim().is_empty())
            .collect();
        Self { captions }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.captions.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.captions.len()
    }

    #[must_use]
    pub fn captions(&self) -> &[String] {
        &self.captions
    }

    /// Draw one caption uniformly at random. `None` only for an empty pool.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        if self.captions.is_empty() {
            return None;
        }
        let index = rng.random_range(0..self.captions.len());
        self.captions.get(index).map(String::as_str)
    }
}
