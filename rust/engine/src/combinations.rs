//! Fixed-size subset enumeration over an ordered sequence.
//!
//! Every strictly-increasing index selection of length `k` out of `n` items is
//! produced exactly once, in lexicographic order of the chosen indices. The
//! relative order of the chosen items is preserved.
//!
//! Two forms are offered:
//!
//! - [`for_each_combination`] walks the selections recursively and feeds each one
//!   to a visitor; the visitor returns `true` to stop the walk early.
//! - [`combinations`] returns a lazy iterator of owned selections; stopping early
//!   is just dropping the iterator.
//!
//! ```rust
//! use showdown_engine::combinations::for_each_combination;
//!
//! let mut seen = Vec::new();
//! let stopped = for_each_combination(&[1, 2, 3, 4], 2, |pair| {
//!     seen.push(pair.to_vec());
//!     false
//! })
//! .unwrap();
//! assert!(!stopped);
//! assert_eq!(seen.len(), 6);
//! ```

use crate::errors::EvalError;

fn check_size(n: usize, k: usize) -> Result<(), EvalError> {
    if k == 0 {
        return Err(EvalError::CombinationSizeZero);
    }
    if k > n {
        return Err(EvalError::CombinationSizeTooLarge { k, n });
    }
    Ok(())
}

struct Walker<'a, T, F> {
    items: &'a [T],
    k: usize,
    positions: Vec<usize>,
    buf: Vec<T>,
    visitor: F,
}

impl<T: Clone, F: FnMut(&[T]) -> bool> Walker<'_, T, F> {
    fn walk(&mut self, start: usize, step: usize) -> bool {
        if step == self.k {
            self.buf.clear();
            for &p in &self.positions {
                self.buf.push(self.items[p].clone());
            }
            return (self.visitor)(&self.buf);
        }

        // the last index usable at this step leaves room for the remaining steps
        let last = self.items.len() - self.k + step;
        for i in start..=last {
            self.positions[step] = i;
            if self.walk(i + 1, step + 1) {
                return true;
            }
        }
        false
    }
}

/// Visits every `k`-combination of `items`.
///
/// Returns `Ok(true)` if the visitor asked to stop, `Ok(false)` once all
/// combinations were visited. Fails when `k == 0` or `k > items.len()`.
pub fn for_each_combination<T, F>(items: &[T], k: usize, visitor: F) -> Result<bool, EvalError>
where
    T: Clone,
    F: FnMut(&[T]) -> bool,
{
    check_size(items.len(), k)?;
    let mut walker = Walker {
        items,
        k,
        positions: vec![0; k],
        buf: Vec::with_capacity(k),
        visitor,
    };
    Ok(walker.walk(0, 0))
}

/// Lazy, finite iterator over the `k`-combinations of a slice.
#[derive(Debug, Clone)]
pub struct Combinations<'a, T> {
    items: &'a [T],
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

pub fn combinations<T: Clone>(items: &[T], k: usize) -> Result<Combinations<'_, T>, EvalError> {
    check_size(items.len(), k)?;
    Ok(Combinations {
        items,
        indices: (0..k).collect(),
        started: false,
        done: false,
    })
}

impl<T> Combinations<'_, T> {
    fn advance(&mut self) -> bool {
        let n = self.items.len();
        let k = self.indices.len();
        let Some(i) = (0..k).rev().find(|&i| self.indices[i] < n - k + i) else {
            return false;
        };
        self.indices[i] += 1;
        for j in i + 1..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        true
    }
}

impl<T: Clone> Iterator for Combinations<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.started && !self.advance() {
            self.done = true;
            return None;
        }
        self.started = true;
        Some(self.indices.iter().map(|&i| self.items[i].clone()).collect())
    }
}
