//! Longest-matching-blocks similarity ratio (Ratcliff/Obershelp).
//!
//! Operates on Unicode scalar values. `a` is scanned, `b` is indexed; when
//! `b` has at least 200 elements, elements occurring more than `1% + 1`
//! times are treated as "popular" and never start a match, although matches
//! may still extend over them.

use rustc_hash::FxHashMap;

const AUTOJUNK_MIN_LEN: usize = 200;

/// Similarity ratio `2*M / (len(a) + len(b))` in `[0, 1]`; two empty strings
/// are identical.
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    let matches = Matcher::new(&a, &b).matching_chars();
    2.0 * matches as f64 / total as f64
}

/// Upper bound on [`ratio`] from the lengths alone.
pub fn length_bound(a: &str, b: &str) -> f64 {
    let (la, lb) = (a.chars().count(), b.chars().count());
    if la + lb == 0 {
        return 1.0;
    }
    2.0 * la.min(lb) as f64 / (la + lb) as f64
}

struct Matcher<'s> {
    a: &'s [char],
    b: &'s [char],
    b2j: FxHashMap<char, Vec<usize>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Block {
    i: usize,
    j: usize,
    size: usize,
}

impl<'s> Matcher<'s> {
    fn new(a: &'s [char], b: &'s [char]) -> Self {
        let mut b2j: FxHashMap<char, Vec<usize>> = FxHashMap::default();
        for (j, c) in b.iter().enumerate() {
            b2j.entry(*c).or_default().push(j);
        }
        if b.len() >= AUTOJUNK_MIN_LEN {
            let limit = b.len() / 100 + 1;
            b2j.retain(|_, positions| positions.len() <= limit);
        }
        Self { a, b, b2j }
    }

    fn matching_chars(&self) -> usize {
        let mut queue = vec![(0, self.a.len(), 0, self.b.len())];
        let mut total = 0;
        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let Block { i, j, size } = self.longest_match(alo, ahi, blo, bhi);
            if size == 0 {
                continue;
            }
            total += size;
            if alo < i && blo < j {
                queue.push((alo, i, blo, j));
            }
            if i + size < ahi && j + size < bhi {
                queue.push((i + size, ahi, j + size, bhi));
            }
        }
        total
    }

    /// Longest block in `a[alo..ahi]` × `b[blo..bhi]`, earliest in `a` then
    /// in `b` on ties.
    fn longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> Block {
        let (a, b) = (self.a, self.b);
        let mut best = Block {
            i: alo,
            j: blo,
            size: 0,
        };
        // j2len[j] = length of the match ending at a[i-1], b[j]
        let mut j2len: FxHashMap<usize, usize> = FxHashMap::default();
        for (i, c) in a.iter().enumerate().take(ahi).skip(alo) {
            let mut next: FxHashMap<usize, usize> = FxHashMap::default();
            if let Some(positions) = self.b2j.get(c) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| j2len.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    next.insert(j, k);
                    if k > best.size {
                        best = Block {
                            i: i + 1 - k,
                            j: j + 1 - k,
                            size: k,
                        };
                    }
                }
            }
            j2len = next;
        }

        // Popular elements never seed a match; grow the block over them.
        while best.i > alo && best.j > blo && a[best.i - 1] == b[best.j - 1] {
            best.i -= 1;
            best.j -= 1;
            best.size += 1;
        }
        while best.i + best.size < ahi
            && best.j + best.size < bhi
            && a[best.i + best.size] == b[best.j + best.size]
        {
            best.size += 1;
        }
        best
    }
}
