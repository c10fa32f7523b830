use serde::Serialize;

/// 2x2 cross-tabulation of key (rows) against candidate (columns).
/// a: 1/1, b: key 0 candidate 1, c: key 1 candidate 0, d: 0/0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConfusionMatrix {
    pub a: usize,
    pub b: usize,
    pub c: usize,
    pub d: usize,
}

impl ConfusionMatrix {
    pub fn total(&self) -> usize {
        self.a + self.b + self.c + self.d
    }

    pub fn agreements(&self) -> usize {
        self.a + self.d
    }

    pub fn key_positive(&self) -> usize {
        self.a + self.c
    }

    pub fn key_negative(&self) -> usize {
        self.b + self.d
    }

    pub fn candidate_positive(&self) -> usize {
        self.a + self.b
    }

    pub fn candidate_negative(&self) -> usize {
        self.c + self.d
    }
}

/// Question numbers (1-based, ascending) where the candidate departed from the key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Disagreements {
    pub false_positives: Vec<usize>,
    pub false_negatives: Vec<usize>,
}

impl Disagreements {
    pub fn len(&self) -> usize {
        self.false_positives.len() + self.false_negatives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.false_positives.is_empty() && self.false_negatives.is_empty()
    }

    /// All disagreeing questions in ascending order.
    pub fn questions(&self) -> Vec<usize> {
        let mut all = Vec::with_capacity(self.len());
        all.extend_from_slice(&self.false_positives);
        all.extend_from_slice(&self.false_negatives);
        all.sort_unstable();
        all
    }
}
