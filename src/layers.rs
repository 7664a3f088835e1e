//! Rolling score layers used by the substring matcher.
//!
//! Conceptually the matcher fills a 3D table `score[len][i][j]`. Layer `len`
//! only reads layer `len - 1`, so two `rows × cols` buffers suffice: the
//! previous layer is read while the current one is written, then the roles
//! swap.

/// Two same-shape score buffers whose roles rotate once per layer.
#[derive(Debug, Clone)]
pub struct ScoreLayers {
    previous: Vec<f64>,
    current: Vec<f64>,
}

impl ScoreLayers {
    /// Zero-filled layers for `rows × cols` end-position pairs.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            previous: vec![0.0; rows * cols],
            current: vec![0.0; rows * cols],
        }
    }

    /// Read the previous layer while writing the current one.
    #[inline]
    pub fn split(&mut self) -> (&[f64], &mut [f64]) {
        (&self.previous, &mut self.current)
    }

    /// The current layer becomes the previous one; the old previous layer is
    /// handed out for overwriting.
    #[inline]
    pub fn rotate(&mut self) {
        std::mem::swap(&mut self.previous, &mut self.current);
    }
}
