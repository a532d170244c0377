//! Incrementally row-reduced 32x32 matrix over GF(2).
//!
//! Rows are `u32` coefficient vectors. The matrix is kept in row
//! semi-canonical form: a non-zero row's lowest set bit (its pivot) equals the
//! row's index, and zero rows may sit between pivot rows. Each accepted row
//! immediately eliminates its pivot column from every other row, so no
//! separate back-substitution pass is needed once the system reaches full
//! rank.
//!
//! # Invariants
//! - `rows[i] == 0` or `rows[i].trailing_zeros() == i`.
//! - For every non-zero `rows[i]`, bit `i` is clear in all other rows.

/// 32x32 GF(2) matrix in row semi-canonical form.
///
/// Bit 31 of each row is reserved by callers for an augmented constant-term
/// column; the matrix itself treats all 32 columns uniformly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SemiCanonicalMatrix {
    rows: [u32; 32],
}

impl SemiCanonicalMatrix {
    /// Constructs the zero matrix.
    pub const fn new() -> Self {
        Self { rows: [0; 32] }
    }

    /// Returns the row at `index`.
    #[inline]
    pub fn row(&self, index: u32) -> u32 {
        self.rows[index as usize]
    }

    /// Returns the XOR of the rows selected by the set bits of `select`.
    ///
    /// This is a row-vector times matrix product over GF(2).
    #[inline]
    pub fn row_sum(&self, select: u32) -> u32 {
        let mut sum = 0u32;
        for (i, &row) in self.rows.iter().enumerate() {
            // Branch-free select: all-ones mask when bit i is set.
            let mask = 0u32.wrapping_sub((select >> i) & 1);
            sum ^= row & mask;
        }
        sum
    }

    /// Attempts to insert `row` as a new equation.
    ///
    /// The row is first reduced against the existing pivots. A row that
    /// reduces to zero is a linear combination of rows already present and is
    /// rejected. Otherwise its pivot column is eliminated from every other
    /// row and the row is installed at its pivot index, preserving
    /// semi-canonical form.
    ///
    /// Returns whether the row was inserted (i.e. the rank grew by one).
    pub fn push_row(&mut self, mut row: u32) -> bool {
        row ^= self.row_sum(row);

        if row == 0 {
            return false;
        }

        let pivot = row.trailing_zeros();
        debug_assert!(pivot < 32);
        debug_assert_eq!(self.rows[pivot as usize], 0, "pivot slot must be free");

        for other in self.rows.iter_mut() {
            let mask = 0u32.wrapping_sub((*other >> pivot) & 1);
            *other ^= row & mask;
        }
        self.rows[pivot as usize] = row;

        true
    }

    /// Counts non-zero rows.
    ///
    /// Callers on the hot path track rank incrementally from `push_row`
    /// results; this recount exists for assertions and tests.
    pub fn rank(&self) -> u32 {
        self.rows.iter().filter(|&&r| r != 0).count() as u32
    }
}
