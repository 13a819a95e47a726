//! Hash implementation for SqlValue

use std::hash::{Hash, Hasher};

use crate::sql_value::SqlValue;

/// Hash implementation for SqlValue
///
/// Consistent with the structural `PartialEq`:
/// - Floats hash by bit pattern, all NaN values hash alike
/// - NULL hashes only its discriminant
impl Hash for SqlValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        use SqlValue::*;

        std::mem::discriminant(self).hash(state);

        match self {
            Integer(i) => i.hash(state),
            Double(f) => {
                if f.is_nan() {
                    f64::NAN.to_bits().hash(state);
                } else if *f == 0.0 {
                    // 0.0 == -0.0
                    0.0f64.to_bits().hash(state);
                } else {
                    f.to_bits().hash(state);
                }
            }
            Varchar(s) => s.hash(state),
            Boolean(b) => b.hash(state),
            Null => {}
        }
    }
}
