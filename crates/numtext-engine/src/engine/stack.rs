//! Column stacking of captured 2-D blocks.

use super::value::Value;

/// Zip the rows of several 2-D blocks and concatenate each row set.
///
/// Wide tables are often printed as a series of column blocks; this joins
/// them back into one table. The result has as many rows as the shortest
/// block. Entries that are not arrays count as empty.
pub fn column_stack_2d(blocks: &[Value]) -> Value {
    let tables: Vec<&[Value]> = blocks.iter().map(|b| b.as_array().unwrap_or(&[])).collect();
    let height = tables.iter().map(|t| t.len()).min().unwrap_or(0);

    let rows = (0..height)
        .map(|r| {
            let row = tables
                .iter()
                .flat_map(|t| t[r].as_array().unwrap_or(&[]).iter().cloned())
                .collect();
            Value::Array(row)
        })
        .collect();

    Value::Array(rows)
}
