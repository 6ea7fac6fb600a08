use crate::types::{Table, Value};

/// Concatenate tables row-wise.
///
/// The output columns are the union of all input columns in first-seen order. Rows keep
/// their input order; a row whose source table lacks a column gets [`Value::Null`] there.
pub fn concat(tables: impl IntoIterator<Item = Table>) -> Table {
    let tables: Vec<Table> = tables.into_iter().collect();

    let mut columns: Vec<String> = Vec::new();
    for table in &tables {
        for name in &table.columns {
            if !columns.contains(name) {
                columns.push(name.clone());
            }
        }
    }

    let total_rows = tables.iter().map(Table::row_count).sum();
    let mut rows: Vec<Vec<Value>> = Vec::with_capacity(total_rows);
    for table in tables {
        // Position of each output column in this table, if present.
        let mapping: Vec<Option<usize>> = columns.iter().map(|c| table.index_of(c)).collect();
        if mapping.iter().enumerate().all(|(out, src)| *src == Some(out)) {
            rows.extend(table.rows);
            continue;
        }
        for mut src in table.rows {
            let row = mapping
                .iter()
                .map(|idx| match idx {
                    Some(i) => std::mem::replace(&mut src[*i], Value::Null),
                    None => Value::Null,
                })
                .collect();
            rows.push(row);
        }
    }

    Table::new(columns, rows)
}
