//! Statement building and execution
//!
//! Synchronous functions over a borrowed connection. Values supplied by
//! callers are always bound as parameters; only column and table names taken
//! from [`Resource`] are formatted into SQL text.

use rusqlite::types::{Value as SqlValue, ValueRef};
use rusqlite::{params, params_from_iter, Connection, Params, Statement};
use serde_json::{Number, Value};

use super::errors::{StoreError, StoreResult};
use super::resource::Resource;
use super::result::{ExecResult, Row};

/// A column name paired with the value to write into it
pub type Field = (String, Value);

/// Returns every row of `resource`.
pub fn select_all(conn: &Connection, resource: Resource) -> StoreResult<Vec<Row>> {
    let mut stmt = conn.prepare(&resource.select_all_sql())?;
    collect_rows(&mut stmt, [])
}

/// Returns the row whose id matches, or `None`.
pub fn select_by_id(conn: &Connection, resource: Resource, id: &str) -> StoreResult<Option<Row>> {
    let mut stmt = conn.prepare(&resource.select_by_id_sql())?;
    let rows = collect_rows(&mut stmt, params![id_value(id)])?;
    Ok(rows.into_iter().next())
}

/// Inserts one row built from `fields` and reports the assigned rowid.
pub fn insert(conn: &Connection, resource: Resource, fields: &[Field]) -> StoreResult<ExecResult> {
    let columns = resolve_columns(resource, fields)?;

    let sql = if columns.is_empty() {
        format!("INSERT INTO {} DEFAULT VALUES", resource.table())
    } else {
        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            resource.table(),
            columns.join(", "),
            placeholders(columns.len()),
        )
    };

    let changed = conn.execute(&sql, params_from_iter(fields.iter().map(|(_, v)| to_sql_value(v))))?;
    Ok(ExecResult::inserted(changed, conn.last_insert_rowid()))
}

/// Sets `fields` on the row whose id matches. Zero rows changed is not an error.
pub fn update_by_id(
    conn: &Connection,
    resource: Resource,
    id: &str,
    fields: &[Field],
) -> StoreResult<ExecResult> {
    if fields.is_empty() {
        return Err(StoreError::EmptyUpdate(resource.table()));
    }
    let columns = resolve_columns(resource, fields)?;

    let assignments = columns
        .iter()
        .enumerate()
        .map(|(i, column)| format!("{column} = ?{}", i + 1))
        .collect::<Vec<_>>()
        .join(", ");
    let sql = format!(
        "UPDATE {} SET {} WHERE id = ?{}",
        resource.table(),
        assignments,
        columns.len() + 1
    );

    let mut values: Vec<SqlValue> = fields.iter().map(|(_, v)| to_sql_value(v)).collect();
    values.push(id_value(id));

    let changed = conn.execute(&sql, params_from_iter(values))?;
    Ok(ExecResult::changed(changed))
}

/// Deletes the row whose id matches, detaching dependents first.
///
/// Both statements run in one transaction.
pub fn delete_by_id(conn: &mut Connection, resource: Resource, id: &str) -> StoreResult<ExecResult> {
    let key = id_value(id);
    let tx = conn.transaction()?;

    if let Some(detach) = resource.detach_sql() {
        let detached = tx.execute(detach, params![key])?;
        tracing::debug!(resource = %resource, id, detached, "detached dependent rows");
    }

    let sql = format!("DELETE FROM {} WHERE id = ?1", resource.table());
    let changed = tx.execute(&sql, params![key])?;
    tx.commit()?;

    Ok(ExecResult::changed(changed))
}

/// Cheapest round trip through the connection.
pub fn ping(conn: &Connection) -> StoreResult<()> {
    conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))?;
    Ok(())
}

fn collect_rows<P: Params>(stmt: &mut Statement<'_>, params: P) -> StoreResult<Vec<Row>> {
    let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
    let mut rows = stmt.query(params)?;

    let mut out = Vec::new();
    while let Some(row) = rows.next()? {
        let mut object = Row::new();
        for (idx, name) in columns.iter().enumerate() {
            object.insert(name.clone(), to_json_value(row.get_ref(idx)?));
        }
        out.push(object);
    }
    Ok(out)
}

fn resolve_columns(resource: Resource, fields: &[Field]) -> StoreResult<Vec<&'static str>> {
    fields
        .iter()
        .map(|(name, _)| {
            resource.writable(name).ok_or_else(|| StoreError::UnknownColumn {
                table: resource.table(),
                column: name.clone(),
            })
        })
        .collect()
}

fn placeholders(count: usize) -> String {
    (1..=count)
        .map(|i| format!("?{i}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Binds numeric ids as integers; anything else is compared as text and
/// simply matches nothing.
fn id_value(id: &str) -> SqlValue {
    id.parse::<i64>()
        .map_or_else(|_| SqlValue::Text(id.to_string()), SqlValue::Integer)
}

/// JSON request value to SQLite storage value
pub fn to_sql_value(value: &Value) -> SqlValue {
    match value {
        Value::Null => SqlValue::Null,
        Value::Bool(b) => SqlValue::Integer(i64::from(*b)),
        Value::Number(n) => n
            .as_i64()
            .map(SqlValue::Integer)
            .or_else(|| n.as_f64().map(SqlValue::Real))
            .unwrap_or(SqlValue::Null),
        Value::String(s) => SqlValue::Text(s.clone()),
        // nested structures are stored as their JSON text
        other => SqlValue::Text(other.to_string()),
    }
}

/// SQLite column value to JSON
pub fn to_json_value(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) => Value::from(i),
        ValueRef::Real(f) => Number::from_f64(f).map_or(Value::Null, Value::Number),
        ValueRef::Text(bytes) => Value::String(String::from_utf8_lossy(bytes).into_owned()),
        ValueRef::Blob(bytes) => Value::Array(bytes.iter().map(|b| Value::from(*b)).collect()),
    }
}
