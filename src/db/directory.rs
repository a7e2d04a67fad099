//! Employee directory lookups against the `phone_book` table.

use crate::errors::AppResult;
use crate::models::employee::{Employee, SearchField};
use rusqlite::{Connection, Row, params};

const COLS: &str = "id, full_name, position, department, room, internal_phone, email";

fn map_row(row: &Row) -> rusqlite::Result<Employee> {
    Ok(Employee {
        id: row.get("id")?,
        full_name: row.get("full_name")?,
        position: row.get("position")?,
        department: row.get("department")?,
        room: row.get("room")?,
        internal_phone: row.get("internal_phone")?,
        email: row.get("email")?,
    })
}

/// Substring search over one whitelisted column, ordered by full name.
/// The column name comes from [`SearchField`], never from raw input.
pub fn search_employees(
    conn: &Connection,
    field: SearchField,
    query: &str,
) -> AppResult<Vec<Employee>> {
    let sql = format!(
        "SELECT {COLS} FROM phone_book WHERE {} LIKE ?1 ORDER BY full_name",
        field.column()
    );
    let mut stmt = conn.prepare_cached(&sql)?;
    let pattern = format!("%{}%", query);
    let rows = stmt.query_map([pattern], map_row)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Distinct non-null departments, alphabetically ordered.
pub fn list_departments(conn: &Connection) -> AppResult<Vec<String>> {
    let mut stmt = conn.prepare_cached(
        "SELECT DISTINCT department FROM phone_book WHERE department IS NOT NULL ORDER BY department",
    )?;
    let rows = stmt.query_map([], |r| r.get::<_, String>(0))?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Insert a directory row. The directory is externally owned in production;
/// this exists for seeding demo and test data.
pub fn insert_employee(conn: &Connection, emp: &Employee) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO phone_book (full_name, position, department, room, internal_phone, email)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            emp.full_name,
            emp.position,
            emp.department,
            emp.room,
            emp.internal_phone,
            emp.email,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}
