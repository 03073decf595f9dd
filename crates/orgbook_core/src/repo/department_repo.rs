//! Department repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Own the `departments` table lifecycle (create/drop).
//! - Translate between `Department` values and table rows.
//! - Provide save/delete and point/collection queries.
//!
//! # Invariants
//! - Insert-or-update dispatch is keyed on `Department::id` alone; the
//!   mapper never pre-checks row existence.
//! - An update or delete that matches zero rows is silent success, not an
//!   error.
//! - Absence of a row is reported as `None`, never as an error.
//! - All parameters bind positionally; SQL text never interpolates values.

use crate::db::DbResult;
use crate::model::department::{Department, DepartmentId};
use rusqlite::{params, Connection, Row};

const DEPARTMENT_SELECT_SQL: &str = "SELECT id, name, location FROM departments";

/// Repository interface for department table lifecycle and row operations.
pub trait DepartmentRepository {
    /// Ensures the `departments` table exists. No-op when already present.
    fn create_table(&self) -> DbResult<()>;
    /// Removes the `departments` table. No-op when already absent.
    fn drop_table(&self) -> DbResult<()>;
    /// Inserts a transient department or updates the row its id names.
    ///
    /// On insert the store-assigned id is written back into `department`.
    /// On update, zero matched rows is silent success.
    fn save(&self, department: &mut Department) -> DbResult<()>;
    /// Builds a transient department, saves it, and returns the persisted
    /// instance.
    fn create(&self, name: &str, location: &str) -> DbResult<Department>;
    /// Named alias for [`save`](Self::save) on an already-persisted
    /// instance. Same code path, kept for call-site intent.
    fn update(&self, department: &mut Department) -> DbResult<()>;
    /// Removes the row named by `department.id`, then clears the id so the
    /// instance is transient again. Safe to call twice.
    fn delete(&self, department: &mut Department) -> DbResult<()>;
    /// Returns every row as a department, in default table order.
    fn get_all(&self) -> DbResult<Vec<Department>>;
    /// Returns the department with the given id, or `None`.
    fn find_by_id(&self, id: DepartmentId) -> DbResult<Option<Department>>;
    /// Returns one department matching `name` by equality, or `None`.
    ///
    /// When several rows share a name, which one comes back is
    /// storage-defined; no ordering clause is applied.
    fn find_by_name(&self, name: &str) -> DbResult<Option<Department>>;
}

/// SQLite-backed department repository.
///
/// Borrows a long-lived connection owned by the caller; all statements run
/// in autocommit mode, so each mutating operation is durable on return.
pub struct SqliteDepartmentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteDepartmentRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl DepartmentRepository for SqliteDepartmentRepository<'_> {
    fn create_table(&self) -> DbResult<()> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS departments (
                id INTEGER PRIMARY KEY,
                name TEXT,
                location TEXT
            );",
        )?;
        Ok(())
    }

    fn drop_table(&self) -> DbResult<()> {
        self.conn
            .execute_batch("DROP TABLE IF EXISTS departments;")?;
        Ok(())
    }

    fn save(&self, department: &mut Department) -> DbResult<()> {
        match department.id {
            None => {
                self.conn.execute(
                    "INSERT INTO departments (name, location) VALUES (?1, ?2);",
                    params![department.name, department.location],
                )?;
                department.id = Some(self.conn.last_insert_rowid());
            }
            Some(id) => {
                // Zero matched rows is deliberately not an error: the id is
                // trusted as-is and an unmatched update stays silent.
                self.conn.execute(
                    "UPDATE departments SET name = ?1, location = ?2 WHERE id = ?3;",
                    params![department.name, department.location, id],
                )?;
            }
        }

        Ok(())
    }

    fn create(&self, name: &str, location: &str) -> DbResult<Department> {
        let mut department = Department::new(name, location);
        self.save(&mut department)?;
        Ok(department)
    }

    fn update(&self, department: &mut Department) -> DbResult<()> {
        self.save(department)
    }

    fn delete(&self, department: &mut Department) -> DbResult<()> {
        if let Some(id) = department.id {
            self.conn
                .execute("DELETE FROM departments WHERE id = ?1;", params![id])?;
        }

        // The instance becomes transient whether or not a row matched, so
        // deleting twice is safe.
        department.id = None;
        Ok(())
    }

    fn get_all(&self) -> DbResult<Vec<Department>> {
        let mut stmt = self.conn.prepare(DEPARTMENT_SELECT_SQL)?;
        let mut rows = stmt.query([])?;
        let mut departments = Vec::new();

        while let Some(row) = rows.next()? {
            departments.push(department_from_row(row)?);
        }

        Ok(departments)
    }

    fn find_by_id(&self, id: DepartmentId) -> DbResult<Option<Department>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{DEPARTMENT_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(department_from_row(row)?));
        }

        Ok(None)
    }

    fn find_by_name(&self, name: &str) -> DbResult<Option<Department>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{DEPARTMENT_SELECT_SQL} WHERE name = ?1;"))?;

        let mut rows = stmt.query(params![name])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(department_from_row(row)?));
        }

        Ok(None)
    }
}

/// Translates one `departments` row into a [`Department`].
///
/// Pure translation, no I/O. Column order follows the table definition:
/// `(id, name, location)`.
pub fn department_from_row(row: &Row<'_>) -> DbResult<Department> {
    Ok(Department {
        id: Some(row.get(0)?),
        name: row.get(1)?,
        location: row.get(2)?,
    })
}
