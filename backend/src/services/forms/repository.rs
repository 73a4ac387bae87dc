//! SQLite persistence for form definitions.
//!
//! Each form is stored as one row: the searchable metadata in columns and the
//! complete `FormDefinition` as JSON in `definition`. Functions take a
//! `Connection` so handlers can open the configured file while tests use an
//! in-memory database.

use std::path::Path;

use common::error::FormError;
use common::model::form::FormDefinition;
use common::requests::{FormStatus, FormSummary};
use rusqlite::{params, Connection, OptionalExtension};
use thiserror::Error;

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS forms (
        id             TEXT PRIMARY KEY,
        name           TEXT NOT NULL,
        description    TEXT NOT NULL,
        status         TEXT NOT NULL,
        definition     TEXT NOT NULL,
        question_count INTEGER NOT NULL,
        last_modified  TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
    );
";

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Error de base de datos: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Error de serialización: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] FormError),

    #[error("El id del formulario no puede estar vacío")]
    MissingId,

    #[error("Formulario no encontrado: {0}")]
    NotFound(String),

    #[error("Registro corrupto: {0}")]
    Corrupt(String),
}

/// Opens (or creates) the database file and makes sure the schema exists.
pub fn open(path: &Path) -> Result<Connection, RepositoryError> {
    let conn = Connection::open(path)?;
    ensure_schema(&conn)?;
    Ok(conn)
}

pub fn ensure_schema(conn: &Connection) -> Result<(), RepositoryError> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}

/// Inserts or replaces a form. The form must carry an id and pass validation.
pub fn save_form(
    conn: &Connection,
    form: &FormDefinition,
    status: FormStatus,
) -> Result<(), RepositoryError> {
    if form.id.trim().is_empty() {
        return Err(RepositoryError::MissingId);
    }
    form.validate()?;

    let definition = serde_json::to_string(form)?;
    conn.execute(
        "INSERT INTO forms (id, name, description, status, definition, question_count, last_modified)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, CURRENT_TIMESTAMP)
         ON CONFLICT(id) DO UPDATE SET
            name = excluded.name,
            description = excluded.description,
            status = excluded.status,
            definition = excluded.definition,
            question_count = excluded.question_count,
            last_modified = CURRENT_TIMESTAMP",
        params![
            &form.id,
            &form.name,
            &form.description,
            status.as_str(),
            &definition,
            form.len() as i64
        ],
    )?;

    Ok(())
}

pub fn find_form(conn: &Connection, form_id: &str) -> Result<FormDefinition, RepositoryError> {
    let definition: Option<String> = conn
        .query_row(
            "SELECT definition FROM forms WHERE id = ?1",
            params![form_id],
            |row| row.get(0),
        )
        .optional()?;

    let definition = definition.ok_or_else(|| RepositoryError::NotFound(form_id.to_string()))?;
    Ok(serde_json::from_str(&definition)?)
}

/// All stored forms, most recently modified first.
pub fn list_forms(conn: &Connection) -> Result<Vec<FormSummary>, RepositoryError> {
    let mut stmt = conn.prepare(
        "SELECT id, name, description, question_count, status, last_modified
         FROM forms ORDER BY last_modified DESC, name ASC",
    )?;
    let rows = stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, i64>(3)?,
                row.get::<_, String>(4)?,
                row.get::<_, String>(5)?,
            ))
        })?
        .collect::<Result<Vec<_>, _>>()?;

    rows.into_iter()
        .map(|(id, name, description, question_count, status, last_modified)| -> Result<FormSummary, RepositoryError> {
            Ok(FormSummary {
                id,
                name,
                description,
                question_count: usize::try_from(question_count)
                    .map_err(|_| RepositoryError::Corrupt(format!("question_count {}", question_count)))?,
                status: status.parse().map_err(RepositoryError::Corrupt)?,
                last_modified,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::question::{QuestionPatch, QuestionType};

    fn memory_db() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        ensure_schema(&conn).unwrap();
        conn
    }

    fn sample_form(id: &str) -> FormDefinition {
        let mut form = FormDefinition::new("Autorización de tejado");
        form.id = id.to_string();
        form.set_description("Complete antes de empezar la obra.");
        let address = form.add_question(QuestionType::ShortText).id.clone();
        form.update_question(
            &address,
            &QuestionPatch {
                text: Some("Dirección de la obra".to_string()),
                required: Some(true),
                ..QuestionPatch::default()
            },
        )
        .unwrap();
        form.add_question(QuestionType::Checkboxes);
        form.add_question(QuestionType::Signature);
        form
    }

    #[test]
    fn saved_form_reads_back_identically() {
        let conn = memory_db();
        let form = sample_form("f-1");
        save_form(&conn, &form, FormStatus::Draft).unwrap();
        assert_eq!(find_form(&conn, "f-1").unwrap(), form);
    }

    #[test]
    fn saving_again_updates_in_place() {
        let conn = memory_db();
        let mut form = sample_form("f-1");
        save_form(&conn, &form, FormStatus::Draft).unwrap();

        form.set_name("Autorización de tejado v2");
        let first = form.questions[0].id.clone();
        form.delete_question(&first).unwrap();
        save_form(&conn, &form, FormStatus::Active).unwrap();

        let listed = list_forms(&conn).unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "Autorización de tejado v2");
        assert_eq!(listed[0].question_count, 2);
        assert_eq!(listed[0].status, FormStatus::Active);
        assert_eq!(find_form(&conn, "f-1").unwrap(), form);
    }

    #[test]
    fn forms_without_id_are_rejected() {
        let conn = memory_db();
        let form = sample_form("  ");
        assert!(matches!(
            save_form(&conn, &form, FormStatus::Draft),
            Err(RepositoryError::MissingId)
        ));
        assert!(list_forms(&conn).unwrap().is_empty());
    }

    #[test]
    fn invalid_forms_are_not_stored() {
        let conn = memory_db();
        let mut form = sample_form("f-2");
        let clone = form.questions[0].clone();
        form.questions.push(clone);
        assert!(matches!(
            save_form(&conn, &form, FormStatus::Active),
            Err(RepositoryError::Invalid(FormError::Validation(_)))
        ));
        assert!(matches!(
            find_form(&conn, "f-2"),
            Err(RepositoryError::NotFound(_))
        ));
    }

    #[test]
    fn listing_covers_every_saved_form() {
        let conn = memory_db();
        save_form(&conn, &sample_form("a"), FormStatus::Active).unwrap();
        save_form(&conn, &FormDefinition { id: "b".to_string(), ..FormDefinition::default() }, FormStatus::Draft)
            .unwrap();

        let mut ids: Vec<_> = list_forms(&conn).unwrap().into_iter().map(|s| (s.id, s.question_count)).collect();
        ids.sort();
        assert_eq!(ids, vec![("a".to_string(), 3), ("b".to_string(), 0)]);
    }
}
