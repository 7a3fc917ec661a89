//! Knowledge graph to SQLite import pipeline.
//!
//! Entities are imported one at a time, parents first, each in its own
//! transaction. The first failure aborts the run; re-running is the only
//! recovery.

use anyhow::{Context, Result};
use tracing::info;

use schools_core::{EntityKind, TableSchema};
use schools_db::queries::records;
use schools_db::DbPool;
use schools_sparql::QuerySource;

use crate::queries;
use crate::reconcile::reconcile;
use crate::transform::{self, Transform};

/// Query and transformer for one imported table.
#[derive(Debug, Clone, Copy)]
pub struct EntityImport {
    pub kind: EntityKind,
    pub query: &'static str,
    pub transform: Transform,
}

impl EntityImport {
    pub fn for_kind(kind: EntityKind) -> Self {
        let (query, transform): (&'static str, Transform) = match kind {
            EntityKind::City => (queries::CITIES, transform::identity),
            EntityKind::School => (queries::SCHOOLS, transform::schools),
            EntityKind::Dzi => (queries::EXAM_SESSIONS, transform::exam_sessions),
            EntityKind::Score => (queries::SCORES, transform::scores),
        };

        Self { kind, query, transform }
    }

    pub fn schema(&self) -> &'static TableSchema {
        self.kind.schema()
    }
}

/// Options for an import run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImportOptions {
    /// Import a single entity instead of all of them.
    pub only: Option<EntityKind>,
    /// Fetch and reconcile without writing.
    pub dry_run: bool,
}

/// Outcome of importing one entity.
///
/// In a dry run `inserted` and `updated` are the rows that would be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityReport {
    pub entity: EntityKind,
    pub fetched: usize,
    pub inserted: usize,
    pub updated: usize,
    /// Fetched rows that were not written: duplicates and malformed rows.
    pub dropped: usize,
}

/// Outcome of an import run.
#[derive(Debug, Clone, Default)]
pub struct ImportReport {
    pub entities: Vec<EntityReport>,
    pub dry_run: bool,
}

impl ImportReport {
    pub fn inserted(&self) -> usize {
        self.entities.iter().map(|e| e.inserted).sum()
    }

    pub fn updated(&self) -> usize {
        self.entities.iter().map(|e| e.updated).sum()
    }

    pub fn dropped(&self) -> usize {
        self.entities.iter().map(|e| e.dropped).sum()
    }

    pub fn get(&self, entity: EntityKind) -> Option<&EntityReport> {
        self.entities.iter().find(|e| e.entity == entity)
    }
}

/// Run the import for every entity in dependency order.
pub async fn run_full_import(
    source: &dyn QuerySource,
    pool: &DbPool,
    options: &ImportOptions,
) -> Result<ImportReport> {
    info!(dry_run = options.dry_run, only = ?options.only, "Starting import");

    let mut report = ImportReport {
        entities: Vec::new(),
        dry_run: options.dry_run,
    };

    for kind in EntityKind::ORDER {
        if options.only.is_some_and(|only| only != kind) {
            continue;
        }

        let import = EntityImport::for_kind(kind);
        let entity_report = import_entity(source, pool, &import, options.dry_run)
            .await
            .with_context(|| format!("Failed to import {}", kind))?;
        report.entities.push(entity_report);
    }

    info!(
        inserted = report.inserted(),
        updated = report.updated(),
        dropped = report.dropped(),
        "Import complete"
    );

    Ok(report)
}

/// Fetch, transform, reconcile and write one entity.
pub async fn import_entity(
    source: &dyn QuerySource,
    pool: &DbPool,
    import: &EntityImport,
    dry_run: bool,
) -> Result<EntityReport> {
    let schema = import.schema();

    let raw = source
        .query(import.query)
        .await
        .with_context(|| format!("Query for {} failed", schema.name))?;
    let fetched = raw.len();
    info!(table = schema.name, fetched, "Fetched rows");

    let rows = (import.transform)(raw)?;

    let existing = pool
        .with_conn(|conn| records::existing_ids(conn, schema))
        .with_context(|| format!("Failed to read existing {} ids", schema.name))?;

    let plan = reconcile(schema, rows, &existing);

    let (inserted, updated) = if dry_run {
        (plan.to_insert.len(), plan.to_update.len())
    } else {
        let applied = records::apply(pool, schema, &plan.to_insert, &plan.to_update)
            .with_context(|| format!("Failed to write {}", schema.name))?;
        (applied.inserted, applied.updated)
    };

    Ok(EntityReport {
        entity: import.kind,
        fetched,
        inserted,
        updated,
        dropped: fetched.saturating_sub(inserted + updated),
    })
}
