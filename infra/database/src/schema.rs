use crate::error::{DatabaseError, DatabaseErrorExt};
use surrealdb::Surreal;
use surrealdb::engine::any::Any;

/// A named `SurrealQL` schema script.
///
/// Scripts are expected to use `DEFINE ... OVERWRITE` statements so that
/// re-applying them converges on the same definitions.
#[derive(Debug, Clone, Copy)]
pub struct SchemaScript {
    pub name: &'static str,
    pub script: &'static str,
}

impl SchemaScript {
    #[must_use]
    pub const fn new(name: &'static str, script: &'static str) -> Self {
        Self { name, script }
    }
}

#[derive(Debug, Default)]
pub(crate) struct SchemaReport {
    pub applied: Vec<&'static str>,
}

#[derive(Debug)]
pub(crate) struct SchemaRunner {
    db: Surreal<Any>,
}

impl SchemaRunner {
    #[must_use]
    pub(crate) const fn new(db: Surreal<Any>) -> Self {
        Self { db }
    }

    pub(crate) async fn run(
        &self,
        scripts: &[SchemaScript],
    ) -> Result<SchemaReport, DatabaseError> {
        let mut report = SchemaReport::default();

        for schema in scripts {
            self.apply_schema(schema).await?;
            report.applied.push(schema.name);
        }

        Ok(report)
    }

    async fn apply_schema(&self, schema: &SchemaScript) -> Result<(), DatabaseError> {
        let response = self
            .db
            .query(schema.script)
            .await
            .context(format!("Schema execution failed at {}", schema.name))?;

        response.check().map_err(|e| DatabaseError::Schema {
            message: surrealdb::Error::from(e).to_string().into(),
            context: Some(schema.name.into()),
        })?;

        Ok(())
    }
}
