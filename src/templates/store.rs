//! Template CRUD.
//!
//! Deleting a template also deletes every workout logged against it.

use crate::error::{TrackerError, TrackerResult};
use crate::ids::IdSupplier;
use crate::storage::CollectionStore;
use crate::workouts::store::remove_for_template;

use super::types::{Category, ExerciseSpec, Template, TemplateId};

/// Store for workout templates.
pub struct TemplateStore<'a> {
    store: &'a dyn CollectionStore,
    ids: &'a dyn IdSupplier,
}

impl<'a> TemplateStore<'a> {
    /// Create a template store over the given collections.
    pub fn new(store: &'a dyn CollectionStore, ids: &'a dyn IdSupplier) -> Self {
        Self { store, ids }
    }

    /// Create and persist a new template.
    pub fn create(
        &self,
        name: &str,
        category: Category,
        exercises: Vec<ExerciseSpec>,
    ) -> TrackerResult<Template> {
        let template = Template::new(
            TemplateId::new(self.ids.next_id()),
            name,
            category,
            exercises,
        )?;

        let mut templates = self.store.templates()?;
        templates.push(template.clone());
        self.store.put_templates(&templates)?;

        tracing::info!(
            "Created template '{}' ({}, {} exercises)",
            template.name,
            template.category,
            template.exercises.len()
        );
        Ok(template)
    }

    /// Replace a template's name, category and exercises.
    ///
    /// Workouts already logged keep their own snapshot.
    pub fn update(
        &self,
        id: &TemplateId,
        name: &str,
        category: Category,
        exercises: Vec<ExerciseSpec>,
    ) -> TrackerResult<Template> {
        let (name, exercises) = Template::validated(name, exercises)?;

        let mut templates = self.store.templates()?;
        let template = templates
            .iter_mut()
            .find(|t| &t.id == id)
            .ok_or_else(|| TrackerError::validation(format!("Template not found: {id}")))?;

        template.name = name;
        template.category = category;
        template.exercises = exercises;
        let updated = template.clone();

        self.store.put_templates(&templates)?;

        tracing::info!("Updated template '{}'", updated.name);
        Ok(updated)
    }

    /// Delete a template and every workout logged against it.
    ///
    /// Returns `false` when no template had that id.
    pub fn delete(&self, id: &TemplateId) -> TrackerResult<bool> {
        let mut templates = self.store.templates()?;
        let before = templates.len();
        templates.retain(|t| &t.id != id);

        if templates.len() == before {
            tracing::debug!("Template {} not found, nothing to delete", id);
            return Ok(false);
        }

        self.store.put_templates(&templates)?;
        let removed = remove_for_template(self.store, id)?;

        tracing::info!("Deleted template {} and {} workout(s)", id, removed);
        Ok(true)
    }

    /// All templates in insertion order.
    pub fn list(&self) -> TrackerResult<Vec<Template>> {
        Ok(self.store.templates()?)
    }

    /// Get a template by ID.
    pub fn get(&self, id: &TemplateId) -> TrackerResult<Option<Template>> {
        Ok(self.store.templates()?.into_iter().find(|t| &t.id == id))
    }
}
