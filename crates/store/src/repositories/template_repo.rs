//! Repository for video templates.

use narratix_core::templates::TemplateSeed;

use crate::models::template::{CreateTemplate, Template};
use crate::{MemStore, StoreError};

pub struct TemplateRepo;

impl TemplateRepo {
    pub async fn create(store: &MemStore, input: &CreateTemplate) -> Result<Template, StoreError> {
        let template = Template {
            id: store.next_id(),
            name: input.name.clone(),
            description: input.description.clone(),
            thumbnail_url: input.thumbnail_url.clone(),
            settings: input.settings.clone(),
        };
        store
            .tables
            .write()
            .await
            .templates
            .insert(template.id, template.clone());
        Ok(template)
    }

    /// Every template, unfiltered, in id order.
    pub async fn list(store: &MemStore) -> Result<Vec<Template>, StoreError> {
        Ok(store.tables.read().await.templates.values().cloned().collect())
    }

    /// Insert each catalog entry, returning how many were added.
    pub async fn seed(store: &MemStore, catalog: &[TemplateSeed]) -> Result<usize, StoreError> {
        for seed in catalog {
            Self::create(store, &CreateTemplate::from(seed)).await?;
        }
        tracing::info!(count = catalog.len(), "Seeded template catalog");
        Ok(catalog.len())
    }
}

#[cfg(test)]
mod tests {
    use narratix_core::templates::builtin_templates;

    use super::*;

    #[tokio::test]
    async fn seed_then_list_returns_whole_catalog() {
        let store = MemStore::new();
        let catalog = builtin_templates();
        let added = TemplateRepo::seed(&store, &catalog).await.unwrap();

        let listed = TemplateRepo::list(&store).await.unwrap();
        assert_eq!(added, catalog.len());
        assert_eq!(listed.len(), catalog.len());
        assert_eq!(listed[0].name, catalog[0].name);
        assert!(listed.windows(2).all(|w| w[0].id < w[1].id));
    }
}
