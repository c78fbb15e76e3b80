//! Board Builder
//!
//! Turns the flat, pre-filtered record list into the ordered column/card
//! snapshot. Runs once per page view; all mutation afterwards happens
//! client-side.

use crate::avatar::resolve_avatar;
use crate::board::{column_id, item_id, BoardItem, Column};
use crate::config::BoardConfig;
use crate::domain::{FieldDef, FieldId, Record};
use crate::error::BoardResult;
use crate::extract::{category_keys, extract_tag_keys, extract_text, loose_eq};
use crate::host::{FieldCatalog, HostContext, RecordSource, UserDirectory};

/// Records fetched per source round trip
pub const DEFAULT_CHUNK_SIZE: usize = 1000;

pub struct BoardBuilder<'a> {
    source: &'a dyn RecordSource,
    catalog: &'a dyn FieldCatalog,
    users: &'a dyn UserDirectory,
    host: &'a HostContext,
    config: &'a BoardConfig,
    chunk_size: usize,
}

impl<'a> BoardBuilder<'a> {
    pub fn new(
        source: &'a dyn RecordSource,
        catalog: &'a dyn FieldCatalog,
        users: &'a dyn UserDirectory,
        host: &'a HostContext,
        config: &'a BoardConfig,
    ) -> Self {
        Self {
            source,
            catalog,
            users,
            host,
            config,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    /// Build the column list.
    ///
    /// A missing or unresolvable category mapping is a configuration
    /// error: it logs and yields an empty board, it never fails the
    /// request. Only source failures propagate as `Err`.
    pub async fn build(&self) -> BoardResult<Vec<Column>> {
        let Some(category) = self.resolve_category().await else {
            return Ok(Vec::new());
        };
        let title = self.resolve_optional(self.config.title, "title").await;
        let detail = self.resolve_optional(self.config.detail, "detail").await;
        let avatar = self.resolve_optional(self.config.avatar, "avatar").await;
        let tag = self.resolve_optional(self.config.tag, "tag").await;

        let records = self.fetch_all().await?;

        let drag_to: Vec<String> = category
            .options
            .iter()
            .map(|o| column_id(&o.key))
            .collect();
        let mut columns: Vec<Column> = category
            .options
            .iter()
            .map(|option| Column {
                id: column_id(&option.key),
                field_name: category.name.clone(),
                key: option.key.clone(),
                title: option.label.clone(),
                drag_to: drag_to.clone(),
                items: Vec::new(),
            })
            .collect();

        for record in &records {
            let keys = category_keys(record.value(&category.name));
            if keys.is_empty() {
                // no category value: the record has no column on this board
                continue;
            }
            let matching: Vec<usize> = columns
                .iter()
                .enumerate()
                .filter(|(_, col)| keys.iter().any(|k| loose_eq(k, &col.key)))
                .map(|(i, _)| i)
                .collect();
            if matching.is_empty() {
                continue;
            }
            let item = self
                .build_item(record, title.as_ref(), detail.as_ref(), avatar.as_ref(), tag.as_ref())
                .await;
            for index in matching {
                columns[index].items.push(item.clone());
            }
        }

        Ok(columns)
    }

    /// Category mapping is required; anything missing logs and bails out
    async fn resolve_category(&self) -> Option<FieldDef> {
        let Some(id) = self.config.category else {
            log::error!("kanban view: category field is not configured");
            return None;
        };
        let Some(field) = self.catalog.field(id).await else {
            log::error!("kanban view: category field {id} not found, it may have been deleted");
            return None;
        };
        Some(field)
    }

    /// Optional mappings degrade silently when the field no longer exists
    async fn resolve_optional(&self, id: Option<FieldId>, role: &str) -> Option<FieldDef> {
        let id = id?;
        let field = self.catalog.field(id).await;
        if field.is_none() {
            log::warn!("kanban view: {role} field {id} not found, falling back to default");
        }
        field
    }

    /// Accumulate the full snapshot in bounded chunks
    async fn fetch_all(&self) -> BoardResult<Vec<Record>> {
        let mut records = Vec::new();
        let mut offset = 0;
        loop {
            let chunk = self.source.fetch_chunk(offset, self.chunk_size).await?;
            let len = chunk.len();
            records.extend(chunk);
            if len < self.chunk_size {
                return Ok(records);
            }
            offset += len;
        }
    }

    async fn build_item(
        &self,
        record: &Record,
        title: Option<&FieldDef>,
        detail: Option<&FieldDef>,
        avatar: Option<&FieldDef>,
        tag: Option<&FieldDef>,
    ) -> BoardItem {
        let (tag_field, tag_options, current_tags, raw_tag_value) = match tag {
            Some(field) => {
                let raw = record.value(&field.name).cloned();
                let current = raw
                    .as_ref()
                    .map(|v| extract_tag_keys(v))
                    .unwrap_or_default()
                    .into_iter()
                    // keep the invariant: current tags ⊆ known option keys
                    .filter(|key| field.option_label(key).is_some())
                    .collect();
                (Some(field.name.clone()), field.options.clone(), current, raw)
            }
            None => (None, Vec::new(), Vec::new(), None),
        };

        let avatar_value = avatar.and_then(|f| record.value(&f.name));
        let avatar_info = resolve_avatar(avatar_value, record, self.users, self.host).await;

        BoardItem {
            id: item_id(record.id),
            title: self.resolve_title(record, title),
            detail: self.resolve_detail(record, detail),
            data_id: record.id,
            table_name: self.host.table_name.clone(),
            update_url: self.host.update_url.clone(),
            record: serde_json::to_value(record).unwrap_or_default(),
            avatar_info,
            tag_field,
            tag_options,
            current_tags,
            allow_multiple_tags: true,
            raw_tag_value,
        }
    }

    /// Mapped title field when present, else the record's display label
    fn resolve_title(&self, record: &Record, field: Option<&FieldDef>) -> String {
        let fallback = || record.label.clone();
        let Some(field) = field else { return fallback() };
        let Some(value) = record.value(&field.name) else {
            return fallback();
        };
        match extract_text(value) {
            Some(text) if !text.is_empty() => text,
            Some(_) => fallback(),
            None => {
                log::warn!(
                    "kanban view: title value of record {} has an unexpected shape, using label",
                    record.id
                );
                fallback()
            }
        }
    }

    /// Same extraction as the title, but defaults to empty and never
    /// borrows the record label
    fn resolve_detail(&self, record: &Record, field: Option<&FieldDef>) -> String {
        let Some(field) = field else {
            return String::new();
        };
        let Some(value) = record.value(&field.name) else {
            return String::new();
        };
        match extract_text(value) {
            Some(text) => text,
            None => {
                log::warn!(
                    "kanban view: detail value of record {} has an unexpected shape",
                    record.id
                );
                String::new()
            }
        }
    }
}
