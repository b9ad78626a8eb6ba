use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client as DynamoClient;
use diary_atoms::diary::{DiaryEntry, DiaryStore};
use diary_atoms::error::HandlerError;

/// Diary store backed by a single DynamoDB table keyed on `id`.
pub struct DynamoDiaryStore {
    client: DynamoClient,
    table_name: String,
}

impl DynamoDiaryStore {
    pub fn new(client: DynamoClient, table_name: String) -> Self {
        Self { client, table_name }
    }
}

#[async_trait]
impl DiaryStore for DynamoDiaryStore {
    async fn put_entry(&self, entry: &DiaryEntry) -> Result<(), HandlerError> {
        // put_item overwrites on an identical id; ids carry microsecond
        // timestamps, so that path is practically unreachable.
        self.client
            .put_item()
            .table_name(&self.table_name)
            .item("id", AttributeValue::S(entry.id.clone()))
            .item("date", AttributeValue::S(entry.date.clone()))
            .item("title", AttributeValue::S(entry.title.clone()))
            .item("content", AttributeValue::S(entry.content.clone()))
            .item("createdAt", AttributeValue::S(entry.created_at.clone()))
            .send()
            .await
            .map_err(|e| HandlerError::Collaborator(format!("DynamoDB put_item error: {e}")))?;

        Ok(())
    }

    async fn scan_entries(&self) -> Result<Vec<DiaryEntry>, HandlerError> {
        // Single unpaginated scan; bounded by DynamoDB's default page size.
        let result = self
            .client
            .scan()
            .table_name(&self.table_name)
            .send()
            .await
            .map_err(|e| HandlerError::Collaborator(format!("DynamoDB scan error: {e}")))?;

        let entries = result
            .items()
            .iter()
            .map(|item| DiaryEntry {
                id: string_attr(item, "id"),
                date: string_attr(item, "date"),
                title: string_attr(item, "title"),
                content: string_attr(item, "content"),
                created_at: string_attr(item, "createdAt"),
            })
            .collect();

        Ok(entries)
    }
}

fn string_attr(item: &HashMap<String, AttributeValue>, name: &str) -> String {
    item.get(name)
        .and_then(|v| v.as_s().ok())
        .cloned()
        .unwrap_or_default()
}
