// src/application/services/formats.rs
use std::sync::Arc;

use super::empty_update;
use crate::{
    application::{
        dto::FormatDto,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::catalog::{Amount, Format, FormatId, FormatRepository, NewFormat, required_label},
};

pub struct CreateFormatCommand {
    pub name: String,
    pub price: f64,
}

#[derive(Default)]
pub struct UpdateFormatCommand {
    pub id: i64,
    pub name: Option<String>,
    pub price: Option<f64>,
}

pub struct FormatService {
    formats: Arc<dyn FormatRepository>,
    clock: Arc<dyn Clock>,
}

impl FormatService {
    pub fn new(formats: Arc<dyn FormatRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { formats, clock }
    }

    pub async fn list_formats(&self) -> ApplicationResult<Vec<FormatDto>> {
        let formats = self.formats.list().await?;
        Ok(formats.into_iter().map(FormatDto::from).collect())
    }

    pub async fn get_format(&self, id: i64) -> ApplicationResult<FormatDto> {
        let id = FormatId::new(id)?;
        self.load(id).await.map(Into::into)
    }

    pub async fn create_format(&self, command: CreateFormatCommand) -> ApplicationResult<FormatDto> {
        let created = self
            .formats
            .insert(NewFormat {
                name: required_label(command.name, "Format name")?,
                price: Amount::new(command.price)?,
                created_at: self.clock.now(),
            })
            .await?;
        tracing::info!(format_id = %created.id, name = %created.name, "format created");
        Ok(created.into())
    }

    pub async fn update_format(&self, command: UpdateFormatCommand) -> ApplicationResult<FormatDto> {
        if command.name.is_none() && command.price.is_none() {
            return Err(empty_update());
        }
        let id = FormatId::new(command.id)?;
        let mut format = self.load(id).await?;

        if let Some(name) = command.name {
            format.name = required_label(name, "Format name")?;
        }
        if let Some(price) = command.price {
            format.price = Amount::new(price)?;
        }

        format.updated_at = self.clock.now();
        let saved = self.formats.save(&format).await?;
        Ok(saved.into())
    }

    pub async fn delete_format(&self, id: i64) -> ApplicationResult<()> {
        let id = FormatId::new(id)?;
        self.formats.delete(id).await?;
        tracing::info!(format_id = %id, "format deleted");
        Ok(())
    }

    async fn load(&self, id: FormatId) -> ApplicationResult<Format> {
        self.formats
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Format not found"))
    }
}
