// src/application/services/sizes.rs
use std::sync::Arc;

use super::{empty_update, non_blank};
use crate::{
    application::{
        dto::SizeDto,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::catalog::{
        Amount, NewSize, PhotoRepository, PriceRepository, SizeId, SizeRepository,
        size::{DEFAULT_SIZE_UNIT, dimension, size_name},
    },
};

pub struct CreateSizeCommand {
    pub name: String,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub unit: Option<String>,
    pub price: Option<f64>,
}

#[derive(Default)]
pub struct UpdateSizeCommand {
    pub id: i64,
    pub name: Option<String>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub unit: Option<String>,
    pub price: Option<f64>,
}

impl UpdateSizeCommand {
    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.width.is_none()
            && self.height.is_none()
            && self.unit.is_none()
            && self.price.is_none()
    }
}

pub struct SizeService {
    sizes: Arc<dyn SizeRepository>,
    photos: Arc<dyn PhotoRepository>,
    prices: Arc<dyn PriceRepository>,
    clock: Arc<dyn Clock>,
}

impl SizeService {
    pub fn new(
        sizes: Arc<dyn SizeRepository>,
        photos: Arc<dyn PhotoRepository>,
        prices: Arc<dyn PriceRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            sizes,
            photos,
            prices,
            clock,
        }
    }

    pub async fn list_sizes(&self) -> ApplicationResult<Vec<SizeDto>> {
        let sizes = self.sizes.list().await?;
        Ok(sizes.into_iter().map(SizeDto::from).collect())
    }

    pub async fn create_size(&self, command: CreateSizeCommand) -> ApplicationResult<SizeDto> {
        let created = self
            .sizes
            .insert(NewSize {
                name: size_name(command.name)?,
                width: dimension(command.width, "width")?,
                height: dimension(command.height, "height")?,
                unit: command
                    .unit
                    .and_then(non_blank)
                    .unwrap_or_else(|| DEFAULT_SIZE_UNIT.to_string()),
                price: command.price.map(Amount::new).transpose()?,
                created_at: self.clock.now(),
            })
            .await?;
        tracing::info!(size_id = %created.id, name = %created.name, "size created");
        Ok(created.into())
    }

    pub async fn update_size(&self, command: UpdateSizeCommand) -> ApplicationResult<SizeDto> {
        if command.is_empty() {
            return Err(empty_update());
        }
        let id = SizeId::new(command.id)?;
        let mut size = self
            .sizes
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Size not found"))?;

        if let Some(name) = command.name {
            size.name = size_name(name)?;
        }
        if command.width.is_some() {
            size.width = dimension(command.width, "width")?;
        }
        if command.height.is_some() {
            size.height = dimension(command.height, "height")?;
        }
        if let Some(unit) = command.unit.and_then(non_blank) {
            size.unit = unit;
        }
        if let Some(price) = command.price {
            size.price = Some(Amount::new(price)?);
        }

        size.updated_at = self.clock.now();
        let saved = self.sizes.save(&size).await?;
        Ok(saved.into())
    }

    pub async fn delete_size(&self, id: i64) -> ApplicationResult<()> {
        let id = SizeId::new(id)?;
        if self.sizes.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::not_found("Size not found"));
        }

        let photo_count = self.photos.count_by_size(id).await?;
        let price_count = self.prices.count_by_size(id).await?;
        if photo_count > 0 || price_count > 0 {
            let mut references = Vec::new();
            if photo_count > 0 {
                references.push(format!("{photo_count} photo(s)"));
            }
            if price_count > 0 {
                references.push(format!("{price_count} price(s)"));
            }
            return Err(ApplicationError::referenced(
                "Cannot delete size with associated references",
                format!(
                    "This size has {}. Please reassign or delete them first.",
                    references.join(" and ")
                ),
            ));
        }

        self.sizes.delete(id).await?;
        tracing::info!(size_id = %id, "size deleted");
        Ok(())
    }
}
