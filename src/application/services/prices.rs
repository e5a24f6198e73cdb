// src/application/services/prices.rs
use std::{collections::HashMap, sync::Arc};

use super::{empty_update, non_blank};
use crate::{
    application::{
        dto::PriceDto,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::catalog::{Amount, NewPrice, PriceId, PriceRepository, SizeId, SizeRepository},
};

pub struct CreatePriceCommand {
    pub size_id: i64,
    pub price: f64,
    pub label: Option<String>,
}

#[derive(Default)]
pub struct UpdatePriceCommand {
    pub id: i64,
    pub size_id: Option<i64>,
    pub price: Option<f64>,
    /// `Some(None)` removes the label.
    pub label: Option<Option<String>>,
}

pub struct PriceService {
    prices: Arc<dyn PriceRepository>,
    sizes: Arc<dyn SizeRepository>,
    clock: Arc<dyn Clock>,
}

impl PriceService {
    pub fn new(
        prices: Arc<dyn PriceRepository>,
        sizes: Arc<dyn SizeRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            prices,
            sizes,
            clock,
        }
    }

    /// Prices with their size embedded.
    pub async fn list_prices(&self) -> ApplicationResult<Vec<PriceDto>> {
        let prices = self.prices.list().await?;
        let sizes: HashMap<SizeId, _> = self
            .sizes
            .list()
            .await?
            .into_iter()
            .map(|size| (size.id, size))
            .collect();
        Ok(prices
            .into_iter()
            .map(|price| {
                let size = sizes.get(&price.size_id).cloned();
                PriceDto::with_size(price, size)
            })
            .collect())
    }

    pub async fn create_price(&self, command: CreatePriceCommand) -> ApplicationResult<PriceDto> {
        let size_id = SizeId::new(command.size_id)?;
        let size = self
            .sizes
            .find_by_id(size_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Size not found"))?;

        let created = self
            .prices
            .insert(NewPrice {
                size_id,
                price: Amount::new(command.price)?,
                label: command.label.and_then(non_blank),
                created_at: self.clock.now(),
            })
            .await?;
        tracing::info!(price_id = %created.id, size_id = %size_id, "price created");
        Ok(PriceDto::with_size(created, Some(size)))
    }

    pub async fn update_price(&self, command: UpdatePriceCommand) -> ApplicationResult<PriceDto> {
        if command.size_id.is_none() && command.price.is_none() && command.label.is_none() {
            return Err(empty_update());
        }
        let id = PriceId::new(command.id)?;
        let mut price = self
            .prices
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Price not found"))?;

        if let Some(size_id) = command.size_id {
            price.size_id = SizeId::new(size_id)?;
        }
        if let Some(amount) = command.price {
            price.price = Amount::new(amount)?;
        }
        if let Some(label) = command.label {
            price.label = label.and_then(non_blank);
        }

        let size = self
            .sizes
            .find_by_id(price.size_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Size not found"))?;

        price.updated_at = self.clock.now();
        let saved = self.prices.save(&price).await?;
        Ok(PriceDto::with_size(saved, Some(size)))
    }

    pub async fn delete_price(&self, id: i64) -> ApplicationResult<()> {
        let id = PriceId::new(id)?;
        self.prices.delete(id).await?;
        tracing::info!(price_id = %id, "price deleted");
        Ok(())
    }
}
