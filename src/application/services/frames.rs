// src/application/services/frames.rs
use std::sync::Arc;

use super::empty_update;
use crate::{
    application::{
        dto::FrameDto,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::catalog::{
        Amount, FrameId, FrameRepository, NewFrame, frame::DEFAULT_FRAMES, required_label,
    },
};

pub struct CreateFrameCommand {
    pub style: String,
    pub price: f64,
}

#[derive(Default)]
pub struct UpdateFrameCommand {
    pub id: i64,
    pub style: Option<String>,
    pub price: Option<f64>,
}

pub struct FrameService {
    frames: Arc<dyn FrameRepository>,
    clock: Arc<dyn Clock>,
}

impl FrameService {
    pub fn new(frames: Arc<dyn FrameRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { frames, clock }
    }

    /// Lists frames by style, seeding the default set into an empty catalog.
    pub async fn list_frames(&self) -> ApplicationResult<Vec<FrameDto>> {
        if self.frames.count().await? == 0 {
            self.seed_defaults().await?;
        }
        let frames = self.frames.list().await?;
        Ok(frames.into_iter().map(FrameDto::from).collect())
    }

    async fn seed_defaults(&self) -> ApplicationResult<()> {
        let now = self.clock.now();
        let defaults = DEFAULT_FRAMES
            .iter()
            .map(|(style, price)| {
                Ok(NewFrame {
                    style: (*style).to_string(),
                    price: Amount::new(*price)?,
                    created_at: now,
                })
            })
            .collect::<ApplicationResult<Vec<_>>>()?;
        self.frames.insert_many(defaults).await?;
        tracing::info!(count = DEFAULT_FRAMES.len(), "seeded default frames");
        Ok(())
    }

    pub async fn create_frame(&self, command: CreateFrameCommand) -> ApplicationResult<FrameDto> {
        let created = self
            .frames
            .insert(NewFrame {
                style: required_label(command.style, "Frame style")?,
                price: Amount::new(command.price)?,
                created_at: self.clock.now(),
            })
            .await?;
        tracing::info!(frame_id = %created.id, style = %created.style, "frame created");
        Ok(created.into())
    }

    pub async fn update_frame(&self, command: UpdateFrameCommand) -> ApplicationResult<FrameDto> {
        if command.style.is_none() && command.price.is_none() {
            return Err(empty_update());
        }
        let id = FrameId::new(command.id)?;
        let mut frame = self
            .frames
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Frame not found"))?;

        if let Some(style) = command.style {
            frame.style = required_label(style, "Frame style")?;
        }
        if let Some(price) = command.price {
            frame.price = Amount::new(price)?;
        }

        frame.updated_at = self.clock.now();
        let saved = self.frames.save(&frame).await?;
        Ok(saved.into())
    }

    pub async fn delete_frame(&self, id: i64) -> ApplicationResult<()> {
        let id = FrameId::new(id)?;
        self.frames.delete(id).await?;
        tracing::info!(frame_id = %id, "frame deleted");
        Ok(())
    }
}
