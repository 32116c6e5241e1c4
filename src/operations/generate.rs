use crate::blueprint::{Blueprint, Dimensions};
use crate::config::BlueprintConfig;
use crate::error::Result;
use crate::survey::WallMeasurement;

use super::layout::ComposeLayout;
use super::render::{Drawing, RenderBlueprint};

/// Runs the whole pipeline: compose rooms, render, wrap as a [`Blueprint`].
#[derive(Debug)]
pub struct GenerateBlueprint<'a> {
    walls: &'a [WallMeasurement],
    config: &'a BlueprintConfig,
}

impl<'a> GenerateBlueprint<'a> {
    /// Creates a new pipeline run over a survey's walls.
    #[must_use]
    pub fn new(walls: &'a [WallMeasurement], config: &'a BlueprintConfig) -> Self {
        Self { walls, config }
    }

    /// Generates a new, pending blueprint.
    ///
    /// # Errors
    ///
    /// Propagates layout and render errors; see [`ComposeLayout::execute`] and
    /// [`RenderBlueprint::execute`].
    pub fn execute(&self) -> Result<Blueprint> {
        let drawing = self.draw()?;
        Ok(Blueprint::new(drawing.svg, Dimensions::from(&drawing.view_box)))
    }

    /// Regenerates `existing` in place, flagging it for review.
    ///
    /// `existing` is left untouched if generation fails.
    ///
    /// # Errors
    ///
    /// Same as [`GenerateBlueprint::execute`].
    pub fn regenerate(&self, existing: &mut Blueprint) -> Result<()> {
        let drawing = self.draw()?;
        existing.regenerate(drawing.svg, Dimensions::from(&drawing.view_box));
        Ok(())
    }

    fn draw(&self) -> Result<Drawing> {
        tracing::info!(walls = self.walls.len(), "generating blueprint");
        let rooms = ComposeLayout::new(self.walls, &self.config.layout).execute()?;
        let drawing = RenderBlueprint::new(&rooms, &self.config.render).execute()?;
        tracing::info!(
            rooms = rooms.len(),
            width = drawing.view_box.width(),
            height = drawing.view_box.height(),
            "blueprint generated"
        );
        Ok(drawing)
    }
}
