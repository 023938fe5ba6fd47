//! Cascade stage abstraction.
//!
//! Each signal source (charset, listing title, markup declaration, body
//! statistics) is a [`Stage`]: a pure function of the page, its charset and
//! its mode that either answers or passes. The [`Pipeline`](crate::pipeline::Pipeline)
//! runs stages in confidence order and keeps the first answer, so every
//! stage can be tested on its own.

pub mod body;
pub mod charset;
pub mod markup;
pub mod title;

pub use body::BodyStage;
pub use charset::CharsetStage;
pub use markup::MarkupStage;
pub use title::TitleStage;

use crate::{
    context::Context,
    lang::{LangResult, PageMode},
    page::Page,
};

/// One document's detection inputs.
#[derive(Clone, Copy)]
pub struct Input<'a> {
    pub page: &'a dyn Page,
    /// Resolved encoding label, possibly empty.
    pub charset: &'a str,
    pub mode: PageMode,
}

impl<'a> Input<'a> {
    pub fn new(page: &'a dyn Page, charset: &'a str, mode: PageMode) -> Self {
        Self {
            page,
            charset,
            mode,
        }
    }
}

/// A single step of the detection cascade.
pub trait Stage: Send + Sync {
    /// Human-readable name, used in logs.
    fn name(&self) -> &'static str;

    /// Cheap gate. Returning `false` skips the stage without touching the page.
    fn needs_apply(&self, input: &Input<'_>, ctx: &Context) -> bool;

    /// Run the stage. `None` passes to the next one.
    fn detect(&self, input: &Input<'_>, ctx: &Context) -> Option<LangResult>;
}
