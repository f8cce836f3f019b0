// SPDX-License-Identifier: MPL-2.0
//! Page shell: fixed section order and the deferred starfield mount.
//!
//! The starfield is the page's heaviest visual component. It is never part
//! of the first render: the shell starts with a same-footprint backdrop
//! placeholder, schedules construction once startup completes, and swaps the
//! two atomically when the generated geometry arrives. There is no path back
//! from `Mounted`, and no cancellation — once scheduled, the mount always
//! completes.

use crate::config::defaults::{ANCHOR_PROJECTS, ANCHOR_SKILLS};
use crate::ui::components::starfield::{Star, Starfield};
use crate::ui::styles;
use iced::widget::{canvas, container, Space};
use iced::{Element, Length};

/// Sections reachable from the navbar, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    Hero,
    Skills,
    Projects,
}

impl SectionId {
    /// Scroll anchor as a fraction of the shell's scroll range.
    #[must_use]
    pub fn anchor(self) -> f32 {
        match self {
            SectionId::Hero => 0.0,
            SectionId::Skills => ANCHOR_SKILLS,
            SectionId::Projects => ANCHOR_PROJECTS,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SectionId::Hero => "About me",
            SectionId::Skills => "Skills",
            SectionId::Projects => "Projects",
        }
    }
}

/// Navbar entries in display order.
pub const NAV_SECTIONS: [SectionId; 3] = [SectionId::Hero, SectionId::Skills, SectionId::Projects];

/// Mount phase of the deferred starfield.
#[derive(Debug)]
pub enum StarfieldPhase {
    /// First render: nothing scheduled yet.
    Unmounted,
    /// Construction scheduled; geometry is being generated off-thread.
    Mounting,
    /// The starfield owns its geometry and draw cache for the page's
    /// lifetime.
    Mounted(Starfield),
}

/// Shell state.
#[derive(Debug)]
pub struct State {
    starfield: StarfieldPhase,
}

/// Messages for the shell.
#[derive(Debug, Clone)]
pub enum Message {
    /// Startup finished; begin constructing the starfield.
    MountScheduled,
    /// Generated geometry arrived.
    StarfieldBuilt(Vec<Star>),
}

/// Effects produced by shell changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// Construction should be started.
    BuildStarfield,
    /// The starfield just mounted.
    Mounted,
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    pub fn new() -> Self {
        Self {
            starfield: StarfieldPhase::Unmounted,
        }
    }

    /// Handle a shell message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::MountScheduled => match self.starfield {
                StarfieldPhase::Unmounted => {
                    self.starfield = StarfieldPhase::Mounting;
                    Effect::BuildStarfield
                }
                _ => Effect::None,
            },
            Message::StarfieldBuilt(stars) => match self.starfield {
                StarfieldPhase::Mounting => {
                    self.starfield = StarfieldPhase::Mounted(Starfield::new(stars));
                    Effect::Mounted
                }
                // Geometry arriving twice, or before scheduling, is dropped.
                _ => Effect::None,
            },
        }
    }

    /// Whether the backdrop placeholder is currently shown. Exactly one of
    /// placeholder and starfield is visible at any instant.
    #[must_use]
    pub fn shows_placeholder(&self) -> bool {
        !matches!(self.starfield, StarfieldPhase::Mounted(_))
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        matches!(self.starfield, StarfieldPhase::Mounted(_))
    }

    pub fn starfield_mut(&mut self) -> Option<&mut Starfield> {
        match &mut self.starfield {
            StarfieldPhase::Mounted(field) => Some(field),
            _ => None,
        }
    }

    /// Full-viewport background: the mounted starfield, or its placeholder.
    pub fn background<'a, Message: 'a>(&'a self) -> Element<'a, Message> {
        match &self.starfield {
            StarfieldPhase::Mounted(field) => canvas::Canvas::new(field)
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
            _ => container(Space::new(Length::Fill, Length::Fill))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::container::backdrop)
                .into(),
        }
    }
}
