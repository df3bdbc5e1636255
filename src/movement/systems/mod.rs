//! Movement domain: system modules for locomotion updates.

pub(crate) mod input;
pub(crate) mod motion;

pub(crate) use input::read_input;
pub(crate) use motion::move_player;
