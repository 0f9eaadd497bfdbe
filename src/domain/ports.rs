use crate::domain::model::Holding;
use crate::utils::error::Result;

/// Somewhere holdings come from: a terminal session, a CSV export, a config file.
pub trait RosterSource {
    fn load(&mut self) -> Result<Vec<Holding>>;

    /// Target the source asks for, if it carries one.
    fn target(&self) -> Option<u32> {
        None
    }
}

impl<T: RosterSource + ?Sized> RosterSource for Box<T> {
    fn load(&mut self) -> Result<Vec<Holding>> {
        (**self).load()
    }

    fn target(&self) -> Option<u32> {
        (**self).target()
    }
}
